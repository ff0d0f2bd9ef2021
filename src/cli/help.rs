//! Canned answers to common questions.

use crate::options::Config;

const SAMPLES: &str = "'how do I win', 'what are the rules', 'how are points awarded'";

/// Words that mark menu input as a question rather than a command.
const QUESTION_WORDS: [&str; 5] = ["how", "what", "why", "where", "when"];

/// Returns whether free-form menu input reads like a question.
#[must_use]
pub fn is_question(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input.contains('?')
        || QUESTION_WORDS
            .iter()
            .any(|word| input.split_whitespace().next() == Some(*word))
}

/// Answers a question by keyword.
///
/// Reward figures come from `config`. Unmatched questions get a fallback
/// that lists the questions this responder understands.
///
/// # Example
///
/// ```
/// use rpsrs::Config;
/// use rpsrs::cli::help::answer;
///
/// let text = answer("how are points awarded?", &Config::default());
/// assert!(text.contains("Win a series: 100 points"));
/// ```
#[must_use]
pub fn answer(question: &str, config: &Config) -> String {
    let question = question.trim().to_lowercase();
    let words: Vec<&str> = question
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();
    let mentions = |stem: &str| words.iter().any(|word| word.starts_with(stem));

    if words.is_empty() || words == ["help"] {
        return "You can ask questions like:\n  \
             - 'how do I win' (tips and rules)\n  \
             - 'what are the rules' (game rules)\n  \
             - 'how are points awarded' (rewards and scoring)\n\
             Or type 'play' to start, 'score' to view points, or 'config' to change rewards."
            .to_owned();
    }

    if mentions("point") || mentions("reward") || mentions("score") {
        return format!(
            "Rewards:\n  \
             - Win a series: {} points\n  \
             - Tie a series: {} points\n  \
             - Lose a series: {} points\n\
             You can change these under 'config'.",
            config.win_reward, config.tie_reward, config.lose_reward
        );
    }

    if mentions("win") {
        return "Tips to win:\n  \
                - Rock beats scissors, scissors beats paper, and paper beats rock.\n  \
                - There's no guaranteed move against a random opponent, but looking for patterns can help.\n  \
                - Play enough rounds to let statistics matter; your all-time percentages are tracked under 'score'."
            .to_owned();
    }

    if mentions("rule") {
        return "Rules:\n  \
                - Each round, choose 'rock', 'paper' or 'scissors'.\n  \
                - Rock beats scissors, scissors beats paper, paper beats rock. Same move is a draw."
            .to_owned();
    }

    format!("Sorry, I don't know that one. Try: {SAMPLES}, or type 'help' to see more options.")
}
