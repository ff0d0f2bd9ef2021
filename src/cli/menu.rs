//! Interactive main menu.

use core::str::FromStr;
use std::io::{self, BufRead, Write};

use crate::cli::console::{Console, is_quit};
use crate::cli::help;
use crate::moves::Move;
use crate::options::Config;
use crate::series::{ModeKind, Series, SeriesMode};
use crate::session::{Session, Settlement};

/// Main menu banner.
pub const MENU: &str = "\n=== Welcome to Rock Paper Scissors! ===
What would you like to do?
  1) play   - Start a friendly series of rounds
  2) demo   - Watch a short demo (random moves)
  3) score  - View your points and all-time stats
  4) config - Change reward amounts and messages
  5) reset  - Reset your points and stats
  6) quit   - Exit the game
  7) help   - Ask a quick question (e.g., 'how do I win')";

/// A main menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a series.
    Play,
    /// Run an automated decisive round.
    Demo,
    /// Show all-time statistics.
    Score,
    /// Edit rewards and messages.
    Config,
    /// Zero all-time statistics.
    Reset,
    /// Leave the game.
    Quit,
    /// Prompt for a question.
    Help,
    /// A question typed straight at the menu.
    Ask(String),
}

impl Command {
    /// Parses a menu selection by number, name or question form.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        let command = match input.as_str() {
            "1" | "play" => Self::Play,
            "2" | "demo" => Self::Demo,
            "3" | "score" | "s" => Self::Score,
            "4" | "config" => Self::Config,
            "5" | "reset" => Self::Reset,
            "6" | "quit" | "q" | "exit" => Self::Quit,
            "7" | "help" => Self::Help,
            _ if help::is_question(&input) => Self::Ask(input),
            _ => return None,
        };
        Some(command)
    }
}

/// Whether the menu loop keeps going.
enum Flow {
    Continue,
    Exit,
}

/// Main menu loop over a [`Session`] and a [`Console`].
pub struct Menu<R, W> {
    session: Session,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu.
    pub const fn new(session: Session, console: Console<R, W>) -> Self {
        Self { session, console }
    }

    /// Returns the session.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the menu, returning its parts.
    pub fn into_parts(self) -> (Session, Console<R, W>) {
        (self.session, self.console)
    }

    /// Runs until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console itself fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.console.say(MENU)?;

        loop {
            let Some(input) = self.console.prompt("What would you like to do? ")? else {
                self.console.say("Goodbye")?;
                return Ok(());
            };

            let Some(command) = Command::parse(&input) else {
                self.console.say(
                    "Invalid input; type 'play', 'demo', 'score', 'config', 'reset', 'help' or 'quit'.",
                )?;
                continue;
            };

            if let Flow::Exit = self.dispatch(command)? {
                self.console.say("\nGoodbye")?;
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Play => self.play()?,
            Command::Demo => {
                self.demo()?;
                self.console.say(MENU)?;
            }
            Command::Score => self.score()?,
            Command::Config => {
                self.configure()?;
                self.console.say(MENU)?;
            }
            Command::Reset => {
                self.reset()?;
                self.console.say(MENU)?;
            }
            Command::Quit => return Ok(Flow::Exit),
            Command::Help => {
                match self.console.prompt("Ask a question: ")? {
                    Some(question) => self.answer(&question)?,
                    None => return Ok(Flow::Exit),
                }
            }
            Command::Ask(question) => self.answer(&question)?,
        }
        Ok(Flow::Continue)
    }

    fn answer(&mut self, question: &str) -> io::Result<()> {
        let text = help::answer(question, self.session.config());
        self.console.say(format!("\n{text}\n"))
    }

    fn play(&mut self) -> io::Result<()> {
        let Some(mode) = self.prompt_mode()? else {
            self.console.say("Cancelled, returning to the main menu.")?;
            return Ok(());
        };

        let mut series = self.session.start_series(mode);
        log::info!("starting series: {mode}");
        self.run_series(&mut series)?;

        let settlement = self.session.settle(series);
        self.print_summary(&settlement)
    }

    /// Asks for the mode and then the count until both are valid.
    fn prompt_mode(&mut self) -> io::Result<Option<SeriesMode>> {
        let kind = loop {
            let Some(input) = self.console.prompt("Play mode ('rounds' or 'best-of'): ")? else {
                return Ok(None);
            };
            if is_quit(&input) {
                return Ok(None);
            }
            match ModeKind::from_str(&input) {
                Ok(kind) => break kind,
                Err(_) => self.console.say("Please enter 'rounds' or 'best-of'.")?,
            }
        };

        let prompt = match kind {
            ModeKind::Rounds => {
                "How many rounds would you like to play? Enter a whole number (e.g., 3): "
            }
            ModeKind::BestOf => "Best-of N: enter an odd number (e.g., 3 or 5): ",
        };

        loop {
            let Some(input) = self.console.prompt(prompt)? else {
                return Ok(None);
            };
            if is_quit(&input) {
                return Ok(None);
            }
            let Ok(count) = input.parse::<u32>() else {
                self.console
                    .say("Please enter a whole number greater than zero.")?;
                continue;
            };
            match kind.with_count(count) {
                Ok(mode) => return Ok(Some(mode)),
                Err(crate::SeriesError::EvenBestOf(_)) => self.console.say(
                    "Please enter an odd number (e.g., 3 or 5) so there's a clear winner.",
                )?,
                Err(_) => self
                    .console
                    .say("Please enter a whole number greater than zero.")?,
            }
        }
    }

    /// Prompts for moves until the series is over or the player quits.
    fn run_series(&mut self, series: &mut Series) -> io::Result<()> {
        let cap = series.mode().round_cap();

        while !series.is_over() {
            let prompt = format!(
                "Round {}/{cap} - Your choice (rock/paper/scissors): ",
                series.next_round()
            );
            let Some(input) = self.console.prompt(&prompt)? else {
                series.abandon();
                break;
            };
            if is_quit(&input) {
                self.console
                    .say("Series ended early, returning to the main menu.")?;
                series.abandon();
                break;
            }
            let Ok(player) = Move::from_str(&input) else {
                self.console.say("Invalid choice; try again.")?;
                continue;
            };
            let Ok(round) = self.session.play_round(series, player) else {
                break;
            };
            self.console.say(format!(
                "You chose {}, computer chose {}. Result: {}",
                round.player_move, round.computer_move, round.outcome
            ))?;
        }
        Ok(())
    }

    fn print_summary(&mut self, settlement: &Settlement) -> io::Result<()> {
        let result = settlement.result;
        let stats = *self.session.stats();

        self.console.say("\n--- Series Summary ---")?;
        self.console.say(format!(
            "You {} - Computer {} (Draws: {})",
            result.player_wins, result.computer_wins, result.draws
        ))?;
        self.console
            .say(format!("Series percentages: {}", result.percentages()))?;
        self.console.say("\n--- All-time ---")?;
        self.console.say(format!(
            "Points: {} | Rounds: {} | {}\n",
            stats.points,
            stats.rounds_played,
            stats.percentages()
        ))?;
        self.print_reward(settlement)
    }

    fn print_reward(&mut self, settlement: &Settlement) -> io::Result<()> {
        self.console.say(format!(
            "{} Reward: {} points. Total: {}",
            settlement.message, settlement.reward, settlement.total_points
        ))?;
        if let Err(err) = &settlement.saved {
            self.console
                .say(format!("Warning: your stats could not be saved ({err})."))?;
        }
        Ok(())
    }

    fn demo(&mut self) -> io::Result<()> {
        self.console
            .say("Running automated demo (single decisive outcome)")?;
        let Ok((round, settlement)) = self.session.demo() else {
            return self.console.say("The demo could not be played.");
        };
        self.console.say(format!(
            "Demo outcome: You {} vs Computer {} -> {}",
            round.player_move, round.computer_move, round.outcome
        ))?;
        self.print_reward(&settlement)
    }

    fn score(&mut self) -> io::Result<()> {
        let stats = *self.session.stats();
        self.console.say("\n--- Your Stats ---")?;
        self.console.say(format!("Points: {}", stats.points))?;
        self.console
            .say(format!("Rounds played: {}", stats.rounds_played))?;
        self.console.say(format!("{}\n", stats.percentages()))
    }

    fn reset(&mut self) -> io::Result<()> {
        match self.session.reset() {
            Ok(()) => self
                .console
                .say("\nAll set, your points and stats are now reset. Good luck!\n"),
            Err(err) => self.console.say(format!(
                "\nStats reset for this session, but could not be saved ({err}).\n"
            )),
        }
    }

    /// Walks through every config field; blank input keeps the current value.
    fn configure(&mut self) -> io::Result<()> {
        let current = self.session.config().clone();
        self.console.say("Current configuration:")?;
        self.console.say(format!(
            "  win_reward : {}\n  tie_reward : {}\n  lose_reward : {}\n  \
             win_message : {}\n  tie_message : {}\n  lose_message : {}",
            current.win_reward,
            current.tie_reward,
            current.lose_reward,
            current.win_message,
            current.tie_message,
            current.lose_message
        ))?;
        self.console.say("Press Enter to keep the current value.")?;

        let Some(updated) = self.prompt_config(current)? else {
            self.console.say("\nCancelled.")?;
            return Ok(());
        };

        match self.session.update_config(updated) {
            Ok(()) => self.console.say("Configuration saved."),
            Err(err) => self.console.say(format!(
                "Warning: configuration applied for this session but not saved ({err})."
            )),
        }
    }

    fn prompt_config(&mut self, mut config: Config) -> io::Result<Option<Config>> {
        let Some(win) = self.prompt_reward("win_reward", config.win_reward)? else {
            return Ok(None);
        };
        let Some(tie) = self.prompt_reward("tie_reward", config.tie_reward)? else {
            return Ok(None);
        };
        let Some(lose) = self.prompt_reward("lose_reward", config.lose_reward)? else {
            return Ok(None);
        };
        config.win_reward = win;
        config.tie_reward = tie;
        config.lose_reward = lose;

        for (name, message) in [
            ("win_message", &mut config.win_message),
            ("tie_message", &mut config.tie_message),
            ("lose_message", &mut config.lose_message),
        ] {
            let Some(input) = self
                .console
                .prompt(&format!("{name} (current={message}): "))?
            else {
                return Ok(None);
            };
            if !input.is_empty() {
                *message = input;
            }
        }

        Ok(Some(config))
    }

    /// Returns the new reward, the current one on blank or invalid input,
    /// or `None` at end of input.
    fn prompt_reward(&mut self, name: &str, current: u64) -> io::Result<Option<u64>> {
        let Some(input) = self
            .console
            .prompt(&format!("{name} (current={current}): "))?
        else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(current));
        }
        if let Ok(value) = input.parse::<u64>() {
            Ok(Some(value))
        } else {
            self.console
                .say(format!("Invalid {name}; keeping current value."))?;
            Ok(Some(current))
        }
    }
}
