//! Rule table and move parsing tests.

use rpsrs::{Move, Outcome, ParseMoveError, resolve};

#[test]
fn identical_moves_draw() {
    for mv in Move::ALL {
        assert_eq!(resolve(mv, mv), Outcome::Draw);
    }
}

#[test]
fn every_decisive_pair_has_one_winner() {
    for player in Move::ALL {
        for computer in Move::ALL {
            if player == computer {
                continue;
            }
            let forward = resolve(player, computer);
            let backward = resolve(computer, player);
            assert_ne!(forward, Outcome::Draw);
            assert_ne!(forward, backward, "{player} vs {computer}");
        }
    }
}

#[test]
fn cycle_rock_scissors_paper() {
    assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::Win);
    assert_eq!(resolve(Move::Scissors, Move::Paper), Outcome::Win);
    assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::Win);

    assert_eq!(resolve(Move::Scissors, Move::Rock), Outcome::Lose);
    assert_eq!(resolve(Move::Paper, Move::Scissors), Outcome::Lose);
    assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::Lose);
}

#[test]
fn moves_parse_case_insensitively() {
    assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
    assert_eq!("  PAPER \n".parse::<Move>(), Ok(Move::Paper));
    assert_eq!("Scissors".parse::<Move>(), Ok(Move::Scissors));
}

#[test]
fn unknown_moves_are_rejected() {
    assert_eq!(
        "lizard".parse::<Move>(),
        Err(ParseMoveError("lizard".to_owned()))
    );
    assert!("".parse::<Move>().is_err());
    assert!("r".parse::<Move>().is_err());
}

#[test]
fn moves_display_lowercase() {
    assert_eq!(Move::Rock.to_string(), "rock");
    assert_eq!(Move::Scissors.to_string(), "scissors");
}
