//! Game modes: win conditions and heuristic evaluators
//!
//! A mode owns the win-condition logic and a heuristic evaluator for
//! non-terminal states. The search engine consults only this interface, so
//! swapping the mode swaps the whole objective of play.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{piles::PileState, player::Player};
use crate::{Error, Result};

/// Heuristic score over an extended ordered domain.
///
/// [`WIN`] and [`LOSS`] are the sentinel extremes for provably won/lost
/// positions; every finite value is a heuristic in between.
pub type Score = f64;

/// Provably winning for the side to move.
pub const WIN: Score = f64::INFINITY;

/// Provably losing for the side to move.
pub const LOSS: Score = f64::NEG_INFINITY;

/// Win condition plus heuristic evaluator for one game variant.
///
/// Implementations are stateless per call; all game state lives in the
/// [`PileState`] passed in.
pub trait GameMode {
    /// Short lowercase label, used in logs and file names.
    fn name(&self) -> &'static str;

    /// Whether the position is terminal (all piles empty).
    fn is_terminal(&self, piles: &PileState) -> bool {
        piles.is_cleared()
    }

    /// The winning seat, given the player who moved last (`current`) and the
    /// opponent. Only meaningful on a terminal position.
    ///
    /// # Errors
    ///
    /// [`Error::MatchNotOver`] when consulted on a live position;
    /// [`Error::NotImplemented`] when the variant supplies no win rule.
    fn winner(&self, current: Player, other: Player, piles: &PileState) -> Result<Player> {
        let _ = (current, other, piles);
        Err(Error::NotImplemented {
            mode: self.name(),
            capability: "winner",
        })
    }

    /// Heuristic value of a position for the side to move.
    fn evaluate(&self, piles: &PileState) -> Score;
}

/// Classic play: the last player to move wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

impl GameMode for Classic {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn winner(&self, current: Player, _other: Player, piles: &PileState) -> Result<Player> {
        if !self.is_terminal(piles) {
            return Err(Error::MatchNotOver);
        }
        Ok(current)
    }

    /// A pile holding exactly one object means a forced loss on the next
    /// turn; otherwise even totals favor the side to move. This is a
    /// heuristic, not a Nim-value computation.
    fn evaluate(&self, piles: &PileState) -> Score {
        if piles.sizes().iter().any(|&size| size == 1) {
            return LOSS;
        }
        if piles.total_objects() % 2 == 0 { WIN } else { LOSS }
    }
}

/// Misère play: the last player to move loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Misere;

impl GameMode for Misere {
    fn name(&self) -> &'static str {
        "misere"
    }

    fn winner(&self, _current: Player, other: Player, piles: &PileState) -> Result<Player> {
        if !self.is_terminal(piles) {
            return Err(Error::MatchNotOver);
        }
        Ok(other)
    }

    /// A single remaining object must be taken by the mover, who loses.
    /// Above that, fewer objects spread over more piles favors the mover.
    fn evaluate(&self, piles: &PileState) -> Score {
        let total = piles.total_objects();
        if total <= 1 {
            return if total == 1 { LOSS } else { WIN };
        }
        piles.non_empty_piles() as Score - total as Score
    }
}

/// Selectable game variant, the configuration-facing face of [`GameMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Classic,
    Misere,
}

impl ModeKind {
    /// Instantiate the mode behind this variant.
    pub fn build(self) -> Box<dyn GameMode> {
        match self {
            ModeKind::Classic => Box::new(Classic),
            ModeKind::Misere => Box::new(Misere),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModeKind::Classic => "classic",
            ModeKind::Misere => "misere",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(ModeKind::Classic),
            "misere" | "misère" => Ok(ModeKind::Misere),
            _ => Err(Error::ParseMode {
                input: s.to_string(),
                expected: "classic, misere",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_single_pile_of_one_is_a_forced_loss() {
        let piles = PileState::new(vec![1]);
        assert_eq!(Classic.evaluate(&piles), LOSS);
    }

    #[test]
    fn classic_parity_decides_when_no_pile_holds_one() {
        assert_eq!(Classic.evaluate(&PileState::new(vec![2, 2])), WIN);
        assert_eq!(Classic.evaluate(&PileState::new(vec![2, 3])), LOSS);
        // the pile-of-one check fires before parity
        assert_eq!(Classic.evaluate(&PileState::new(vec![1, 3])), LOSS);
    }

    #[test]
    fn misere_last_object_loses() {
        assert_eq!(Misere.evaluate(&PileState::new(vec![1, 0])), LOSS);
        assert_eq!(Misere.evaluate(&PileState::new(vec![0, 0])), WIN);
        // finite tiebreak: non-empty piles minus total objects
        assert_eq!(Misere.evaluate(&PileState::new(vec![2, 3])), 2.0 - 5.0);
    }

    #[test]
    fn misere_terminality_is_checked_via_is_terminal() {
        let cleared = PileState::new(vec![0, 0]);
        assert!(Misere.is_terminal(&cleared));
        assert!(!Misere.is_terminal(&PileState::new(vec![0, 1])));
    }

    #[test]
    fn classic_winner_is_the_last_mover() {
        let cleared = PileState::new(vec![0, 0]);
        let winner = Classic
            .winner(Player::One, Player::Two, &cleared)
            .unwrap();
        assert_eq!(winner, Player::One);
    }

    #[test]
    fn misere_winner_is_the_opponent_of_the_last_mover() {
        let cleared = PileState::new(vec![0, 0]);
        let winner = Misere.winner(Player::One, Player::Two, &cleared).unwrap();
        assert_eq!(winner, Player::Two);
    }

    #[test]
    fn winner_before_terminal_is_a_contract_violation() {
        let live = PileState::new(vec![1, 2]);
        assert!(matches!(
            Classic.winner(Player::One, Player::Two, &live),
            Err(Error::MatchNotOver)
        ));
    }

    #[test]
    fn modes_without_a_win_rule_report_not_implemented() {
        struct EvaluatorOnly;

        impl GameMode for EvaluatorOnly {
            fn name(&self) -> &'static str {
                "evaluator-only"
            }

            fn evaluate(&self, piles: &PileState) -> Score {
                -(piles.total_objects() as Score)
            }
        }

        let cleared = PileState::new(vec![0]);
        assert!(matches!(
            EvaluatorOnly.winner(Player::One, Player::Two, &cleared),
            Err(Error::NotImplemented {
                mode: "evaluator-only",
                capability: "winner"
            })
        ));
    }

    #[test]
    fn mode_kind_parses_and_builds() {
        assert_eq!("classic".parse::<ModeKind>().unwrap(), ModeKind::Classic);
        assert_eq!("Misère".parse::<ModeKind>().unwrap(), ModeKind::Misere);
        assert!("tournament".parse::<ModeKind>().is_err());
        assert_eq!(ModeKind::Misere.build().name(), "misere");
    }
}
