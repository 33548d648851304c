//! Match loop: alternating two move sources until the game ends

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    game::{GameMode, PileState, Player},
    ports::{MatchLogger, MoveSource},
};

/// Result of a finished match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Seat that won under the mode's rule.
    pub winner: Player,
    /// Display name bound to the winning seat.
    pub winner_name: String,
    /// Moves played in total.
    pub turns: usize,
    /// The final (cleared) position.
    pub final_piles: PileState,
}

/// Drives one match of the take-away game.
///
/// The session owns the live pile collection; move sources only ever see
/// snapshots of it. Collaborators that want the initial position (e.g. the
/// tree renderer) must be handed a clone taken before `play` starts.
pub struct MatchSession<'a> {
    mode: &'a dyn GameMode,
    piles: PileState,
    logger: &'a mut dyn MatchLogger,
}

impl<'a> MatchSession<'a> {
    pub fn new(
        mode: &'a dyn GameMode,
        initial: PileState,
        logger: &'a mut dyn MatchLogger,
    ) -> Self {
        MatchSession {
            mode,
            piles: initial,
            logger,
        }
    }

    /// The current position.
    pub fn piles(&self) -> &PileState {
        &self.piles
    }

    /// Run the match to completion, alternating seats starting with `first`.
    ///
    /// Validation failures from an [`interactive`] source are announced and
    /// the source is asked again; from any other source they propagate,
    /// since engines enumerate only legal candidates by construction.
    ///
    /// [`interactive`]: MoveSource::interactive
    pub fn play(
        &mut self,
        first: &mut dyn MoveSource,
        second: &mut dyn MoveSource,
    ) -> Result<MatchOutcome> {
        self.logger.info(&format!(
            "Initial configuration: {} ({} piles)",
            self.piles,
            self.piles.pile_count()
        ));

        let mut current_seat = Player::One;
        let mut current: &mut dyn MoveSource = first;
        let mut other: &mut dyn MoveSource = second;
        let mut turns = 0;

        while !self.mode.is_terminal(&self.piles) {
            println!("\nCurrent piles: {}", self.piles);

            let next = loop {
                let mv = current.propose_move(&self.piles)?;
                match self.piles.apply(mv) {
                    Ok(next) => break (mv, next),
                    Err(err) if err.is_invalid_move() && current.interactive() => {
                        println!("Invalid move. Please try again.");
                    }
                    Err(err) => return Err(err),
                }
            };

            let (mv, next) = next;
            self.piles = next;
            turns += 1;
            self.logger.info(&format!(
                "{} takes {} objects from pile {}. Remaining objects: {}",
                current.name(),
                mv.count,
                mv.pile + 1,
                self.piles
            ));

            if self.mode.is_terminal(&self.piles) {
                break;
            }

            std::mem::swap(&mut current, &mut other);
            current_seat = current_seat.opponent();
        }

        let winner_seat =
            self.mode
                .winner(current_seat, current_seat.opponent(), &self.piles)?;
        let winner_name = if winner_seat == current_seat {
            current.name().to_string()
        } else {
            other.name().to_string()
        };

        self.logger.info(&format!("{winner_name} wins!"));
        println!("\n{winner_name} wins!");

        Ok(MatchOutcome {
            winner: winner_seat,
            winner_name,
            turns,
            final_piles: self.piles.clone(),
        })
    }
}
