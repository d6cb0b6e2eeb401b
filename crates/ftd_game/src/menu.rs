//! Result menu
//!
//! Shown after the chase ends. It announces the outcome and waits for a
//! tap to start the chase again.

use ftd_input::{TouchEvent, TouchPhase};

use crate::contact::Outcome;

const WIN_TITLE: &str = "You Win!";
const LOSE_TITLE: &str = "You Lose!";
const PROMPT: &str = "Tap to play again";

/// The result screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuScene {
    did_win: bool,
    restart_requested: bool,
}

impl MenuScene {
    pub fn new(did_win: bool) -> Self {
        Self {
            did_win,
            restart_requested: false,
        }
    }

    pub fn from_outcome(outcome: Outcome) -> Self {
        Self::new(outcome.did_win())
    }

    /// Whether the player won the chase
    pub fn did_win(&self) -> bool {
        self.did_win
    }

    /// Headline label
    pub fn title(&self) -> &'static str {
        if self.did_win {
            WIN_TITLE
        } else {
            LOSE_TITLE
        }
    }

    /// Label under the headline
    pub fn prompt(&self) -> &'static str {
        PROMPT
    }

    /// Handle a touch notification
    ///
    /// The first touch that begins asks for a restart. Returns true only
    /// for that touch.
    pub fn on_touch(&mut self, touches: &[TouchEvent]) -> bool {
        if self.restart_requested {
            return false;
        }
        if touches.iter().any(|t| t.phase == TouchPhase::Started) {
            self.restart_requested = true;
            log::debug!("Restart requested from result menu");
            return true;
        }
        false
    }

    /// Whether a restart has been requested
    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }
}
