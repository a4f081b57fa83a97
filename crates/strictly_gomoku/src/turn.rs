//! Whose move it is.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Tracks the player to move. Black always starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnManager {
    current: Player,
}

impl TurnManager {
    /// Creates a turn manager with Black to move.
    pub fn new() -> Self {
        Self {
            current: Player::Black,
        }
    }

    /// The player to move.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Hands the move to the opponent.
    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Back to Black.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TurnManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternates() {
        let mut turn = TurnManager::new();
        assert_eq!(turn.current(), Player::Black);
        turn.switch_player();
        assert_eq!(turn.current(), Player::White);
        turn.switch_player();
        assert_eq!(turn.current(), Player::Black);
    }

    #[test]
    fn test_reset() {
        let mut turn = TurnManager::new();
        turn.switch_player();
        turn.reset();
        assert_eq!(turn.current(), Player::Black);
    }
}
