use std::time::Duration;

use getset::CopyGetters;

use crate::constants::{HAND_SIZE, OPPONENT_DELAY, OPPONENT_HAND_SIZE};

/// Tunables of a table. `Config::default()` is the regular seven-card game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Config {
    hand_size: usize,
    opponent_hand_size: u32,
    opponent_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            opponent_hand_size: OPPONENT_HAND_SIZE,
            opponent_delay: OPPONENT_DELAY,
        }
    }
}

impl Config {
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_opponent_hand_size(mut self, opponent_hand_size: u32) -> Self {
        self.opponent_hand_size = opponent_hand_size;
        self
    }

    pub fn with_opponent_delay(mut self, opponent_delay: Duration) -> Self {
        self.opponent_delay = opponent_delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn default_is_seven_cards_each() {
        let config = Config::default();
        check!(config.hand_size() == 7);
        check!(config.opponent_hand_size() == 7);
        check!(config.opponent_delay() == Duration::from_millis(1500));
    }

    #[test]
    fn setters_only_touch_their_field() {
        let config = Config::default().with_opponent_delay(Duration::ZERO);
        check!(config.opponent_delay() == Duration::ZERO);
        check!(config.hand_size() == HAND_SIZE);
    }
}
