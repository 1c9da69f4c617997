use std::time::Duration;

/// Cards dealt to the player on setup.
pub const HAND_SIZE: usize = 7;

/// Cards the opponent is shown holding on setup.
pub const OPPONENT_HAND_SIZE: u32 = 7;

/// How long the opponent "thinks" before its turn resolves.
pub const OPPONENT_DELAY: Duration = Duration::from_millis(1500);

/// Highest numeral printed on a number card.
pub const MAX_NUMBER: u8 = 9;
