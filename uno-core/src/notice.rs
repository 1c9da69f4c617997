use serde::{Deserialize, Serialize};

/// Short call-outs shown to the player. They carry nothing beyond their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The player just played their last card.
    Uno,
    InvalidMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl Notice {
    pub fn level(self) -> NoticeLevel {
        match self {
            Notice::Uno => NoticeLevel::Info,
            Notice::InvalidMove => NoticeLevel::Error,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Notice::Uno => "UNO!",
            Notice::InvalidMove => "Invalid move!",
        }
    }
}
