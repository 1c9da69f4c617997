use std::fmt;

use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display(fmt = "#{}", _0)]
pub struct CardId(u64);

impl CardId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Color {
    #[display(fmt = "red")]
    Red,
    #[display(fmt = "blue")]
    Blue,
    #[display(fmt = "green")]
    Green,
    #[display(fmt = "yellow")]
    Yellow,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// Colors a dealt card can have. Black only appears on wild cards.
    pub const PLAYABLE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

/// What is printed in the corners of a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Value {
    Number(u8),
    Label(String),
}

impl From<u8> for Value {
    fn from(number: u8) -> Self {
        Value::Number(number)
    }
}

impl From<&str> for Value {
    fn from(label: &str) -> Self {
        Value::Label(label.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Number,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Kind {
    /// Symbol drawn in the middle of the card. Number cards show their value instead.
    pub fn glyph(self) -> Option<&'static str> {
        use Kind::*;
        match self {
            Number => None,
            Skip => Some("⊘"),
            Reverse => Some("⇄"),
            DrawTwo => Some("❐"),
            Wild | WildDrawFour => Some("🎨"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, CopyGetters)]
pub struct Card {
    #[getset(get_copy = "pub")]
    id: CardId,
    #[getset(get_copy = "pub")]
    color: Color,
    #[getset(get = "pub")]
    value: Value,
    #[getset(get_copy = "pub")]
    kind: Kind,
}

impl Card {
    pub fn new(id: CardId, color: Color, value: impl Into<Value>, kind: Kind) -> Self {
        Self {
            id,
            color,
            value: value.into(),
            kind,
        }
    }

    pub fn number(id: CardId, color: Color, number: u8) -> Self {
        Self::new(id, color, number, Kind::Number)
    }

    /// A card may go on top of `top` when it shares its color or its value.
    ///
    /// Symbolic cards are compared through their printed value like any other
    /// card, so two action cards with the same label match across kinds.
    pub fn matches(&self, top: &Card) -> bool {
        self.color == top.color || self.value == top.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn card(id: u64, color: Color, number: u8) -> Card {
        Card::number(CardId::new(id), color, number)
    }

    #[test]
    fn same_color_matches() {
        check!(card(0, Color::Red, 3).matches(&card(1, Color::Red, 8)));
    }

    #[test]
    fn same_value_matches() {
        check!(card(0, Color::Red, 5).matches(&card(1, Color::Blue, 5)));
    }

    #[test]
    fn different_color_and_value_does_not_match() {
        check!(!card(0, Color::Green, 3).matches(&card(1, Color::Blue, 7)));
    }

    #[test]
    fn symbolic_cards_match_by_label_across_kinds() {
        let skip = Card::new(CardId::new(0), Color::Red, "skip", Kind::Skip);
        let odd = Card::new(CardId::new(1), Color::Blue, "skip", Kind::Reverse);
        check!(skip.matches(&odd));
        check!(!skip.matches(&card(2, Color::Blue, 0)));
    }

    #[test]
    fn glyph_only_for_symbolic_kinds() {
        check!(Kind::Number.glyph() == None);
        check!(Kind::Skip.glyph().is_some());
        check!(Kind::Wild.glyph() == Kind::WildDrawFour.glyph());
    }

    #[test]
    fn display_reads_like_the_card() {
        check!(card(4, Color::Yellow, 9).to_string() == "yellow 9");
        check!(CardId::new(4).to_string() == "#4");
        let wild = Card::new(CardId::new(5), Color::Black, "+4", Kind::WildDrawFour);
        check!(wild.to_string() == "black +4");
    }
}
