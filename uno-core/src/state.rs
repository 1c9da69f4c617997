use getset::{CopyGetters, Getters};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    card::{Card, CardId},
    config::Config,
    notice::Notice,
    source::CardSource,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected the {expected:?} side to act")]
    NotInTurn { expected: Turn },
    #[error("the table has not been set up")]
    NotStarted,
    #[error("card {id} is not in the hand")]
    CardNotInHand { id: CardId },
    #[error("{card} cannot be played on {top}")]
    IllegalPlay { card: Card, top: Card },
}
pub(crate) type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The call-out the player sees for this rejection, if any.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Error::IllegalPlay { .. } => Some(Notice::InvalidMove),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Player,
    Opponent,
}

impl Turn {
    pub fn other(self) -> Turn {
        use Turn::*;
        match self {
            Player => Opponent,
            Opponent => Player,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Serialize, Deserialize)]
pub struct State {
    #[getset(get = "pub")]
    hand: Vec<Card>,
    #[getset(get = "pub")]
    discard_top: Option<Card>,
    #[getset(get_copy = "pub")]
    turn: Turn,
    #[getset(get_copy = "pub")]
    opponent_count: u32,
    next_id: u64,
}

impl State {
    /// An empty table. Nothing can be played until [`State::setup`] runs.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            hand: Vec::new(),
            discard_top: None,
            turn: Turn::Player,
            opponent_count: 0,
            next_id: 0,
        }
    }

    /// A table already in the given position. Fresh ids continue after the
    /// largest id among `hand` and `discard_top`.
    pub fn from_parts(
        hand: Vec<Card>,
        discard_top: Option<Card>,
        turn: Turn,
        opponent_count: u32,
    ) -> Self {
        let next_id = hand
            .iter()
            .chain(discard_top.iter())
            .map(|card| card.id().raw() + 1)
            .max()
            .unwrap_or(0);
        Self {
            hand,
            discard_top,
            turn,
            opponent_count,
            next_id,
        }
    }

    pub fn is_my_turn(&self) -> bool {
        self.turn == Turn::Player
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|card| card.id() == id)
    }
}

impl State {
    pub fn setup<S: CardSource + ?Sized>(&mut self, config: &Config, source: &mut S) {
        let hand = (0..config.hand_size())
            .map(|_| self.deal(source))
            .collect_vec();
        self.hand = hand;
        self.discard_top = Some(self.deal(source));
        self.turn = Turn::Player;
        self.opponent_count = config.opponent_hand_size();
    }

    /// Puts the card with `id` on the discard pile if it matches the top card.
    ///
    /// Returns [`Notice::Uno`] when that was the last card in the hand.
    pub fn play(&mut self, id: CardId) -> Result<Option<Notice>> {
        self.expect_turn(Turn::Player)?;
        let top = self.discard_top.as_ref().ok_or(Error::NotStarted)?;
        let (idx, card) = self
            .hand
            .iter()
            .find_position(|card| card.id() == id)
            .ok_or(Error::CardNotInHand { id })?;
        if !card.matches(top) {
            return Err(Error::IllegalPlay {
                card: card.clone(),
                top: top.clone(),
            });
        }

        let was_last = self.hand.len() == 1;
        self.discard_top = Some(self.hand.remove(idx));
        self.next();
        Ok(was_last.then(|| Notice::Uno))
    }

    pub fn draw<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        self.expect_turn(Turn::Player)?;
        if self.discard_top.is_none() {
            return Err(Error::NotStarted);
        }
        let card = self.deal(source);
        self.hand.push(card);
        self.next();
        Ok(())
    }

    /// The simulated opponent "plays": one card fewer in its hand and a new
    /// card on the pile, whatever the player did to hand over the turn.
    pub fn resolve_opponent<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        self.expect_turn(Turn::Opponent)?;
        self.opponent_count = self.opponent_count.saturating_sub(1);
        self.discard_top = Some(self.deal(source));
        self.next();
        Ok(())
    }

    fn expect_turn(&self, expected: Turn) -> Result<()> {
        if self.turn != expected {
            return Err(Error::NotInTurn { expected });
        }
        Ok(())
    }

    fn next(&mut self) {
        self.turn = self.turn.other();
    }

    fn deal<S: CardSource + ?Sized>(&mut self, source: &mut S) -> Card {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        Card::number(id, source.next_color(), source.next_number())
    }
}
