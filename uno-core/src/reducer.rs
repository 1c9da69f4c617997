//! The table as a pure function: `(state, event) -> step`.
//!
//! [`reduce`] never mutates the state it is handed. Timing is not its
//! business either: when a step hands the turn to the opponent it returns an
//! [`Effect`] and the caller decides how to wait before feeding back
//! [`Event::OpponentResolved`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{
    card::CardId,
    config::Config,
    notice::Notice,
    source::CardSource,
    state::{Error, State, Turn},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Setup,
    Play(CardId),
    Draw,
    OpponentResolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver [`Event::OpponentResolved`] after `delay`.
    ScheduleOpponent { delay: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: State,
    pub notice: Option<Notice>,
    pub effect: Option<Effect>,
    /// Why the event left the state untouched, if it did.
    pub rejected: Option<Error>,
}

pub fn reduce<S: CardSource + ?Sized>(
    state: &State,
    event: Event,
    source: &mut S,
    config: &Config,
) -> Step {
    let mut next = state.clone();
    let result = match event {
        Event::Setup => {
            next.setup(config, source);
            Ok(None)
        }
        Event::Play(id) => next.play(id),
        Event::Draw => next.draw(source).map(|()| None),
        Event::OpponentResolved => next.resolve_opponent(source).map(|()| None),
    };

    match result {
        Ok(notice) => {
            let hands_over = state.turn() == Turn::Player && next.turn() == Turn::Opponent;
            let effect = hands_over.then(|| Effect::ScheduleOpponent {
                delay: config.opponent_delay(),
            });
            Step {
                state: next,
                notice,
                effect,
                rejected: None,
            }
        }
        Err(err) => Step {
            state: state.clone(),
            notice: err.notice(),
            effect: None,
            rejected: Some(err),
        },
    }
}
