use getset::Getters;

use super::{
    config::Config,
    notice::Notice,
    reducer::{reduce, Effect, Event},
    source::CardSource,
    state::{Error, State},
};

/// A table together with its configuration and the source it deals from.
#[derive(Getters)]
pub struct Game<S> {
    #[getset(get = "pub")]
    state: State,
    config: Config,
    source: S,
}

/// What the owner of a [`Game`] has to act on after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Option<Notice>,
    pub effect: Option<Effect>,
    pub rejected: Option<Error>,
}

impl<S: CardSource> Game<S> {
    /// A game whose table is still empty; dispatch [`Event::Setup`] to deal.
    pub fn new(config: Config, source: S) -> Self {
        Self {
            state: State::new(),
            config,
            source,
        }
    }

    pub fn dispatch(&mut self, event: Event) -> Outcome {
        let step = reduce(&self.state, event, &mut self.source, &self.config);
        self.state = step.state;
        Outcome {
            notice: step.notice,
            effect: step.effect,
            rejected: step.rejected,
        }
    }
}
