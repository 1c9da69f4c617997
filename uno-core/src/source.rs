//! Where freshly dealt cards come from.
//!
//! The state machine never touches a random generator directly; it asks a
//! [`CardSource`] for the color and numeral of every card it creates. The
//! browser uses [`RngSource`], tests script their deals with [`ScriptedSource`].

use rand::{
    rngs::{StdRng, ThreadRng},
    Rng, SeedableRng,
};

use crate::{card::Color, constants::MAX_NUMBER};

pub trait CardSource {
    /// One of [`Color::PLAYABLE`].
    fn next_color(&mut self) -> Color;
    /// A numeral in `0..=MAX_NUMBER`.
    fn next_number(&mut self) -> u8;
}

/// Uniform choice over the playable colors and the numerals.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CardSource for RngSource<R> {
    fn next_color(&mut self) -> Color {
        Color::PLAYABLE[self.rng.gen_range(0..Color::PLAYABLE.len())]
    }

    fn next_number(&mut self) -> u8 {
        self.rng.gen_range(0..=MAX_NUMBER)
    }
}

/// Replays fixed color and number sequences, cycling when exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    colors: Vec<Color>,
    numbers: Vec<u8>,
    color_idx: usize,
    number_idx: usize,
}

impl ScriptedSource {
    pub fn new(colors: Vec<Color>, numbers: Vec<u8>) -> Self {
        Self {
            colors,
            numbers,
            color_idx: 0,
            number_idx: 0,
        }
    }

    /// Deals exactly these cards, in order.
    pub fn cards(cards: &[(Color, u8)]) -> Self {
        let (colors, numbers) = cards.iter().copied().unzip();
        Self::new(colors, numbers)
    }
}

impl CardSource for ScriptedSource {
    fn next_color(&mut self) -> Color {
        if self.colors.is_empty() {
            return Color::Red;
        }
        let color = self.colors[self.color_idx % self.colors.len()];
        self.color_idx += 1;
        color
    }

    fn next_number(&mut self) -> u8 {
        if self.numbers.is_empty() {
            return 0;
        }
        let number = self.numbers[self.number_idx % self.numbers.len()];
        self.number_idx += 1;
        number
    }
}
