//! Die and deck factory.

use im::Vector;

use super::config::DIE_FACES;
use super::rng::RandomSource;
use crate::cards::CardCode;

/// Roll one six-sided die.
pub fn roll_d6<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
    rng.next_in_range(1, DIE_FACES)
}

/// A full 52-card deck in uniformly random order.
///
/// Fisher-Yates over the canonical order. The top of the deck is the end
/// of the vector.
pub fn new_deck<R: RandomSource + ?Sized>(rng: &mut R) -> Vector<CardCode> {
    let mut cards: Vec<CardCode> = CardCode::all().collect();

    for i in (1..cards.len()).rev() {
        let j = rng.next_in_range(0, i as u32) as usize;
        cards.swap(i, j.min(i));
    }

    cards.into_iter().collect()
}
