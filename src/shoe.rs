//! The shoe: the working pile of cards drawn without replacement.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyShoeError;

/// Cards available to draw.
///
/// The cards are kept in enumeration order; randomness comes from the draw,
/// which picks a uniformly random index over whatever is left. A stacked shoe
/// instead deals its cards in a fixed order, which is how a recorded round is
/// replayed or a table is scripted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    /// Deal from the back of `cards` instead of at random.
    stacked: bool,
}

impl Shoe {
    /// Builds a shoe of `num_decks` full decks.
    ///
    /// Each deck holds one card per rank and suit combination.
    ///
    /// ```
    /// use blackjack_table::{DECK_SIZE, Shoe};
    ///
    /// let shoe = Shoe::generate(1);
    /// assert_eq!(shoe.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn generate(num_decks: u8) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for rank in Rank::ALL {
                for suit in Suit::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }

        Self {
            cards,
            stacked: false,
        }
    }

    /// Builds a shoe holding exactly the given cards, drawn at random.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            stacked: false,
        }
    }

    /// Builds a shoe that deals `cards` front to back.
    ///
    /// ```
    /// use blackjack_table::{Card, Rank, Shoe, Suit};
    /// use rand::SeedableRng;
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let two = Card::new(Rank::Two, Suit::Hearts);
    /// let mut shoe = Shoe::stacked(vec![ace, two]);
    /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    ///
    /// assert_eq!(shoe.draw(&mut rng), Ok(ace));
    /// assert_eq!(shoe.draw(&mut rng), Ok(two));
    /// ```
    #[must_use]
    pub fn stacked(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self {
            cards,
            stacked: true,
        }
    }

    /// Removes and returns a uniformly chosen card, or the next card of a
    /// stacked shoe.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if no cards are left.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, EmptyShoeError> {
        if self.stacked {
            return self.cards.pop().ok_or(EmptyShoeError);
        }
        if self.cards.is_empty() {
            return Err(EmptyShoeError);
        }

        let index = rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    /// Returns whether the shoe is at or below the reshuffle threshold.
    #[must_use]
    pub fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.cards.len() <= threshold
    }

    /// Returns the remaining cards.
    ///
    /// A stacked shoe lists them in reverse dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
