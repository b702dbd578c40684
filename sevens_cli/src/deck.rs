use rand::{seq::SliceRandom, Rng};

use crate::card::{Card, Rank, Suit};
use crate::error::GameError;
use crate::hand::Hand;

#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in suit-major order.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Round-robin: card `i` goes to hand `i % player_count`.
    pub fn deal(self, player_count: usize) -> Result<Vec<Hand>, GameError> {
        if player_count == 0 {
            return Err(GameError::NoPlayers);
        }
        let mut hands: Vec<Hand> = (0..player_count).map(|_| Hand::new()).collect();
        for (i, card) in self.cards.into_iter().enumerate() {
            hands[i % player_count].add(card);
        }
        Ok(hands)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
