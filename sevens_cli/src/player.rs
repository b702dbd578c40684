use crate::card::Card;
use crate::error::GameError;
use crate::hand::Hand;
use crate::strategy::Strategy;
use crate::tableau::Tableau;

pub struct Player {
    pub id: usize,
    pub name: String,
    pub hand: Hand,
    pub finished: bool,
    strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, hand: Hand, strategy: Box<dyn Strategy>) -> Self {
        Self {
            id,
            name: name.into(),
            hand,
            finished: false,
            strategy,
        }
    }

    /// Asks the strategy for a move. A chosen card leaves the hand.
    pub fn choose_card(&mut self, table: &Tableau) -> Result<Option<Card>, GameError> {
        self.strategy.choose_card(&mut self.hand, table)
    }

    pub fn is_interactive(&self) -> bool {
        self.strategy.is_interactive()
    }

    /// Sets `finished` once the hand is empty. Returns true only on the
    /// turn the player goes out.
    pub fn mark_if_finished(&mut self) -> bool {
        if self.finished || !self.hand.is_empty() {
            return false;
        }
        self.finished = true;
        true
    }
}
