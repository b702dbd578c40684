use crate::card::Card;
use crate::tableau::Tableau;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(13) }
    }

    pub fn add(&mut self, c: Card) { self.cards.push(c); }

    /// Removes the card at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn len(&self) -> usize { self.cards.len() }

    pub fn is_empty(&self) -> bool { self.cards.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn playable_indices(&self, table: &Tableau) -> Vec<usize> {
        self.cards.iter().enumerate()
            .filter(|(_, c)| table.is_playable(**c))
            .map(|(i, _)| i).collect()
    }

    pub fn first_playable(&self, table: &Tableau) -> Option<usize> {
        self.cards.iter().position(|c| table.is_playable(*c))
    }

    pub fn fmt_inline(&self) -> String {
        self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
