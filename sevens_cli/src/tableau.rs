use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::card::{Card, Rank, Suit};

/// The shared table. Each suit holds a run of ranks that always forms one
/// contiguous interval around the seven.
#[derive(Clone, Debug, Default)]
pub struct Tableau {
    runs: BTreeMap<Suit, BTreeSet<Rank>>,
}

impl Tableau {
    pub fn new() -> Self {
        Self::default()
    }

    /// A seven is always playable. Anything else must sit directly below or
    /// above the run already laid down for its suit.
    pub fn is_playable(&self, card: Card) -> bool {
        if card.rank == Rank::Seven {
            return true;
        }
        let Some(run) = self.runs.get(&card.suit) else {
            return false;
        };
        match (run.first(), run.last()) {
            (Some(low), Some(high)) => {
                low.pred() == Some(card.rank) || high.succ() == Some(card.rank)
            }
            _ => false,
        }
    }

    /// Lays `card` on its suit's run. Callers check `is_playable` first.
    pub fn place(&mut self, card: Card) {
        debug_assert!(self.is_playable(card), "{card} placed out of sequence");
        self.runs.entry(card.suit).or_default().insert(card.rank);
    }

    /// Ranks laid down for `suit`, lowest first.
    pub fn run(&self, suit: Suit) -> impl Iterator<Item = Rank> + '_ {
        self.runs.get(&suit).into_iter().flatten().copied()
    }

    pub fn card_count(&self) -> usize {
        self.runs.values().map(BTreeSet::len).sum()
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Table:")?;
        for suit in Suit::ALL {
            let cards: Vec<String> = self.run(suit).map(|r| Card::new(r, suit).to_string()).collect();
            if cards.is_empty() {
                writeln!(f, "{suit}: (empty)")?;
            } else {
                writeln!(f, "{suit}: {}", cards.join(" "))?;
            }
        }
        Ok(())
    }
}
