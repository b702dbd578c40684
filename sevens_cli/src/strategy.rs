use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::card::Card;
use crate::error::GameError;
use crate::hand::Hand;
use crate::input::read_line;
use crate::tableau::Tableau;

/// Decides which card a player lays on their turn.
///
/// A returned card has already been removed from `hand`. `None` is a pass.
pub trait Strategy {
    fn choose_card(&mut self, hand: &mut Hand, table: &Tableau) -> Result<Option<Card>, GameError>;

    /// Interactive players see their own moves; everyone else's are announced.
    fn is_interactive(&self) -> bool { false }
}

/// Plays the first legal card in stored hand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Automated;

impl Strategy for Automated {
    fn choose_card(&mut self, hand: &mut Hand, table: &Tableau) -> Result<Option<Card>, GameError> {
        Ok(hand.first_playable(table).and_then(|i| hand.remove(i)))
    }
}

/// What a line of human input asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Play(usize),
    Pass,
    Invalid,
}

/// `p` passes; a 1-based index must point at a playable card.
pub fn decide(input: &str, hand: &Hand, table: &Tableau) -> Choice {
    let s = input.trim();
    if s.eq_ignore_ascii_case("p") {
        return Choice::Pass;
    }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => match hand.get(n - 1) {
            Some(card) if table.is_playable(card) => Choice::Play(n - 1),
            _ => Choice::Invalid,
        },
        _ => Choice::Invalid,
    }
}

/// Prompts a person for each move.
pub struct Interactive<R, W> {
    input: R,
    out: W,
}

impl Interactive<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Lists the hand, flagging legal cards. Returns how many there are.
    fn show_hand(&mut self, hand: &Hand, table: &Tableau) -> io::Result<usize> {
        let playable = hand.playable_indices(table);
        writeln!(self.out, "\nYour cards:")?;
        for (i, card) in hand.iter().enumerate() {
            if playable.contains(&i) {
                writeln!(self.out, "{}. {} (playable)", i + 1, card)?;
            } else {
                writeln!(self.out, "{}. {}", i + 1, card)?;
            }
        }
        Ok(playable.len())
    }
}

impl<R: BufRead, W: Write> Strategy for Interactive<R, W> {
    fn choose_card(&mut self, hand: &mut Hand, table: &Tableau) -> Result<Option<Card>, GameError> {
        if self.show_hand(hand, table)? == 0 {
            writeln!(self.out, "No playable cards. You pass.")?;
            return Ok(None);
        }

        let line = read_line(&mut self.input, &mut self.out, "Enter card number to play or 'p' to pass: ")?;
        match decide(&line, hand, table) {
            Choice::Play(i) => Ok(hand.remove(i)),
            Choice::Pass => Ok(None),
            Choice::Invalid => {
                tracing::debug!(input = line.trim(), "rejected move, treating as pass");
                writeln!(self.out, "Invalid input. You passed this round.")?;
                Ok(None)
            }
        }
    }

    fn is_interactive(&self) -> bool { true }
}
