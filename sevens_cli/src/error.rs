use std::io;

use thiserror::Error;

use crate::card::Card;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("cannot deal to zero players")]
    NoPlayers,

    #[error("input closed while waiting for a move")]
    InputClosed,

    /// A strategy handed back a card the table cannot take.
    #[error("{player} tried to play {card}, which is not playable")]
    IllegalPlay { player: String, card: Card },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
