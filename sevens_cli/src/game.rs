use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::deck::Deck;
use crate::error::GameError;
use crate::history::{Action, TurnHistory};
use crate::player::Player;
use crate::strategy::{Automated, Interactive};
use crate::tableau::Tableau;

pub struct GameSettings {
    pub player_names: Vec<String>,
    /// Seat prompted on stdin; every other seat is automated.
    pub human_seat: Option<usize>,
    /// Fixes the shuffle. Drawn from entropy when unset.
    pub seed: Option<u64>,
    /// End the game once a full round passes with no placement and no
    /// remaining player holds a playable card.
    pub stop_on_stalemate: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_names: ["You", "Bot 1", "Bot 2", "Bot 3"].map(String::from).to_vec(),
            human_seat: Some(0),
            seed: None,
            stop_on_stalemate: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub cards_left: usize,
    /// 1-based finishing position.
    pub place: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub standings: Vec<Standing>,
    pub finish_order: Vec<usize>,
    pub rounds: usize,
    pub stalled: bool,
}

pub struct Game {
    pub players: Vec<Player>,
    pub table: Tableau,
    pub history: TurnHistory,
    finish_order: Vec<usize>,
    stop_on_stalemate: bool,
    round: usize,
}

impl Game {
    /// Shuffles and deals a fresh deck to the configured seats.
    pub fn new(settings: GameSettings) -> Result<Self, GameError> {
        let mut rng = match settings.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let hands = deck.deal(settings.player_names.len())?;
        info!(players = hands.len(), seed = ?settings.seed, "dealt");

        let players = settings.player_names.into_iter().zip(hands).enumerate()
            .map(|(i, (name, hand))| {
                if settings.human_seat == Some(i) {
                    Player::new(i, name, hand, Box::new(Interactive::stdio()))
                } else {
                    Player::new(i, name, hand, Box::new(Automated))
                }
            })
            .collect();

        Ok(Self::with_players(players).stop_on_stalemate(settings.stop_on_stalemate))
    }

    /// Starts from hands already dealt, on an empty table.
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players,
            table: Tableau::new(),
            history: TurnHistory::new(),
            finish_order: Vec::new(),
            stop_on_stalemate: false,
            round: 0,
        }
    }

    pub fn stop_on_stalemate(mut self, enabled: bool) -> Self {
        self.stop_on_stalemate = enabled;
        self
    }

    pub fn is_over(&self) -> bool {
        self.players.iter().all(|p| p.finished)
    }

    /// Nobody left in the game can lay anything, so the table is frozen.
    fn is_stalemate(&self) -> bool {
        self.players.iter()
            .filter(|p| !p.finished)
            .all(|p| p.hand.first_playable(&self.table).is_none())
    }

    /// Plays full rounds in seat order until every hand is empty.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Outcome, GameError> {
        writeln!(out, "Welcome to Sevens!")?;

        let mut stalled = false;
        while !self.is_over() {
            self.round += 1;
            for seat in 0..self.players.len() {
                self.play_turn(seat, out)?;
            }
            if self.stop_on_stalemate
                && self.history.plays_in_round(self.round) == 0
                && !self.is_over()
                && self.is_stalemate()
            {
                warn!(round = self.round, "stalemate, nobody can play");
                writeln!(out, "\nNo one can play any more. Stopping the game.")?;
                stalled = true;
                break;
            }
        }

        info!(rounds = self.round, on_table = self.table.card_count(), stalled, "game finished");
        let outcome = self.outcome(stalled);
        self.report(&outcome, out)?;
        Ok(outcome)
    }

    /// One turn for `seat`. Finished players are skipped.
    pub fn play_turn<W: Write>(&mut self, seat: usize, out: &mut W) -> Result<(), GameError> {
        let player = &mut self.players[seat];
        if player.finished {
            return Ok(());
        }

        writeln!(out, "\n{}'s turn", player.name)?;
        write!(out, "\n{}\n", self.table)?;

        let interactive = player.is_interactive();
        match player.choose_card(&self.table)? {
            Some(card) => {
                if !self.table.is_playable(card) {
                    return Err(GameError::IllegalPlay { player: player.name.clone(), card });
                }
                self.table.place(card);
                if !interactive {
                    writeln!(out, "{} played: {}", player.name, card)?;
                }
                self.history.record(self.round, seat, &player.name, Action::Played(card));
            }
            None => {
                if !interactive {
                    writeln!(out, "{} passes.", player.name)?;
                }
                self.history.record(self.round, seat, &player.name, Action::Passed);
            }
        }

        if player.mark_if_finished() {
            self.finish_order.push(seat);
            info!(player = %player.name, id = player.id, place = self.finish_order.len(), "finished");
            writeln!(out, "{} has finished all cards!", player.name)?;
        }
        Ok(())
    }

    pub fn outcome(&self, stalled: bool) -> Outcome {
        let standings = self.players.iter().enumerate()
            .map(|(i, p)| Standing {
                name: p.name.clone(),
                cards_left: p.hand.len(),
                place: self.finish_order.iter().position(|&s| s == i).map(|pos| pos + 1),
            })
            .collect();
        Outcome {
            standings,
            finish_order: self.finish_order.clone(),
            rounds: self.round,
            stalled,
        }
    }

    fn report<W: Write>(&self, outcome: &Outcome, out: &mut W) -> Result<(), GameError> {
        writeln!(out, "\nGame Over!")?;
        writeln!(out, "Final Rankings:")?;
        for s in &outcome.standings {
            match s.place {
                Some(place) => writeln!(out, "{}: Done (#{})", s.name, place)?,
                None => writeln!(out, "{}: {} cards left", s.name, s.cards_left)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::hand::Hand;
    use crate::strategy::Strategy;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::from_value(rank).unwrap(), suit)
    }

    fn bot(id: usize, cards: Vec<Card>) -> Player {
        Player::new(id, format!("Bot {}", id + 1), Hand::from(cards), Box::new(Automated))
    }

    fn run(game: &mut Game) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = game.run(&mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn two_bots_build_one_run_and_both_finish() {
        use Suit::Spades;
        let mut game = Game::with_players(vec![
            bot(0, vec![card(7, Spades), card(8, Spades)]),
            bot(1, vec![card(6, Spades), card(9, Spades)]),
        ]);
        let (outcome, out) = run(&mut game);

        assert!(game.is_over());
        assert!(!outcome.stalled);
        assert_eq!(outcome.finish_order, vec![0, 1]);
        assert_eq!(outcome.rounds, 2);
        let run: Vec<u8> = game.table.run(Spades).map(Rank::value).collect();
        assert_eq!(run, vec![6, 7, 8, 9]);
        assert!(out.contains("Bot 1 played: 7♠"));
        assert!(out.contains("Bot 2 played: 6♠"));
        assert!(out.contains("Bot 2 has finished all cards!"));
        assert!(out.ends_with("Final Rankings:\nBot 1: Done (#1)\nBot 2: Done (#2)\n"));
    }

    #[test]
    fn finished_players_get_no_more_turns() {
        use Suit::{Hearts, Spades};
        let mut game = Game::with_players(vec![
            bot(0, vec![card(7, Spades)]),
            bot(1, vec![card(8, Spades), card(7, Hearts)]),
            bot(2, vec![card(6, Spades), card(8, Hearts)]),
        ]);
        let (outcome, _) = run(&mut game);

        assert_eq!(outcome.finish_order, vec![0, 1, 2]);
        assert_eq!(game.history.turns_for(0).count(), 1);
        assert!(game.history.turns_for(0).all(|t| t.round == 1));
        assert_eq!(game.history.turns_for(1).count(), 2);
    }

    #[test]
    fn blocked_player_passes_until_run_reaches_them() {
        use Suit::Clubs;
        let mut game = Game::with_players(vec![
            bot(0, vec![card(5, Clubs)]),
            bot(1, vec![card(7, Clubs), card(6, Clubs)]),
        ]);
        let (outcome, _) = run(&mut game);

        assert_eq!(outcome.finish_order, vec![1, 0]);
        let first = &game.history.turns[0];
        assert_eq!(first.action, Action::Passed);
        assert_eq!(game.table.card_count(), 3);
    }

    #[test]
    fn stalemate_detector_stops_a_frozen_game() {
        let mut game = Game::with_players(vec![
            bot(0, vec![card(7, Suit::Spades)]),
            bot(1, vec![card(2, Suit::Hearts)]),
        ])
        .stop_on_stalemate(true);
        let (outcome, out) = run(&mut game);

        assert!(outcome.stalled);
        assert_eq!(outcome.rounds, 2);
        assert_eq!(outcome.standings[1], Standing { name: "Bot 2".into(), cards_left: 1, place: None });
        assert!(out.contains("Stopping the game."));
        assert!(out.ends_with("Bot 1: Done (#1)\nBot 2: 1 cards left\n"));
    }

    #[test]
    fn seeded_four_bot_game_runs_to_completion() {
        let settings = GameSettings { human_seat: None, seed: Some(2024), ..GameSettings::default() };
        let mut game = Game::new(settings).unwrap();
        assert!(game.players.iter().all(|p| p.hand.len() == 13));

        let (outcome, _) = run(&mut game);
        assert_eq!(game.table.card_count(), 52);
        assert_eq!(outcome.finish_order.len(), 4);
        assert!(outcome.standings.iter().all(|s| s.cards_left == 0 && s.place.is_some()));
        // every round lays at least one card
        assert!(outcome.rounds <= 52);
    }

    #[test]
    fn same_seed_deals_same_hands() {
        let deal = |seed| {
            let settings = GameSettings { human_seat: None, seed: Some(seed), ..GameSettings::default() };
            Game::new(settings).unwrap().players.into_iter().map(|p| p.hand).collect::<Vec<_>>()
        };
        assert_eq!(deal(11), deal(11));
    }

    #[test]
    fn human_moves_are_read_from_input() {
        use Suit::Diamonds;
        let human = Player::new(
            0,
            "You",
            Hand::from(vec![card(6, Diamonds), card(7, Diamonds)]),
            Box::new(Interactive::new(Cursor::new("p\n2\n1\n"), io::sink())),
        );
        let mut game = Game::with_players(vec![human, bot(1, vec![card(8, Diamonds), card(5, Diamonds)])]);
        let (outcome, out) = run(&mut game);

        // round 1 the human passes and the bot cannot move
        assert_eq!(game.history.turns[0].action, Action::Passed);
        assert_eq!(game.history.turns[1].action, Action::Passed);
        assert_eq!(game.history.turns[2].action, Action::Played(card(7, Diamonds)));
        assert!(out.contains("Bot 2 passes."));
        assert!(out.contains("Bot 2 played: 8♦"));
        assert!(!out.contains("You played"));
        assert_eq!(outcome.finish_order, vec![0, 1]);
        assert_eq!(outcome.rounds, 3);
    }

    struct Cheat;

    impl Strategy for Cheat {
        fn choose_card(&mut self, hand: &mut Hand, _: &Tableau) -> Result<Option<Card>, GameError> {
            Ok(hand.remove(0))
        }
    }

    #[test]
    fn unplayable_card_from_a_strategy_is_rejected() {
        let p = Player::new(0, "Cheat", Hand::from(vec![card(2, Suit::Clubs)]), Box::new(Cheat));
        let mut game = Game::with_players(vec![p]);
        let err = game.run(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, GameError::IllegalPlay { card, .. } if card == Card::new(Rank::Two, Suit::Clubs)));
    }
}
