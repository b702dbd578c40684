use crate::card::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Played(Card),
    Passed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    pub round: usize,
    pub seat: usize,
    pub player: String,
    pub action: Action,
}

/// Every turn taken during one game, in order.
#[derive(Debug, Default)]
pub struct TurnHistory {
    pub turns: Vec<TurnRecord>,
}

impl TurnHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, round: usize, seat: usize, player: &str, action: Action) {
        tracing::debug!(round, seat, player, ?action, "turn");
        self.turns.push(TurnRecord {
            round,
            seat,
            player: player.to_string(),
            action,
        });
    }

    pub fn turns_for(&self, seat: usize) -> impl Iterator<Item = &TurnRecord> {
        self.turns.iter().filter(move |t| t.seat == seat)
    }

    pub fn plays_in_round(&self, round: usize) -> usize {
        self.turns.iter()
            .filter(|t| t.round == round && matches!(t.action, Action::Played(_)))
            .count()
    }

    pub fn dump(&self) -> String {
        let mut s = String::new();
        for t in &self.turns {
            let what = match t.action {
                Action::Played(c) => format!("played {c}"),
                Action::Passed => "passed".to_string(),
            };
            s.push_str(&format!("[round {}] {}: {}\n", t.round, t.player, what));
        }
        s
    }
}
