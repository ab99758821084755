use core::fmt;
use std::fmt::Display;

/// Round wins per player, in seat order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard(Vec<(String, u32)>);

impl Scoreboard {
    pub fn new(player_names: &[String]) -> Self {
        Self(player_names.iter().map(|name| (name.clone(), 0)).collect())
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|(player, _)| player == name)
            .map(|(_, wins)| *wins)
    }

    /// Adds a win for `name`, returning the new total. `None` for unknown names.
    pub fn record_win(&mut self, name: &str) -> Option<u32> {
        let (_, wins) = self.0.iter_mut().find(|(player, _)| player == name)?;
        *wins += 1;
        Some(*wins)
    }

    /// The first player, in seat order, whose wins have reached `goal`.
    pub fn leader_at(&self, goal: u32) -> Option<(&str, u32)> {
        self.iter().find(|(_, wins)| *wins >= goal)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(name, wins)| (name.as_str(), *wins))
    }

    pub fn total_wins(&self) -> u32 {
        self.0.iter().map(|(_, wins)| wins).sum()
    }
}

impl Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, wins) in self.iter() {
            let plural = if wins == 1 { "" } else { "s" };
            writeln!(f, "{name}: {wins} win{plural}")?;
        }
        Ok(())
    }
}
