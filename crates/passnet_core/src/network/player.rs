//! Player-level records carried alongside a team graph.

use serde::{Deserialize, Serialize};

use crate::coordinates::PitchPoint;

/// A node of the passing network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerNode {
    /// Player name, unique within a team graph
    pub id: String,
    /// Starter (true) or substitute (false)
    pub titular: bool,
    /// Average pitch position, when one was recorded
    pub position: Option<PitchPoint>,
}

impl PlayerNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), titular: false, position: None }
    }

    pub fn with_titular(mut self, titular: bool) -> Self {
        self.titular = titular;
        self
    }

    pub fn with_position(mut self, position: PitchPoint) -> Self {
        self.position = Some(position);
        self
    }
}

/// A directed pass relation between two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassEdge {
    /// Number of completed passes from source to target
    pub passes: u32,
}

/// One `{player, x, y}` record of a stored position list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub player: String,
    pub x: f64,
    pub y: f64,
}

impl PositionRecord {
    pub fn point(&self) -> PitchPoint {
        PitchPoint::new(self.x, self.y)
    }
}

/// One `{player, titular}` record of a stored lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub player: String,
    #[serde(default)]
    pub titular: bool,
}

/// Ordered lineup of one team, starters and substitutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lineup {
    pub entries: Vec<LineupEntry>,
}

impl Lineup {
    pub fn new(entries: Vec<LineupEntry>) -> Self {
        Self { entries }
    }

    /// Every listed player, in lineup order.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.player.trim())
    }

    /// Starting players, in lineup order.
    pub fn starters(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter(|e| e.titular).map(|e| e.player.trim())
    }

    pub fn is_titular(&self, player: &str) -> bool {
        self.entries.iter().any(|e| e.titular && e.player.trim() == player)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player: &str, titular: bool) -> LineupEntry {
        LineupEntry { player: player.to_string(), titular }
    }

    #[test]
    fn test_lineup_starters() {
        let lineup = Lineup::new(vec![
            entry("Rossi", true),
            entry("Pedro ", false),
            entry("Gerson", true),
        ]);

        let starters: Vec<&str> = lineup.starters().collect();
        assert_eq!(starters, vec!["Rossi", "Gerson"]);
        assert!(lineup.is_titular("Gerson"));
        assert!(!lineup.is_titular("Pedro"));
        assert_eq!(lineup.players().nth(1), Some("Pedro"));
    }

    #[test]
    fn test_lineup_deserializes_from_record_list() {
        let lineup: Lineup = serde_json::from_str(
            r#"[{"player": "Rossi", "titular": true}, {"player": "Pedro"}]"#,
        )
        .unwrap();
        assert_eq!(lineup.len(), 2);
        assert!(!lineup.entries[1].titular);
    }
}
