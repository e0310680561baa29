//! Run reporting: plain-text and JSON renderings of a resolved ten-pull.

use crate::gacha::types::{DrawResult, Rarity};
use serde::Serialize;

/// A completed run, ready for rendering. The resolver hands over plain
/// data; all formatting lives here.
#[derive(Debug, Clone, Serialize)]
pub struct DrawReport {
    pub seed: u32,
    pub results: Vec<DrawResult>,
}

impl DrawReport {
    pub fn new(seed: u32, results: Vec<DrawResult>) -> Self {
        Self { seed, results }
    }

    /// Counts of (normal, rare, super rare) draws in this run.
    pub fn rarity_counts(&self) -> (u32, u32, u32) {
        let mut counts = (0, 0, 0);
        for result in &self.results {
            match result.rarity {
                Rarity::Normal => counts.0 += 1,
                Rarity::Rare => counts.1 += 1,
                Rarity::SuperRare => counts.2 += 1,
            }
        }
        counts
    }

    /// Generates the aligned text table.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════\n");
        report.push_str(&format!("  TEN-PULL RESULTS          seed {}\n", self.seed));
        report.push_str("═══════════════════════════════════════════════════\n");
        report.push_str("  Roll   Slot   Name                  Rarity\n");
        report.push_str("  ────   ────   ────                  ──────\n");

        for result in &self.results {
            report.push_str(&format!(
                "  {:>4}   {:>4}   {:<20}  {}\n",
                result.roll,
                result.slot_id,
                result.slot_name,
                result.rarity.name()
            ));
        }

        let (normal, rare, super_rare) = self.rarity_counts();
        report.push_str("  ─────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Normal: {}   Rare: {}   Super Rare: {}\n",
            normal, rare, super_rare
        ));
        report.push_str("═══════════════════════════════════════════════════\n");

        report
    }

    /// Generates a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> DrawReport {
        DrawReport::new(
            7,
            vec![
                DrawResult {
                    roll: 1,
                    slot_id: 3,
                    slot_name: "XP Booster".to_string(),
                    rarity: Rarity::Normal,
                },
                DrawResult {
                    roll: 2,
                    slot_id: 18,
                    slot_name: "Ancient Relic".to_string(),
                    rarity: Rarity::SuperRare,
                },
            ],
        )
    }

    #[test]
    fn test_rarity_counts() {
        assert_eq!(sample_report().rarity_counts(), (1, 0, 1));
    }

    #[test]
    fn test_text_report_lists_every_roll() {
        let text = sample_report().to_text();
        assert!(text.contains("seed 7"));
        assert!(text.contains("XP Booster"));
        assert!(text.contains("Ancient Relic"));
        assert!(text.contains("Super Rare"));
        assert!(text.contains("Normal: 1   Rare: 0   Super Rare: 1"));
    }

    #[test]
    fn test_json_report_round_trips() {
        let json = sample_report().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["seed"], 7);
        assert_eq!(value["results"][1]["rarity"], "SuperRare");
        assert_eq!(value["results"][1]["slot_id"], 18);
    }

    #[test]
    fn test_text_report_is_deterministic() {
        assert_eq!(sample_report().to_text(), sample_report().to_text());
    }
}
