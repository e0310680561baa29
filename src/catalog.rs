//! Slot catalog acquisition and validation.
//!
//! The catalog is static reference data: the slot table plus the rarity
//! band boundaries. It is acquired once, up front, from a bundled
//! default, a local file, or a published JSON endpoint; the simulation
//! core only ever sees the parsed slots and thresholds and never fetches
//! or caches anything itself.

use crate::constants::RARITY_BAND_MODULUS;
use crate::error::SimError;
use crate::gacha::types::{RarityThresholds, SlotEntry};
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

/// The published catalog shape:
/// `{ "slots": [{ "id": 0, "name": "..." }, ...],
///    "rarityThresholds": { "normal": 9000, "rare": 9900 } }`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GachaCatalog {
    pub slots: Vec<SlotEntry>,
    pub rarity_thresholds: RarityThresholds,
}

impl GachaCatalog {
    /// Parses and validates a catalog from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error>> {
        let catalog: GachaCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog from a local JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Fetches a catalog from a JSON endpoint.
    pub fn fetch(url: &str) -> Result<Self, Box<dyn Error>> {
        let catalog: GachaCatalog = ureq::get(url)
            .set("User-Agent", "tenpull")
            .call()?
            .into_json()?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads from a URL or a file path, picked by the source's shape.
    pub fn load(source: &str) -> Result<Self, Box<dyn Error>> {
        if source.starts_with("http://") || source.starts_with("https://") {
            Self::fetch(source)
        } else {
            Self::load_from_file(Path::new(source))
        }
    }

    /// Checks the invariants the resolver depends on: a non-empty table,
    /// unique slot ids, and ordered thresholds inside the band range.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.slots.is_empty() {
            return Err(SimError::InvalidArgument(
                "catalog has no slots".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for slot in &self.slots {
            if !seen.insert(slot.id) {
                return Err(SimError::InvalidArgument(format!(
                    "duplicate slot id {}",
                    slot.id
                )));
            }
        }

        let thresholds = &self.rarity_thresholds;
        if thresholds.normal > thresholds.rare {
            return Err(SimError::InvalidArgument(format!(
                "rarity thresholds out of order: normal {} > rare {}",
                thresholds.normal, thresholds.rare
            )));
        }
        if thresholds.rare > RARITY_BAND_MODULUS {
            return Err(SimError::InvalidArgument(format!(
                "rare threshold {} exceeds band range {}",
                thresholds.rare, RARITY_BAND_MODULUS
            )));
        }

        Ok(())
    }

    /// The bundled catalog mirroring the target table: 19 slots with
    /// ids 0..=18 and the 9000/9900 band boundaries. Lets the simulator
    /// run fully offline.
    pub fn builtin() -> Self {
        let names = [
            "Speed Up",
            "Treasure Radar",
            "Gold Purse",
            "XP Booster",
            "Silver Ticket",
            "Energy Drink",
            "Lucky Coin",
            "Iron Keycard",
            "Bronze Medal",
            "Repair Kit",
            "Shield Charm",
            "Crystal Shard",
            "Mystery Box",
            "Summon Scroll",
            "Phoenix Feather",
            "Dragon Scale",
            "Star Fragment",
            "Royal Crest",
            "Ancient Relic",
        ];

        let slots = names
            .iter()
            .enumerate()
            .map(|(id, name)| SlotEntry {
                id: id as u32,
                name: name.to_string(),
            })
            .collect();

        Self {
            slots,
            rarity_thresholds: RarityThresholds {
                normal: 9000,
                rare: 9900,
            },
        }
    }
}
