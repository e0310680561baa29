//! Draw resolution: seed values in, slot and rarity out.

use crate::constants::{DRAW_COUNT, RARITY_BAND_MODULUS, SEEDS_PER_DRAW, UNKNOWN_SLOT_NAME};
use crate::error::SimError;

use super::sequence::generate_sequence;
use super::types::{DrawResult, RarityThresholds, SlotEntry};

/// Resolves a full ten-pull from a pre-generated seed sequence.
///
/// Each roll consumes one pair of values: the second value picks the slot
/// (modulo the table cardinality) and the first picks the rarity band.
/// A slot id with no table entry gets the sentinel name and the run
/// continues; results always come back in roll order.
pub fn resolve_draws(
    sequence: &[u32],
    slots: &[SlotEntry],
    thresholds: &RarityThresholds,
) -> Result<Vec<DrawResult>, SimError> {
    let needed = DRAW_COUNT * SEEDS_PER_DRAW;
    if sequence.len() < needed {
        return Err(SimError::InsufficientData {
            needed,
            got: sequence.len(),
        });
    }
    if slots.is_empty() {
        return Err(SimError::InvalidArgument(
            "slot table is empty".to_string(),
        ));
    }

    let mut results = Vec::with_capacity(DRAW_COUNT);
    for i in 0..DRAW_COUNT {
        let seed_a = sequence[SEEDS_PER_DRAW * i];
        let seed_b = sequence[SEEDS_PER_DRAW * i + 1];

        let slot_id = seed_b % slots.len() as u32;
        let rarity = thresholds.band_for(seed_a % RARITY_BAND_MODULUS);

        let slot_name = slots
            .iter()
            .find(|slot| slot.id == slot_id)
            .map(|slot| slot.name.clone())
            .unwrap_or_else(|| UNKNOWN_SLOT_NAME.to_string());

        results.push(DrawResult {
            roll: (i + 1) as u32,
            slot_id,
            slot_name,
            rarity,
        });
    }

    Ok(results)
}

/// Generates the sequence for one run and resolves it in one call.
pub fn simulate_ten_pull(
    seed: u32,
    slots: &[SlotEntry],
    thresholds: &RarityThresholds,
) -> Result<Vec<DrawResult>, SimError> {
    let sequence = generate_sequence(seed, DRAW_COUNT * SEEDS_PER_DRAW)?;
    resolve_draws(&sequence, slots, thresholds)
}
