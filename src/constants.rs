// Draw mechanics constants
pub const DRAW_COUNT: usize = 10;
pub const SEEDS_PER_DRAW: usize = 2;

// Rarity rolls are taken modulo this band range
pub const RARITY_BAND_MODULUS: u32 = 10_000;

// Substituted when a resolved slot id has no catalog entry
pub const UNKNOWN_SLOT_NAME: &str = "???";
