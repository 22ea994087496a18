// Difficulty curve
pub const BASE_ENEMY_HP: f64 = 50.0;
pub const HP_GROWTH_BASE: f64 = 1.618;
pub const HP_GROWTH_PER_STAGE: f64 = 5.0;
pub const BOSS_HP_MULTIPLIER: f64 = 20.0;
pub const ENEMY_HP_JITTER_MIN: f64 = 0.75;
pub const ENEMY_HP_JITTER_MAX: f64 = 1.25;

// Enemy tiers and damage
pub const ENEMY_MAX_TIER: u8 = 2;
pub const ENEMY_DAMAGE_RATIO: f64 = 0.1;

// Boss gating: arm the boss automatically once the player one-shots the
// stage's base hit-points by this factor
pub const OVERKILL_BOSS_THRESHOLD: f64 = 8.0;

// Isekai schedule
pub const ISEKAI_BASE: f64 = 225.0;
pub const ISEKAI_STAGE_INCREASE: f64 = 10.0;

// Drops
pub const DROP_BASE_CHANCE: f64 = 0.15;
pub const DROP_TIER_BONUS: f64 = 0.10;

// Save format
pub const SAVE_VERSION_MAGIC: u64 = 0x4953454B41495F31; // "ISEKAI_1"
