//! Enemy generation and the difficulty curve.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::magnitude::Magnitude;

/// Enemy discriminator. Tier only applies to normal enemies; bosses are a
/// kind of their own rather than a flagged tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Normal { tier: u8 },
    Boss,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub max_hp: Magnitude,
    pub current_hp: Magnitude,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropRarity {
    Common,
    Rare,
    Epic,
}

/// Reward rolled when an enemy dies; the host economy decides what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDrop {
    pub rarity: DropRarity,
}

impl Enemy {
    pub fn new(hp: Magnitude, kind: EnemyKind) -> Self {
        Self {
            max_hp: hp,
            current_hp: hp,
            kind,
        }
    }

    pub fn is_boss(&self) -> bool {
        self.kind == EnemyKind::Boss
    }

    pub fn tier(&self) -> u8 {
        match self.kind {
            EnemyKind::Normal { tier } => tier,
            EnemyKind::Boss => 0,
        }
    }

    pub fn dead(&self) -> bool {
        self.current_hp.is_zero()
    }

    pub fn hit(&mut self, amount: Magnitude) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Damage this enemy deals per attack, scaled off its full hit-points.
    pub fn damage(&self) -> Magnitude {
        self.max_hp.mul_f64(ENEMY_DAMAGE_RATIO)
    }

    /// Rolls a drop. Normal enemies drop with a tier-boosted chance; bosses
    /// always drop.
    pub fn generate_drop(&self) -> Option<EnemyDrop> {
        let mut rng = rand::thread_rng();
        let chance = match self.kind {
            EnemyKind::Boss => 1.0,
            EnemyKind::Normal { tier } => DROP_BASE_CHANCE + tier as f64 * DROP_TIER_BONUS,
        };
        if rng.gen::<f64>() >= chance {
            return None;
        }
        Some(EnemyDrop {
            rarity: roll_rarity(self.kind, &mut rng),
        })
    }
}

/// Base hit-points for a stage: `BASE_ENEMY_HP * PHI^(5 * stage)`. Golden
/// ratio growth compounds smoothly without per-stage tuning.
pub fn base_hp(stage: u32) -> Magnitude {
    Magnitude::pow(HP_GROWTH_BASE, HP_GROWTH_PER_STAGE * stage as f64).mul_f64(BASE_ENEMY_HP)
}

/// Geometric tier sample capped at [`ENEMY_MAX_TIER`]: tier 0 with
/// probability 1/2, tier 1 with 1/4, the cap absorbing the rest.
pub fn roll_tier(rng: &mut impl Rng) -> u8 {
    let roll: f64 = rng.gen();
    (-(1.0 - roll).log2())
        .floor()
        .min(ENEMY_MAX_TIER as f64) as u8
}

/// Hit-point jitter applied to normal enemies.
pub fn roll_hp_jitter(rng: &mut impl Rng) -> f64 {
    rng.gen_range(ENEMY_HP_JITTER_MIN..ENEMY_HP_JITTER_MAX)
}

/// Generates a normal enemy for a stage with jittered hit-points and a
/// random tier.
pub fn generate_enemy(stage: u32) -> Enemy {
    let mut rng = rand::thread_rng();
    let hp = base_hp(stage).mul_f64(roll_hp_jitter(&mut rng));
    Enemy::new(
        hp,
        EnemyKind::Normal {
            tier: roll_tier(&mut rng),
        },
    )
}

/// Generates the boss guarding a stage.
pub fn generate_boss(stage: u32) -> Enemy {
    Enemy::new(base_hp(stage).mul_f64(BOSS_HP_MULTIPLIER), EnemyKind::Boss)
}

fn roll_rarity(kind: EnemyKind, rng: &mut impl Rng) -> DropRarity {
    let roll: f64 = rng.gen();
    match kind {
        EnemyKind::Boss => {
            if roll < 0.5 {
                DropRarity::Rare
            } else {
                DropRarity::Epic
            }
        }
        EnemyKind::Normal { tier: 0 } => {
            if roll < 0.85 {
                DropRarity::Common
            } else {
                DropRarity::Rare
            }
        }
        EnemyKind::Normal { tier: 1 } => {
            if roll < 0.55 {
                DropRarity::Common
            } else if roll < 0.90 {
                DropRarity::Rare
            } else {
                DropRarity::Epic
            }
        }
        EnemyKind::Normal { .. } => {
            if roll < 0.30 {
                DropRarity::Common
            } else if roll < 0.75 {
                DropRarity::Rare
            } else {
                DropRarity::Epic
            }
        }
    }
}
