//! The arena: stage navigation, boss gating, and the enemy lifecycle.
//!
//! The arena is the only mutable state holder in the core. Everything else
//! (world addressing, the difficulty curve, formatting) is pure; the arena
//! drives them one synchronous call at a time and is the unit of
//! persistence.

use log::debug;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyDrop, base_hp, generate_boss, generate_enemy};
use crate::core::constants::{ISEKAI_BASE, OVERKILL_BOSS_THRESHOLD};
use crate::format::format_roman;
use crate::magnitude::Magnitude;
use crate::player::Player;
use crate::save_manager::SaveError;
use crate::world::{WorldAddress, world_data_for_stage};

/// Invariants, enforced at every mutation site:
/// `current_stage <= max_stage <= max_stage_lifetime`, and the boss flag is
/// only set while on the highest stage.
#[derive(Debug)]
pub struct Arena {
    current_stage: u32,
    max_stage: u32,
    max_stage_lifetime: u32,
    is_boss_active: bool,
    current_enemy: Enemy,
}

/// Snapshot of the arena state.
///
/// `max_stage_lifetime` defaults to 0 so snapshots written before the field
/// existed still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaSave {
    pub current_stage: u32,
    pub max_stage: u32,
    #[serde(default)]
    pub max_stage_lifetime: u32,
    pub is_boss_active: bool,
    pub current_enemy: Enemy,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    pub fn new() -> Self {
        Self {
            current_stage: 0,
            max_stage: 0,
            max_stage_lifetime: 0,
            is_boss_active: false,
            current_enemy: generate_enemy(0),
        }
    }

    pub fn current_stage(&self) -> u32 {
        self.current_stage
    }

    pub fn max_stage(&self) -> u32 {
        self.max_stage
    }

    pub fn max_stage_lifetime(&self) -> u32 {
        self.max_stage_lifetime
    }

    pub fn is_boss_active(&self) -> bool {
        self.is_boss_active
    }

    pub fn current_enemy(&self) -> &Enemy {
        &self.current_enemy
    }

    pub fn is_on_lowest_stage(&self) -> bool {
        self.current_stage == 0
    }

    pub fn is_on_highest_stage(&self) -> bool {
        self.current_stage == self.max_stage
    }

    fn new_enemy(&self) -> Enemy {
        if self.is_on_highest_stage() && self.is_boss_active {
            generate_boss(self.current_stage)
        } else {
            generate_enemy(self.current_stage)
        }
    }

    /// Hits the current enemy. On a kill the drop is captured, a boss kill
    /// on the highest stage advances it, and the next enemy spawns. Players
    /// whose overkill against the new stage's base hit-points clears
    /// [`OVERKILL_BOSS_THRESHOLD`] get the boss armed immediately so they
    /// are not forced to grind stages they one-shot.
    pub fn hit_enemy(&mut self, damage: Magnitude, player: &mut dyn Player) -> Option<EnemyDrop> {
        self.current_enemy.hit(damage);
        if !self.current_enemy.dead() {
            return None;
        }

        let drop = self.current_enemy.generate_drop();
        if self.current_enemy.is_boss() && self.is_on_highest_stage() {
            self.max_stage += 1;
            self.max_stage_lifetime = self.max_stage_lifetime.max(self.max_stage);
            self.current_stage = self.max_stage;
            self.is_boss_active = false;
            player.heal();
            debug!("boss defeated, max stage raised to {}", self.max_stage);
        }
        self.current_enemy = self.new_enemy();

        if player.overkill_for_health(base_hp(self.current_stage)) > OVERKILL_BOSS_THRESHOLD {
            self.activate_boss();
        }

        drop
    }

    /// The enemy attacks. A dead player is healed on the spot and the
    /// encounter restarts; stage progress is never lost to a death.
    pub fn hit_player(&mut self, player: &mut dyn Player) {
        player.hit(self.current_enemy.damage());
        if player.dead() {
            player.heal();
            self.current_enemy = self.new_enemy();
        }
    }

    /// Jumps to a stage, clamped to `[0, max_stage]`, and respawns the
    /// enemy. Leaving the highest stage disarms the boss.
    pub fn goto_stage(&mut self, stage: u32) {
        self.current_stage = stage.min(self.max_stage);
        if !self.is_on_highest_stage() {
            self.is_boss_active = false;
        }
        self.current_enemy = self.new_enemy();
    }

    pub fn goto_max_stage(&mut self) {
        self.goto_stage(self.max_stage);
    }

    pub fn next_stage(&mut self) {
        self.goto_stage(self.current_stage + 1);
    }

    pub fn prev_stage(&mut self) {
        self.goto_stage(self.current_stage.saturating_sub(1));
    }

    /// Arms the boss gate. Silently does nothing off the highest stage.
    pub fn activate_boss(&mut self) {
        if self.is_on_highest_stage() {
            self.is_boss_active = true;
            self.current_enemy = self.new_enemy();
        }
    }

    pub fn deactivate_boss(&mut self) {
        self.is_boss_active = false;
        self.current_enemy = self.new_enemy();
    }

    /// Prestige reset. Stage progress and the boss flag go back to zero;
    /// `max_stage_lifetime` is a lifetime high-water mark and survives.
    pub fn reset(&mut self) {
        self.current_stage = 0;
        self.max_stage = 0;
        self.is_boss_active = false;
        self.current_enemy = self.new_enemy();
        debug!("arena reset for prestige");
    }

    /* Derived queries, computed on demand so they can never go stale */

    pub fn stage_data(&self) -> WorldAddress {
        world_data_for_stage(self.current_stage)
    }

    /// World title plus the 1-based stage index within that world.
    pub fn stage_name(&self) -> String {
        let data = self.stage_data();
        let index = (self.current_stage as f64 - data.stage) as u32 + 1;
        format!("{} {}", data.title, index)
    }

    /// Roman-numeral prestige label, or the home-world label at tier 0.
    pub fn isekai_name(&self) -> String {
        let isekai = self.stage_data().isekai;
        if isekai > 0 {
            format!("Isekai {}", format_roman(isekai))
        } else {
            "Home World".to_string()
        }
    }

    /// Full position label. The isekai prefix appears once the lifetime
    /// high-water mark has ever reached the first isekai threshold, so the
    /// label persists through prestige resets.
    pub fn position_name(&self) -> String {
        if self.max_stage_lifetime as f64 >= ISEKAI_BASE {
            format!("{} - {}", self.isekai_name(), self.stage_name())
        } else {
            self.stage_name()
        }
    }

    /* Persistence */

    pub fn save(&self) -> ArenaSave {
        ArenaSave {
            current_stage: self.current_stage,
            max_stage: self.max_stage,
            max_stage_lifetime: self.max_stage_lifetime,
            is_boss_active: self.is_boss_active,
            current_enemy: self.current_enemy.clone(),
        }
    }

    /// Restores an arena from a validated snapshot. Snapshots predating the
    /// lifetime field load with the high-water mark raised to `max_stage`.
    pub fn from_save(save: ArenaSave) -> Result<Self, SaveError> {
        save.validate()?;
        Ok(Self {
            current_stage: save.current_stage,
            max_stage: save.max_stage,
            max_stage_lifetime: save.max_stage_lifetime.max(save.max_stage),
            is_boss_active: save.is_boss_active,
            current_enemy: save.current_enemy,
        })
    }
}

impl ArenaSave {
    /// Decodes a snapshot from its JSON shape. Structurally invalid blobs
    /// fail with a named decoding error instead of loading garbage.
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let save: ArenaSave = serde_json::from_str(json)?;
        save.validate()?;
        Ok(save)
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks the snapshot against the arena invariants.
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.current_stage > self.max_stage {
            return Err(SaveError::InvalidSnapshot(format!(
                "current stage {} exceeds max stage {}",
                self.current_stage, self.max_stage
            )));
        }
        if self.is_boss_active && self.current_stage != self.max_stage {
            return Err(SaveError::InvalidSnapshot(
                "boss active away from the highest stage".to_string(),
            ));
        }
        Ok(())
    }
}
