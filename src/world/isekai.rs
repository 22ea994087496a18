//! Stage-to-world addressing across repeating isekai cycles.
//!
//! The world table repeats forever. Each isekai tier stretches the spacing
//! between world transitions by `isekai * index * ISEKAI_STAGE_INCREASE`
//! stages, so the cumulative start of tier `k` follows a quadratic schedule
//! that can be inverted in closed form.

use super::data::{WORLD, WorldData};
use crate::core::constants::{ISEKAI_BASE, ISEKAI_STAGE_INCREASE};

/// Stage spacing added per isekai tier across one full world cycle.
pub const ISEKAI_INCREASE: f64 = ISEKAI_STAGE_INCREASE * (WORLD.len() - 1) as f64;

/// Resolved address of a stage: the isekai tier plus the world entry whose
/// stretched threshold it falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldAddress {
    pub isekai: u32,
    /// Absolute stage at which this world begins.
    pub stage: f64,
    pub title: &'static str,
    pub background: &'static str,
}

/// First stage of isekai tier `k`: `(BASE - INC/2)*k + (INC/2)*k^2`.
pub fn stage_at_isekai(isekai: u32) -> f64 {
    let b = ISEKAI_BASE;
    let i = ISEKAI_INCREASE;
    let k = isekai as f64;
    (b - i / 2.0) * k + (i / 2.0) * k * k
}

/// Inverse of [`stage_at_isekai`] via the quadratic formula, floored.
/// Returns 0 for every stage below `ISEKAI_BASE` and is exact at schedule
/// boundaries.
pub fn isekai_for_stage(stage: u32) -> u32 {
    let i = ISEKAI_INCREASE;
    let half = ISEKAI_BASE - i / 2.0;
    let s = stage as f64;
    (((half * half + 2.0 * i * s).sqrt() - half) / i).floor() as u32
}

fn resolved_threshold(entry: &WorldData, index: usize, isekai: u32, isekai_start: f64) -> f64 {
    entry.stage + isekai_start + isekai as f64 * index as f64 * ISEKAI_STAGE_INCREASE
}

/// Maps a stage to the last world entry whose stretched threshold does not
/// exceed it, clamped to the first entry. The sentinel never matches.
pub fn world_data_for_stage(stage: u32) -> WorldAddress {
    let isekai = isekai_for_stage(stage);
    let isekai_start = stage_at_isekai(isekai);
    let s = stage as f64;

    let mut index = 0;
    for (i, entry) in WORLD.iter().enumerate() {
        if s >= resolved_threshold(entry, i, isekai, isekai_start) {
            index = i;
        }
    }

    WorldAddress {
        isekai,
        stage: resolved_threshold(&WORLD[index], index, isekai, isekai_start),
        title: WORLD[index].title,
        background: WORLD[index].background,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isekai_zero_below_base() {
        for stage in [0, 1, 100, 224] {
            assert_eq!(isekai_for_stage(stage), 0, "stage {stage}");
        }
    }

    #[test]
    fn test_isekai_schedule_boundaries_exact() {
        // First cycle spans ISEKAI_BASE stages
        assert_eq!(stage_at_isekai(0), 0.0);
        assert_eq!(stage_at_isekai(1), ISEKAI_BASE);

        for k in 0..500u32 {
            let start = stage_at_isekai(k) as u32;
            assert_eq!(isekai_for_stage(start), k, "at boundary of tier {k}");
            if start > 0 {
                assert_eq!(
                    isekai_for_stage(start - 1),
                    k - 1,
                    "just below boundary of tier {k}"
                );
            }
        }
    }

    #[test]
    fn test_isekai_non_decreasing() {
        let mut last = 0;
        for stage in 0..5_000 {
            let tier = isekai_for_stage(stage);
            assert!(tier >= last);
            last = tier;
        }
    }

    #[test]
    fn test_world_lookup_first_cycle() {
        assert_eq!(world_data_for_stage(0).title, "Plains");
        assert_eq!(world_data_for_stage(19).title, "Plains");
        assert_eq!(world_data_for_stage(20).title, "Forest");
        assert_eq!(world_data_for_stage(100).title, "Cave");
        assert_eq!(world_data_for_stage(124).title, "Cave");
        assert_eq!(world_data_for_stage(125).title, "Castle");
        assert_eq!(world_data_for_stage(200).title, "Portal to Another World");
        assert_eq!(world_data_for_stage(224).title, "Portal to Another World");
    }

    #[test]
    fn test_world_lookup_second_cycle_stretched() {
        // Tier 1 starts at 225 back in Plains
        let data = world_data_for_stage(225);
        assert_eq!(data.isekai, 1);
        assert_eq!(data.title, "Plains");
        assert_eq!(data.stage, 225.0);

        // Forest threshold stretches by isekai * index * 10: 225 + 20 + 10
        assert_eq!(world_data_for_stage(254).title, "Plains");
        let forest = world_data_for_stage(255);
        assert_eq!(forest.title, "Forest");
        assert_eq!(forest.stage, 255.0);
    }

    #[test]
    fn test_resolved_thresholds_non_decreasing() {
        let mut last = 0.0;
        for stage in 0..3_000 {
            let data = world_data_for_stage(stage);
            assert!(
                data.stage >= last,
                "resolved threshold regressed at stage {stage}"
            );
            assert!(data.stage <= stage as f64);
            last = data.stage;
        }
    }

    #[test]
    fn test_sentinel_never_selected() {
        for stage in (0..100_000).step_by(997) {
            assert!(!world_data_for_stage(stage).title.is_empty());
        }
    }
}
