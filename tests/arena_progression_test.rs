//! Integration test: full progression flow
//!
//! Climbs the arena through boss gates, crosses a world boundary, saves and
//! reloads through the SaveManager, and runs a prestige reset.

use std::env;
use std::fs;

use isekai::combat::{Arena, base_hp};
use isekai::magnitude::Magnitude;
use isekai::player::Player;
use isekai::save_manager::SaveManager;

/// Player stub with a controllable overkill ratio.
struct StubPlayer {
    alive: bool,
    overkill: f64,
    heals: u32,
}

impl StubPlayer {
    fn grinder() -> Self {
        Self {
            alive: true,
            overkill: 0.0,
            heals: 0,
        }
    }
}

impl Player for StubPlayer {
    fn heal(&mut self) {
        self.alive = true;
        self.heals += 1;
    }

    fn hit(&mut self, _amount: Magnitude) {
        self.alive = false;
    }

    fn dead(&self) -> bool {
        !self.alive
    }

    fn overkill_for_health(&self, _hp: Magnitude) -> f64 {
        self.overkill
    }
}

fn kill_current_enemy(arena: &mut Arena, player: &mut StubPlayer) {
    let hp = arena.current_enemy().current_hp;
    arena.hit_enemy(hp, player);
}

fn climb_to(arena: &mut Arena, player: &mut StubPlayer, stage: u32) {
    while arena.max_stage() < stage {
        arena.goto_max_stage();
        arena.activate_boss();
        kill_current_enemy(arena, player);
    }
}

#[test]
fn test_climb_through_boss_gates_into_second_world() {
    let mut arena = Arena::new();
    let mut player = StubPlayer::grinder();

    assert_eq!(arena.stage_name(), "Plains 1");

    climb_to(&mut arena, &mut player, 25);

    // Every gate healed the player and advanced exactly one stage
    assert_eq!(arena.max_stage(), 25);
    assert_eq!(arena.current_stage(), 25);
    assert_eq!(player.heals, 25);
    assert!(!arena.is_boss_active());

    // Stage 25 sits six stages into the Forest (threshold 20)
    assert_eq!(arena.stage_name(), "Forest 6");
    assert_eq!(arena.isekai_name(), "Home World");
    assert_eq!(arena.position_name(), "Forest 6");

    // Difficulty compounds geometrically along the way
    assert!(base_hp(25) > base_hp(24));
    assert!(base_hp(25).log10() > base_hp(0).log10() + 20.0);
}

#[test]
fn test_overkill_player_skips_grinding() {
    let mut arena = Arena::new();
    let mut player = StubPlayer::grinder();
    player.overkill = 64.0;

    // Each kill re-arms the gate immediately, so plain kills climb stages
    for _ in 0..10 {
        kill_current_enemy(&mut arena, &mut player);
    }

    // First kill was a normal enemy that armed the gate; the other nine
    // were bosses
    assert_eq!(arena.max_stage(), 9);
    assert!(arena.is_boss_active());
    assert!(arena.current_enemy().is_boss());
}

#[test]
fn test_isekai_label_appears_and_survives_prestige() {
    let mut arena = Arena::new();
    let mut player = StubPlayer::grinder();

    climb_to(&mut arena, &mut player, 226);

    // Past the first isekai threshold the position carries the prefix
    assert_eq!(arena.max_stage_lifetime(), 226);
    assert_eq!(arena.isekai_name(), "Isekai I");
    assert_eq!(arena.position_name(), "Isekai I - Plains 2");

    arena.reset();
    assert_eq!(arena.current_stage(), 0);
    assert_eq!(arena.max_stage(), 0);
    assert_eq!(arena.max_stage_lifetime(), 226);

    // Back in the home world, but the lifetime gate keeps the prefix
    assert_eq!(arena.position_name(), "Home World - Plains 1");
}

#[test]
fn test_save_manager_roundtrip_mid_run() {
    let mut arena = Arena::new();
    let mut player = StubPlayer::grinder();
    climb_to(&mut arena, &mut player, 8);
    arena.goto_stage(5);

    let manager = SaveManager::with_path(env::temp_dir().join("isekai_progression_test.dat"));
    manager.save(&arena.save()).expect("failed to save");

    let restored = Arena::from_save(manager.load().expect("failed to load")).expect("invalid save");
    assert_eq!(restored.current_stage(), 5);
    assert_eq!(restored.max_stage(), 8);
    assert_eq!(restored.max_stage_lifetime(), 8);
    assert_eq!(restored.stage_name(), arena.stage_name());
    assert_eq!(
        restored.current_enemy().kind,
        arena.current_enemy().kind
    );

    fs::remove_file(manager.save_path()).expect("failed to remove save");
}
