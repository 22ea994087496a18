//! Scripted auto-play run of the arena core.
//!
//! Drives a simple player through stage climbs, boss gates, and a prestige
//! reset, printing where the run ends up and how large the numbers get.
//!
//! Usage:
//!   cargo run --bin simulate -- [KILLS]

use std::env;

use isekai::combat::{Arena, base_hp};
use isekai::format::format_letters;
use isekai::magnitude::Magnitude;
use isekai::player::Player;

/// Player stub that always hits for a fixed multiple of the current stage's
/// base hit-points.
struct SimPlayer {
    hp: f64,
    max_hp: f64,
    damage_factor: f64,
    stage: u32,
    deaths: u64,
}

impl SimPlayer {
    fn new(damage_factor: f64) -> Self {
        Self {
            hp: 1_000.0,
            max_hp: 1_000.0,
            damage_factor,
            stage: 0,
            deaths: 0,
        }
    }

    fn damage(&self) -> Magnitude {
        base_hp(self.stage).mul_f64(self.damage_factor)
    }
}

impl Player for SimPlayer {
    fn heal(&mut self) {
        if self.hp <= 0.0 {
            self.deaths += 1;
        }
        self.hp = self.max_hp;
    }

    fn hit(&mut self, amount: Magnitude) {
        // The sim player shrugs off a fixed fraction of any blow
        let blow = (amount.ratio(base_hp(self.stage)) * 100.0).min(self.hp);
        self.hp -= blow;
    }

    fn dead(&self) -> bool {
        self.hp <= 0.0
    }

    fn overkill_for_health(&self, hp: Magnitude) -> f64 {
        self.damage().ratio(hp)
    }
}

fn main() {
    env_logger::init();

    let kills: u64 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2_000);

    let mut arena = Arena::new();
    let mut player = SimPlayer::new(0.4);
    let mut drops: u64 = 0;
    let mut boss_kills: u64 = 0;

    for kill in 0..kills {
        player.stage = arena.current_stage();

        // Arm the gate whenever we are sitting on the highest stage
        if arena.is_on_highest_stage() && !arena.is_boss_active() {
            arena.activate_boss();
        }

        let was_boss = arena.current_enemy().is_boss();
        loop {
            arena.hit_player(&mut player);
            let lethal = arena.current_enemy().current_hp <= player.damage();
            if arena.hit_enemy(player.damage(), &mut player).is_some() {
                drops += 1;
            }
            if lethal {
                break;
            }
        }
        if was_boss {
            boss_kills += 1;
        }

        if (kill + 1) % 250 == 0 {
            println!(
                "kill {:>6}  {}  enemy hp {}",
                kill + 1,
                arena.position_name(),
                format_letters(arena.current_enemy().max_hp),
            );
        }
    }

    println!();
    println!("=== Run summary ===");
    println!("Position:        {}", arena.position_name());
    println!("Max stage:       {}", arena.max_stage());
    println!("Boss kills:      {boss_kills}");
    println!("Drops:           {drops}");
    println!("Deaths:          {}", player.deaths);
    println!(
        "Stage base HP:   {}",
        format_letters(base_hp(arena.current_stage()))
    );

    let lifetime = arena.max_stage_lifetime();
    arena.reset();
    println!();
    println!("After prestige reset:");
    println!("Position:        {}", arena.position_name());
    println!("Lifetime stage:  {lifetime}");
}
