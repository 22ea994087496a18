//! Combat system: enemy generation and the arena state machine.

pub mod arena;
pub mod enemy;

pub use arena::{Arena, ArenaSave};
pub use enemy::{DropRarity, Enemy, EnemyDrop, EnemyKind, base_hp, generate_boss, generate_enemy};
