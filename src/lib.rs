//! Isekai - Idle RPG Progression Core
//!
//! Deterministic math and state-machine logic for an incremental RPG: stage
//! and world addressing across repeating prestige ("isekai") cycles, enemy
//! generation with boss gating, and compact large-magnitude formatting.
//! Rendering, input, the player model, and the drop economy live in the
//! host; they plug in through the [`player::Player`] contract and the
//! snapshot types.

pub mod combat;
pub mod core;
pub mod format;
pub mod magnitude;
pub mod player;
pub mod save_manager;
pub mod world;

pub use combat::{Arena, ArenaSave, Enemy, EnemyDrop, EnemyKind};
pub use magnitude::Magnitude;
pub use save_manager::{SaveError, SaveManager};
