//! World table and isekai addressing.
//!
//! Worlds are themed bands of stages. The same ten-world cycle repeats
//! forever; each isekai (prestige) tier stretches the spacing between world
//! transitions so later cycles take longer to cross.

mod data;
mod isekai;

pub use data::{WORLD, WorldData};
pub use isekai::{
    ISEKAI_INCREASE, WorldAddress, isekai_for_stage, stage_at_isekai, world_data_for_stage,
};
