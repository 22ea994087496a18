//! World table: named bands of stages with background asset keys.

/// A named band of stages within one isekai cycle.
#[derive(Debug, Clone, Copy)]
pub struct WorldData {
    /// First stage of the band before isekai stretching. The final entry is
    /// an unbounded sentinel that never matches a real stage.
    pub stage: f64,
    pub title: &'static str,
    /// Opaque key resolved by the host's asset registry.
    pub background: &'static str,
}

/// The ten-world cycle, reused indefinitely across isekai tiers, plus the
/// sentinel bounding threshold searches.
pub const WORLD: [WorldData; 11] = [
    WorldData {
        stage: 0.0,
        title: "Plains",
        background: "backgrounds/plains",
    },
    WorldData {
        stage: 20.0,
        title: "Forest",
        background: "backgrounds/forest",
    },
    WorldData {
        stage: 40.0,
        title: "Jungle",
        background: "backgrounds/jungle",
    },
    WorldData {
        stage: 60.0,
        title: "Desert",
        background: "backgrounds/desert",
    },
    WorldData {
        stage: 80.0,
        title: "Badlands",
        background: "backgrounds/badlands",
    },
    WorldData {
        stage: 100.0,
        title: "Cave",
        background: "backgrounds/cave",
    },
    WorldData {
        stage: 125.0,
        title: "Castle",
        background: "backgrounds/castle",
    },
    WorldData {
        stage: 150.0,
        title: "Deep Dungeon",
        background: "backgrounds/deep_dungeon",
    },
    WorldData {
        stage: 175.0,
        title: "Hellscape",
        background: "backgrounds/hellscape",
    },
    WorldData {
        stage: 200.0,
        title: "Portal to Another World",
        background: "backgrounds/portal",
    },
    WorldData {
        stage: f64::INFINITY,
        title: "",
        background: "",
    },
];
