//! Core configuration for sortviz-core.

use serde::{Deserialize, Serialize};

use crate::steps::Algorithm;

/// Seed used when the host does not provide one, so runs are reproducible.
pub const DEFAULT_SEED: u64 = 0x5EED_C0DE_u64;

/// Configuration for dataset shape, cadence and canvas layout.
/// Every field has a default; hosts may pass a partial JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of elements generated on load and reset.
    pub element_count: usize,
    /// Inclusive lower bound for generated values.
    pub min_value: i64,
    /// Inclusive upper bound for generated values.
    pub max_value: i64,

    /// Frames per second at start-up.
    pub initial_speed: u32,
    /// Amount a single speed-up/speed-down key press changes the speed by.
    pub speed_step: u32,
    /// Floor for the speed; values below 1 are treated as 1.
    pub min_speed: u32,

    pub initial_algorithm: Algorithm,

    /// Seed for the dataset RNG. `None` falls back to [`DEFAULT_SEED`].
    pub seed: Option<u64>,

    /// Maximum ticks run by a single `Driver::update` call when catching up.
    pub max_ticks_per_update: u32,

    /// Maximum undrained events retained by the driver; the oldest are dropped.
    pub max_pending_events: usize,

    pub canvas: CanvasConfig,
}

/// Canvas geometry used by [`Layout`](crate::Layout).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Total horizontal padding, split evenly between left and right.
    pub side_pad: u32,
    /// Space above the bar region reserved for title and controls text.
    pub top_pad: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            element_count: 50,
            min_value: 2,
            max_value: 200,
            initial_speed: 10,
            speed_step: 2,
            min_speed: 2,
            initial_algorithm: Algorithm::Bubble,
            seed: None,
            max_ticks_per_update: 8,
            max_pending_events: 1024,
            canvas: CanvasConfig::default(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            side_pad: 100,
            top_pad: 150,
        }
    }
}

impl Config {
    #[inline]
    pub fn speed_floor(&self) -> u32 {
        self.min_speed.max(1)
    }

    #[inline]
    pub fn rng_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
