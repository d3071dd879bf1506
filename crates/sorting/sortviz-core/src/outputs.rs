//! Output contracts from the driver.
//!
//! Drawing goes straight to the host's [`RenderSurface`](crate::RenderSurface);
//! what comes back here is bookkeeping: which way a tick went and the semantic
//! events a host may want to surface (status text, sounds, telemetry).

use serde::{Deserialize, Serialize};

use crate::highlight::Highlight;
use crate::steps::Algorithm;

/// What a single `Driver::tick` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Idle frame; the surface received a full redraw.
    Redrawn,
    /// The generator performed a step; the surface received a partial redraw.
    Stepped(Highlight),
    /// The generator reported completion. Nothing was drawn this frame.
    Finished,
}

/// Discrete semantic signals emitted while handling input and ticking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DriverEvent {
    SortStarted { algorithm: Algorithm },
    SortFinished { algorithm: Algorithm, steps: usize },
    /// An in-progress sort was dropped by a reset.
    SortAbandoned { algorithm: Algorithm, steps: usize },
    DatasetReset { len: usize },
    AlgorithmChanged { algorithm: Algorithm },
    SpeedChanged { speed: u32 },
    QuitRequested,
}

/// Returned by `Driver::update`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateReport {
    /// Ticks executed during this update.
    pub ticks: u32,
    /// Steps performed (ticks that ended in a partial redraw).
    pub steps: u32,
    /// False once a quit event was seen.
    pub running: bool,
    #[serde(default)]
    pub events: Vec<DriverEvent>,
}
