//! sortviz core (renderer-agnostic)
//!
//! Runs comparison sorts as resumable step generators over a [`Dataset`]. A
//! [`Driver`] owns the dataset and the active generator and advances it one
//! visualizable step per frame, handing each step's [`Highlight`] to a
//! [`RenderSurface`] supplied by the host (canvas, terminal, test recorder).

pub mod config;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod highlight;
pub mod inputs;
pub mod outputs;
pub mod render;
pub mod steps;

// Re-exports for consumers (adapters)
pub use config::{CanvasConfig, Config};
pub use dataset::Dataset;
pub use driver::Driver;
pub use error::DatasetError;
pub use highlight::{Color, Highlight};
pub use inputs::{InputEvent, Key};
pub use outputs::{DriverEvent, TickOutcome, UpdateReport};
pub use render::{Bar, DrawCommand, DrawList, Layout, RenderSurface};
pub use steps::{Algorithm, StepGenerator, StepResult};
