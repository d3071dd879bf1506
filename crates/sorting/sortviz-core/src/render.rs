//! Render adapter contract plus the bar geometry hosts paint from.
//!
//! The core never touches a window or canvas. It calls [`RenderSurface`] with
//! the dataset and, for step frames, the step's highlight. [`Layout`] turns
//! those into rectangles; [`DrawList`] records the calls as serializable
//! commands for hosts that paint elsewhere (JS canvas, snapshot tests).

use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;
use crate::dataset::Dataset;
use crate::highlight::{Color, Highlight};

pub const CONTROLS_HINT: &str = "R - Reset | SPACE - Start Sorting";
pub const ALGORITHMS_HINT: &str =
    "B - Bubble sort | I - Insertion sort | Q - Quick sort | Up - Incr speed | Down - Decr speed";

pub const TITLE_COLOR: Color = Color::GREEN;
pub const TEXT_COLOR: Color = Color::BLACK;

/// Two-call drawing contract consumed by the driver.
pub trait RenderSurface {
    /// Clear everything, paint title and control text, paint all bars with the
    /// default gradient.
    fn draw_full(&mut self, data: &Dataset, algorithm_name: &str);

    /// Clear only the bar region and repaint all bars, applying `highlight`
    /// overrides where present.
    fn draw_partial(&mut self, data: &Dataset, highlight: &Highlight);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// One bar, anchored at its top-left corner and extending to the canvas bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub index: usize,
    pub value: i64,
    pub rect: Rect,
    pub color: Color,
}

/// Bar geometry for a canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub canvas: CanvasConfig,
}

impl Layout {
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas }
    }

    /// Area cleared by a partial redraw.
    pub fn bar_region(&self) -> Rect {
        let c = &self.canvas;
        Rect {
            x: i64::from(c.side_pad / 2),
            y: i64::from(c.top_pad),
            width: i64::from(c.width) - i64::from(c.side_pad),
            height: i64::from(c.height) - i64::from(c.top_pad),
        }
    }

    /// Horizontal size of each bar; ties round to even.
    pub fn block_width(&self, len: usize) -> i64 {
        if len == 0 {
            return 0;
        }
        let usable = f64::from(self.canvas.width) - f64::from(self.canvas.side_pad);
        (usable / len as f64).round_ties_even() as i64
    }

    /// Pixels per unit of value above the dataset minimum. A flat dataset
    /// scales as if its span were 1. Spans wider than the bar region scale to 0.
    pub fn block_height(&self, min: i64, max: i64) -> i64 {
        let usable = i128::from(self.canvas.height) - i128::from(self.canvas.top_pad);
        let span = (i128::from(max) - i128::from(min)).max(1);
        clamp_i64(usable.div_euclid(span))
    }

    pub fn bars(&self, data: &Dataset, highlight: Option<&Highlight>) -> Vec<Bar> {
        let block_width = self.block_width(data.len());
        let block_height = i128::from(self.block_height(data.min(), data.max()));
        let start_x = i64::from(self.canvas.side_pad / 2);
        let bottom = i64::from(self.canvas.height);

        data.values()
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let rise = (i128::from(value) - i128::from(data.min())) * block_height;
                let y = clamp_i64(i128::from(bottom) - rise);
                let color = match highlight {
                    Some(h) => h.color_for(i),
                    None => Color::gradient(i),
                };
                Bar {
                    index: i,
                    value,
                    rect: Rect {
                        x: start_x + i as i64 * block_width,
                        y,
                        width: block_width,
                        height: clamp_i64(i128::from(bottom) - i128::from(y)).max(0),
                    },
                    color,
                }
            })
            .collect()
    }
}

fn clamp_i64(v: i128) -> i64 {
    v.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Full {
        title: String,
        title_color: Color,
        hints: Vec<String>,
        text_color: Color,
        background: Color,
        bars: Vec<Bar>,
    },
    Partial {
        region: Rect,
        background: Color,
        bars: Vec<Bar>,
    },
}

/// [`RenderSurface`] that records commands instead of painting.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    layout: Layout,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            commands: Vec::new(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for DrawList {
    fn draw_full(&mut self, data: &Dataset, algorithm_name: &str) {
        self.commands.push(DrawCommand::Full {
            title: algorithm_name.to_string(),
            title_color: TITLE_COLOR,
            hints: vec![CONTROLS_HINT.to_string(), ALGORITHMS_HINT.to_string()],
            text_color: TEXT_COLOR,
            background: Color::BACKGROUND,
            bars: self.layout.bars(data, None),
        });
    }

    fn draw_partial(&mut self, data: &Dataset, highlight: &Highlight) {
        self.commands.push(DrawCommand::Partial {
            region: self.layout.bar_region(),
            background: Color::BACKGROUND,
            bars: self.layout.bars(data, Some(highlight)),
        });
    }
}
