use js_sys::{Array, Function};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use sortviz_core::{
    Algorithm, Bar, Config, Dataset, DrawCommand, DrawList, Driver, Highlight, InputEvent, Key,
    Layout, RenderSurface, TickOutcome, UpdateReport,
};

#[wasm_bindgen]
pub struct SortVisualizer {
    core: Driver,
    surface: DrawList,
}

#[derive(Serialize)]
struct FrameOutput {
    report: UpdateReport,
    commands: Vec<DrawCommand>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn parse_algorithm(name: &str) -> Option<Algorithm> {
    match name.to_ascii_lowercase().as_str() {
        "bubble" | "bubble sort" => Some(Algorithm::Bubble),
        "insertion" | "insertion sort" => Some(Algorithm::Insertion),
        "quick" | "quick sort" | "quicksort" => Some(Algorithm::Quick),
        _ => None,
    }
}

/// Paints through two JS callbacks:
///   draw_full(title: string, hints: string[], bars: Bar[])
///   draw_partial(bars: Bar[])
/// The first callback error is kept and reported after the tick.
struct JsSurface {
    layout: Layout,
    draw_full: Function,
    draw_partial: Function,
    error: Option<JsValue>,
}

impl JsSurface {
    fn bars_value(&mut self, bars: &[Bar]) -> JsValue {
        match swb::to_value(bars) {
            Ok(v) => v,
            Err(e) => {
                self.error.get_or_insert_with(|| JsValue::from_str(&e.to_string()));
                JsValue::UNDEFINED
            }
        }
    }
}

impl RenderSurface for JsSurface {
    fn draw_full(&mut self, data: &Dataset, algorithm_name: &str) {
        let bars = self.layout.bars(data, None);
        let bars = self.bars_value(&bars);
        let hints = Array::of2(
            &JsValue::from_str(sortviz_core::render::CONTROLS_HINT),
            &JsValue::from_str(sortviz_core::render::ALGORITHMS_HINT),
        );
        if let Err(e) = self.draw_full.call3(
            &JsValue::UNDEFINED,
            &JsValue::from_str(algorithm_name),
            &hints,
            &bars,
        ) {
            self.error.get_or_insert(e);
        }
    }

    fn draw_partial(&mut self, data: &Dataset, highlight: &Highlight) {
        let bars = self.layout.bars(data, Some(highlight));
        let bars = self.bars_value(&bars);
        if let Err(e) = self.draw_partial.call1(&JsValue::UNDEFINED, &bars) {
            self.error.get_or_insert(e);
        }
    }
}

#[wasm_bindgen]
impl SortVisualizer {
    /// Create a visualizer. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new SortVisualizer({ element_count: 80, seed: Date.now() })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SortVisualizer, JsError> {
        #[cfg(feature = "console_error")]
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let layout = Layout::new(cfg.canvas);
        let core = Driver::new(cfg).map_err(|e| JsError::new(&format!("dataset error: {e}")))?;

        Ok(SortVisualizer {
            core,
            surface: DrawList::new(layout),
        })
    }

    /// Apply a key press by browser key name (`"r"`, `" "`, `"ArrowUp"`, ...).
    /// Returns false when the key is not bound.
    #[wasm_bindgen(js_name = key_down)]
    pub fn key_down(&mut self, key: String) -> Result<bool, JsError> {
        let Some(key) = Key::from_name(&key) else {
            return Ok(false);
        };
        self.core
            .handle(InputEvent::KeyDown(key))
            .map_err(|e| JsError::new(&format!("reset error: {e}")))?;
        Ok(true)
    }

    /// Advance by dt seconds. Returns `{ report, commands }` JSON.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f64) -> Result<JsValue, JsError> {
        let report = self
            .core
            .update(dt, &[], &mut self.surface)
            .map_err(|e| JsError::new(&format!("update error: {e}")))?;
        let out = FrameOutput {
            report,
            commands: self.surface.take(),
        };
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Run exactly one frame. Returns the recorded draw commands (empty on the
    /// frame a sort finishes).
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<JsValue, JsError> {
        self.core.tick(&mut self.surface);
        let commands = self.surface.take();
        swb::to_value(&commands).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Run one frame, painting through JS callbacks instead of returning commands.
    /// Returns true when a step was drawn.
    #[wasm_bindgen(js_name = tick_with)]
    pub fn tick_with(&mut self, draw_full: Function, draw_partial: Function) -> Result<bool, JsValue> {
        let mut surface = JsSurface {
            layout: *self.surface.layout(),
            draw_full,
            draw_partial,
            error: None,
        };
        let outcome = self.core.tick(&mut surface);
        if let Some(err) = surface.error {
            return Err(err);
        }
        Ok(matches!(outcome, TickOutcome::Stepped(_)))
    }

    /// Drain semantic events (sort started/finished, resets, speed changes).
    /// `update` drains them itself; hosts driving `tick` call this instead.
    #[wasm_bindgen(js_name = take_events)]
    pub fn take_events(&mut self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.take_events())
            .map_err(|e| JsError::new(&format!("events error: {e}")))
    }

    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.core.start();
    }

    #[wasm_bindgen]
    pub fn reset(&mut self, n: usize, min_val: i32, max_val: i32) -> Result<(), JsError> {
        self.core
            .reset(n, i64::from(min_val), i64::from(max_val))
            .map_err(|e| JsError::new(&format!("reset error: {e}")))
    }

    /// Select by name (`"bubble"`, `"insertion"`, `"quick"`). Ignored while sorting.
    #[wasm_bindgen(js_name = set_algorithm)]
    pub fn set_algorithm(&mut self, name: String) -> Result<(), JsError> {
        let algorithm = parse_algorithm(&name)
            .ok_or_else(|| JsError::new(&format!("unknown algorithm '{name}'")))?;
        self.core.set_algorithm(algorithm);
        Ok(())
    }

    #[wasm_bindgen(js_name = adjust_speed)]
    pub fn adjust_speed(&mut self, delta: i32) {
        self.core.adjust_speed(delta);
    }

    /// Current values as a plain array of numbers.
    #[wasm_bindgen]
    pub fn dataset(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.core.dataset().values())
            .map_err(|e| JsError::new(&format!("dataset error: {e}")))
    }

    #[wasm_bindgen(js_name = is_sorting)]
    pub fn is_sorting(&self) -> bool {
        self.core.is_sorting()
    }

    #[wasm_bindgen(js_name = frame_rate)]
    pub fn frame_rate(&self) -> u32 {
        self.core.frame_rate()
    }

    #[wasm_bindgen(js_name = algorithm_name)]
    pub fn algorithm_name(&self) -> String {
        self.core.algorithm_name().to_string()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
