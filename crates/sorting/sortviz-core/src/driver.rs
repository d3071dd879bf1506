//! Driver: owns the dataset and the active generator, and advances it one step
//! per frame.
//!
//! Methods:
//! - new, start, tick, reset, set_algorithm, adjust_speed
//! - handle (single input event), update (inputs → cadence-paced ticks)
//!
//! `is_sorting` is the single-writer gate on the dataset: while it is set only
//! the active generator mutates it, and a reset drops the generator before the
//! dataset is regenerated.

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::inputs::{InputEvent, Key};
use crate::outputs::{DriverEvent, TickOutcome, UpdateReport};
use crate::render::RenderSurface;
use crate::steps::{Algorithm, StepGenerator, StepResult};

#[derive(Debug)]
pub struct Driver {
    cfg: Config,
    rng: SmallRng,
    dataset: Dataset,

    algorithm: Algorithm,
    active: Option<Box<dyn StepGenerator>>,
    /// Algorithm of the active generator; selection may not change it mid-sort.
    active_algorithm: Option<Algorithm>,
    speed: u32,

    /// Seconds accumulated towards the next tick in `update`.
    pending_time: f64,
    events: VecDeque<DriverEvent>,
}

impl Driver {
    /// Create a driver and load its first dataset from the config.
    pub fn new(cfg: Config) -> Result<Self, DatasetError> {
        let mut rng = SmallRng::seed_from_u64(cfg.rng_seed());
        let dataset = Dataset::load(&mut rng, cfg.element_count, cfg.min_value, cfg.max_value)?;
        Ok(Self::assemble(cfg, rng, dataset))
    }

    /// Create a driver over caller-supplied data. The RNG is still seeded from
    /// the config for later resets, so the configured shape must be loadable.
    pub fn with_dataset(cfg: Config, dataset: Dataset) -> Result<Self, DatasetError> {
        Dataset::check_range(cfg.element_count, cfg.min_value, cfg.max_value)?;
        let rng = SmallRng::seed_from_u64(cfg.rng_seed());
        Ok(Self::assemble(cfg, rng, dataset))
    }

    fn assemble(cfg: Config, rng: SmallRng, dataset: Dataset) -> Self {
        Self {
            algorithm: cfg.initial_algorithm,
            speed: cfg.initial_speed.max(cfg.speed_floor()),
            cfg,
            rng,
            dataset,
            active: None,
            active_algorithm: None,
            pending_time: 0.0,
            events: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[inline]
    pub fn is_sorting(&self) -> bool {
        self.active.is_some()
    }

    /// Algorithm that the next `start` will run.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Algorithm of the running sort, if any.
    pub fn active_algorithm(&self) -> Option<Algorithm> {
        self.active_algorithm
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.display_name()
    }

    /// Frames per second; always at least 1.
    #[inline]
    pub fn frame_rate(&self) -> u32 {
        self.speed
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.speed))
    }

    /// Steps performed by the running sort so far.
    pub fn steps(&self) -> usize {
        self.active.as_ref().map_or(0, |g| g.steps())
    }

    /// Begin sorting the current dataset. Ignored while a sort is running.
    pub fn start(&mut self) {
        if self.is_sorting() {
            debug!("start ignored: {} already running", self.algorithm);
            return;
        }
        self.active = Some(self.algorithm.generator(&self.dataset));
        self.active_algorithm = Some(self.algorithm);
        debug!(
            "sort started: {} over {} elements",
            self.algorithm,
            self.dataset.len()
        );
        self.push_event(DriverEvent::SortStarted {
            algorithm: self.algorithm,
        });
    }

    /// Advance one frame.
    ///
    /// While sorting, resumes the generator once and draws the resulting step
    /// as a partial redraw. When the generator finishes it is dropped and
    /// nothing is drawn. While idle, draws the full screen.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> TickOutcome {
        let Some(generator) = self.active.as_mut() else {
            surface.draw_full(&self.dataset, self.algorithm.display_name());
            return TickOutcome::Redrawn;
        };

        match generator.resume(&mut self.dataset) {
            StepResult::Continue(highlight) => {
                trace!("step {}: {:?}", generator.steps(), highlight.sorted_marks());
                surface.draw_partial(&self.dataset, &highlight);
                TickOutcome::Stepped(highlight)
            }
            StepResult::Done => {
                let steps = generator.steps();
                let algorithm = self.active_algorithm.take().unwrap_or(self.algorithm);
                self.active = None;
                debug!("sort finished: {algorithm} in {steps} steps");
                self.push_event(DriverEvent::SortFinished { algorithm, steps });
                TickOutcome::Finished
            }
        }
    }

    /// Abandon any running sort and regenerate the dataset.
    ///
    /// The sort is dropped even when the new range is invalid; in that case
    /// the old dataset stays in place and the error is returned.
    pub fn reset(&mut self, n: usize, min_val: i64, max_val: i64) -> Result<(), DatasetError> {
        if let Some(generator) = self.active.take() {
            let algorithm = self.active_algorithm.take().unwrap_or(self.algorithm);
            debug!(
                "sort abandoned by reset: {algorithm} after {} steps",
                generator.steps()
            );
            self.push_event(DriverEvent::SortAbandoned {
                algorithm,
                steps: generator.steps(),
            });
        }
        self.active_algorithm = None;

        self.dataset = Dataset::load(&mut self.rng, n, min_val, max_val)?;
        debug!("dataset reset: {} elements in [{min_val}, {max_val}]", n);
        self.push_event(DriverEvent::DatasetReset { len: n });
        Ok(())
    }

    /// Reset using the configured dataset shape.
    pub fn reset_default(&mut self) -> Result<(), DatasetError> {
        let (n, lo, hi) = (
            self.cfg.element_count,
            self.cfg.min_value,
            self.cfg.max_value,
        );
        self.reset(n, lo, hi)
    }

    /// Choose the algorithm for the next start. Ignored while sorting.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.is_sorting() {
            debug!("algorithm switch to {algorithm} ignored while sorting");
            return;
        }
        if self.algorithm != algorithm {
            self.algorithm = algorithm;
            debug!("algorithm set to {algorithm}");
            self.push_event(DriverEvent::AlgorithmChanged { algorithm });
        }
    }

    /// Raise or lower the frame rate, clamped at the configured floor.
    pub fn adjust_speed(&mut self, delta: i32) {
        let floor = i64::from(self.cfg.speed_floor());
        let next = (i64::from(self.speed) + i64::from(delta)).clamp(floor, i64::from(u32::MAX));
        let next = next as u32;
        if next != self.speed {
            self.speed = next;
            debug!("speed set to {next} fps");
            self.push_event(DriverEvent::SpeedChanged { speed: next });
        }
    }

    /// Apply one input event. Returns false when the event asks to quit.
    ///
    /// Dataset errors from a reset are only possible with an invalid config;
    /// they are returned and leave the previous dataset in place.
    pub fn handle(&mut self, event: InputEvent) -> Result<bool, DatasetError> {
        let key = match event {
            InputEvent::Quit => {
                self.push_event(DriverEvent::QuitRequested);
                return Ok(false);
            }
            InputEvent::KeyDown(key) => key,
        };
        let step = i32::try_from(self.cfg.speed_step).unwrap_or(i32::MAX);
        match key {
            Key::Reset => self.reset_default()?,
            Key::Start => self.start(),
            Key::SelectBubble | Key::SelectInsertion | Key::SelectQuick => {
                if let Some(algorithm) = key.algorithm() {
                    self.set_algorithm(algorithm);
                }
            }
            Key::SpeedUp => self.adjust_speed(step),
            Key::SpeedDown => self.adjust_speed(-step),
        }
        Ok(true)
    }

    /// Apply `inputs`, then run one tick per elapsed frame interval.
    ///
    /// `dt` is wall time in seconds since the previous update. At most
    /// `max_ticks_per_update` ticks run per call; leftover time is dropped so
    /// a stalled host does not replay a backlog. Once quit is seen no ticks run.
    ///
    /// Every input is applied even if one fails; the first error is returned
    /// after the batch and no ticks run. Queued events stay for `take_events`.
    pub fn update(
        &mut self,
        dt: f64,
        inputs: &[InputEvent],
        surface: &mut dyn RenderSurface,
    ) -> Result<UpdateReport, DatasetError> {
        let mut report = UpdateReport {
            running: true,
            ..UpdateReport::default()
        };

        let mut first_err = None;
        for event in inputs {
            match self.handle(*event) {
                Ok(true) => {}
                Ok(false) => report.running = false,
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }
        if let Some(e) = first_err {
            return Err(e);
        }

        if report.running {
            self.pending_time += dt.max(0.0);
            let interval = self.frame_interval().as_secs_f64();
            let cap = self.cfg.max_ticks_per_update.max(1);
            while self.pending_time >= interval && report.ticks < cap {
                self.pending_time -= interval;
                report.ticks += 1;
                if let TickOutcome::Stepped(_) = self.tick(surface) {
                    report.steps += 1;
                }
            }
            if report.ticks == cap {
                self.pending_time = self.pending_time.min(interval);
            }
        }

        report.events = self.take_events();
        Ok(report)
    }

    fn push_event(&mut self, event: DriverEvent) {
        let cap = self.cfg.max_pending_events.max(1);
        while self.events.len() >= cap {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Drain events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<DriverEvent> {
        self.events.drain(..).collect()
    }
}
