//! The phase sequencer. One cycle plays five phases over a shared virtual
//! clock, then restarts after a trailing pause:
//!
//! ```text
//! |= morph =|
//!           |==== thirds grid ====|
//!                     |==== diagonals ====|
//!                                |==== inset square ====|
//!                                            |== cross ==|== rings ==|
//! ----------------------------- time ------------------------------->
//! ```
//!
//! After the corner morph, each phase starts at a fixed fraction of the
//! previous phase's duration (0.5, 0.5, 0.8), while the previous strokes are
//! still settling. Only morph→grid and rings→restart ride on animation
//! completions; the middle transitions are independent timers.

use crate::{
    anim_ease::Ease,
    core::{ElementStyle, Rgba8},
    elements::{circle_elements, corner_radius_element, stroke_elements},
    error::{GridloopError, GridloopResult},
    geometry,
    scene::{SceneSnapshot, Stage},
    timer::TimerQueue,
    transaction::Transaction,
};

/// Seconds between consecutive ring grows in the final phase.
const RING_STAGGER_SECS: f64 = 0.2;

/// Pause between the last ring settling and the next cycle.
const RESTART_DELAY_SECS: f64 = 0.8;

/// The five stages of one loop cycle, in playback order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    CornerMorph,
    ThirdsGrid,
    Diagonals,
    InsetSquare,
    CrossAndRings,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::CornerMorph,
        Phase::ThirdsGrid,
        Phase::Diagonals,
        Phase::InsetSquare,
        Phase::CrossAndRings,
    ];

    pub fn index(self) -> usize {
        match self {
            Phase::CornerMorph => 0,
            Phase::ThirdsGrid => 1,
            Phase::Diagonals => 2,
            Phase::InsetSquare => 3,
            Phase::CrossAndRings => 4,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub base_dimension: f64,
    pub base_corner_radius: f64,
    pub guide_color: Rgba8,
    pub line_width: f64,
    /// Target duration per phase, indexed by [`Phase::index`].
    pub durations: [f64; 5],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            base_dimension: 240.0,
            base_corner_radius: 50.0,
            guide_color: Rgba8::LIGHT_GRAY,
            line_width: 1.0,
            durations: [0.4, 0.4, 0.6, 0.6, 0.8],
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> GridloopResult<()> {
        if !self.base_dimension.is_finite() || self.base_dimension <= 0.0 {
            return Err(GridloopError::validation("base_dimension must be > 0"));
        }
        if !self.base_corner_radius.is_finite()
            || self.base_corner_radius < 0.0
            || self.base_corner_radius > self.base_dimension / 2.0
        {
            return Err(GridloopError::validation(
                "base_corner_radius must be in [0, base_dimension / 2]",
            ));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(GridloopError::validation("line_width must be > 0"));
        }
        if self
            .durations
            .iter()
            .any(|d| !d.is_finite() || *d <= 0.0)
        {
            return Err(GridloopError::validation(
                "every phase duration must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// One entry in the phase log: which phase began, when, in which cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhaseEvent {
    pub at: f64,
    pub cycle: u64,
    pub phase: Phase,
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Enter(Phase),
    RestartDelay,
    Restart,
}

/// Timer payload. The cycle stamp lets a new cycle (or a cancel) strand any
/// timers the previous cycle left behind.
#[derive(Clone, Copy, Debug)]
struct Scheduled {
    cycle: u64,
    action: Action,
}

pub struct Player {
    config: PlayerConfig,
    stage: Stage,
    timers: TimerQueue<Scheduled>,
    now: f64,
    cycle: u64,
    phase: Option<Phase>,
    cancelled: bool,
    events: Vec<PhaseEvent>,
}

impl Player {
    pub fn new(config: PlayerConfig) -> GridloopResult<Self> {
        config.validate()?;
        let stage = Stage::new(config.base_dimension, config.guide_color, config.line_width);
        Ok(Self {
            config,
            stage,
            timers: TimerQueue::new(),
            now: 0.0,
            cycle: 0,
            phase: None,
            cancelled: false,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn events(&self) -> &[PhaseEvent] {
        &self.events
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Clear the previous cycle: transient drawables, in-flight animations,
    /// pending timers. Idempotent.
    pub fn prepare(&mut self) {
        self.timers.clear();
        self.stage.prepare();
        self.phase = None;
    }

    /// Start (or restart) the loop from the first phase at the current
    /// clock time.
    #[tracing::instrument(skip(self))]
    pub fn play(&mut self) -> GridloopResult<()> {
        self.cancelled = false;
        let at = self.now;
        self.start_cycle(at)
    }

    /// Stop the loop. The current visual state stays on the stage, but no
    /// further phase begins until the next `play`.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.timers.clear();
    }

    /// Move the clock forward and run every timer that falls due, in
    /// deadline order. Each action is dispatched at its own deadline, so one
    /// large step reproduces the exact schedule of many small ones.
    pub fn advance(&mut self, dt: f64) -> GridloopResult<()> {
        if dt.is_finite() && dt > 0.0 {
            self.now += dt;
        }
        while let Some(fired) = self.timers.pop_due(self.now) {
            let Scheduled { cycle, action } = fired.payload;
            if self.cancelled || cycle != self.cycle {
                continue;
            }
            self.dispatch(action, fired.deadline)?;
        }
        Ok(())
    }

    /// Resolve the stage at an arbitrary time point.
    pub fn sample(&self, t: f64) -> SceneSnapshot {
        self.stage.sample(t)
    }

    /// Resolve the stage at the current clock time.
    pub fn snapshot(&self) -> SceneSnapshot {
        self.stage.sample(self.now)
    }

    fn start_cycle(&mut self, at: f64) -> GridloopResult<()> {
        self.prepare();
        self.cycle += 1;
        self.enter(Phase::CornerMorph, at)
    }

    fn schedule(&mut self, deadline: f64, action: Action) {
        let payload = Scheduled {
            cycle: self.cycle,
            action,
        };
        self.timers.schedule(deadline, payload);
    }

    fn completion(&self, action: Action) -> Scheduled {
        Scheduled {
            cycle: self.cycle,
            action,
        }
    }

    fn dispatch(&mut self, action: Action, at: f64) -> GridloopResult<()> {
        match action {
            Action::Enter(phase) => self.enter(phase, at),
            Action::RestartDelay => {
                self.schedule(at + RESTART_DELAY_SECS, Action::Restart);
                Ok(())
            }
            Action::Restart => self.start_cycle(at),
        }
    }

    #[tracing::instrument(skip(self), fields(cycle = self.cycle))]
    fn enter(&mut self, phase: Phase, at: f64) -> GridloopResult<()> {
        self.phase = Some(phase);
        self.events.push(PhaseEvent {
            at,
            cycle: self.cycle,
            phase,
        });

        let d = self.config.base_dimension;
        let r = self.config.base_corner_radius;
        let durations = self.config.durations;
        let style =
            ElementStyle::guide(self.config.guide_color).with_line_width(self.config.line_width);

        match phase {
            Phase::CornerMorph => {
                let from = self
                    .stage
                    .base()
                    .map(|base| base.corner_radius)
                    .unwrap_or(r);
                let mut tx = Transaction::new(durations[0], Ease::OutCubic)?;
                tx.push(corner_radius_element(from, r));
                let completion = self.completion(Action::Enter(Phase::ThirdsGrid));
                tx.commit(&mut self.stage, &mut self.timers, at, Some(completion));
            }
            Phase::ThirdsGrid => {
                let mut tx = Transaction::new(durations[1], Ease::InOutCubic)?;
                tx.extend(stroke_elements(&geometry::thirds_grid(d), 0.5, &style));
                tx.commit(&mut self.stage, &mut self.timers, at, None);
                self.schedule(at + 0.5 * durations[1], Action::Enter(Phase::Diagonals));
            }
            Phase::Diagonals => {
                let mut tx = Transaction::new(durations[2], Ease::InOutCubic)?;
                tx.extend(stroke_elements(&geometry::center_diagonals(d), 1.0, &style));
                tx.commit(&mut self.stage, &mut self.timers, at, None);
                self.schedule(at + 0.5 * durations[2], Action::Enter(Phase::InsetSquare));
            }
            Phase::InsetSquare => {
                let mut tx = Transaction::new(durations[3], Ease::InOutCubic)?;
                tx.extend(stroke_elements(&geometry::inset_square(d, r), 0.5, &style));
                tx.commit(&mut self.stage, &mut self.timers, at, None);
                self.schedule(at + 0.8 * durations[3], Action::Enter(Phase::CrossAndRings));
            }
            Phase::CrossAndRings => {
                let mut cross = Transaction::new(durations[4] * 0.4, Ease::InOutCubic)?;
                cross.extend(stroke_elements(&geometry::center_cross(d), 1.0, &style));
                cross.commit(&mut self.stage, &mut self.timers, at, None);

                let mut rings = Transaction::new(durations[4], Ease::OutCubic)?;
                for (index, element) in circle_elements(&geometry::concentric_rings(d, r), &style)
                    .into_iter()
                    .enumerate()
                {
                    let i = index as f64;
                    rings.push(
                        element
                            .with_begin_offset(i * RING_STAGGER_SECS)
                            .with_duration(durations[4] * (1.0 - RING_STAGGER_SECS * i)),
                    );
                }
                let completion = self.completion(Action::RestartDelay);
                rings.commit(&mut self.stage, &mut self.timers, at, Some(completion));
            }
        }
        Ok(())
    }
}
