#![forbid(unsafe_code)]

//! Deterministic touch scripts.
//!
//! [`DragScript`] builds hand-written sequences; [`touch_storm`] generates a
//! seeded stream of well-formed gestures mixed with viewport resizes. Both
//! produce plain [`SheetEvent`] vectors, so a script can be replayed, logged
//! or serialized without the harness.

use sheetkit_core::event::{SheetEvent, ViewportSample};

/// Builder for an ordered list of sheet events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragScript {
    events: Vec<SheetEvent>,
}

impl DragScript {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// One continuous drag from `from` to `to`, split into `steps` moves of
    /// equal length. Zero steps yields a tap (start then end).
    #[must_use]
    pub fn drag(mut self, from: f64, to: f64, steps: u32) -> Self {
        self.events.push(SheetEvent::TouchStart { y: from });
        for i in 1..=steps {
            let t = f64::from(i) / f64::from(steps);
            self.events.push(SheetEvent::TouchMove {
                y: from + (to - from) * t,
            });
        }
        self.events.push(SheetEvent::TouchEnd);
        self
    }

    /// A fast drag: two moves, halfway then to `to`.
    #[must_use]
    pub fn flick(self, from: f64, to: f64) -> Self {
        self.drag(from, to, 2)
    }

    /// Append a resize notification.
    #[must_use]
    pub fn resize(mut self, sample: ViewportSample) -> Self {
        self.events.push(SheetEvent::ViewportResize(sample));
        self
    }

    /// Append a change of the caller's close flag.
    #[must_use]
    pub fn close_requested(mut self, requested: bool) -> Self {
        self.events.push(SheetEvent::CloseRequested { requested });
        self
    }

    /// Append a backdrop click.
    #[must_use]
    pub fn backdrop(mut self) -> Self {
        self.events.push(SheetEvent::BackdropClick);
        self
    }

    /// Append the end of the closing transition.
    #[must_use]
    pub fn transition_end(mut self) -> Self {
        self.events.push(SheetEvent::CloseTransitionEnd);
        self
    }

    /// Append an arbitrary event.
    #[must_use]
    pub fn push(mut self, event: SheetEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Events so far.
    pub fn events(&self) -> &[SheetEvent] {
        &self.events
    }

    /// Consume the builder.
    pub fn into_events(self) -> Vec<SheetEvent> {
        self.events
    }
}

/// Parameters for [`touch_storm`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StormConfig {
    /// RNG seed; identical seeds produce identical storms.
    pub seed: u64,
    /// Number of gestures to generate.
    pub gestures: usize,
    /// Height of the touch surface; positions stay in `0..=surface_height`.
    pub surface_height: f64,
    /// Largest number of moves in a single gesture.
    pub max_moves: u32,
    /// Probability (per gesture, in percent) of a viewport resize before it.
    pub resize_percent: u32,
}

impl Default for StormConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            gestures: 50,
            surface_height: 800.0,
            max_moves: 12,
            resize_percent: 10,
        }
    }
}

/// Generate a deterministic stream of gestures. Every gesture is a start,
/// a random walk of moves and an end.
pub fn touch_storm(config: &StormConfig) -> Vec<SheetEvent> {
    let mut rng = Rng::new(config.seed);
    let height = config.surface_height.max(1.0);
    let mut events = Vec::new();

    for _ in 0..config.gestures {
        if rng.below(100) < u64::from(config.resize_percent) {
            // Keyboard-like shrink or restore.
            let visual = height * (0.5 + rng.unit() * 0.5);
            events.push(SheetEvent::ViewportResize(ViewportSample::visual(
                visual.round(),
            )));
        }

        let mut y = (rng.unit() * height).round();
        events.push(SheetEvent::TouchStart { y });
        let moves = rng.below(u64::from(config.max_moves) + 1);
        for _ in 0..moves {
            let step = (rng.unit() - 0.4) * height * 0.2;
            y = (y + step).clamp(0.0, height).round();
            events.push(SheetEvent::TouchMove { y });
        }
        events.push(SheetEvent::TouchEnd);
    }
    events
}

/// xorshift64 generator.
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(if seed == 0 { 1 } else { seed })
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            0
        } else {
            self.next_u64() % bound
        }
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
