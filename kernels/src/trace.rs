//! Injectable trace hook for watching algorithms step by step.

use std::fmt::Debug;

/// Receives intermediate states from the `*_traced` kernel variants.
pub trait Tracer {
    /// Called once per interesting step with a short label and the current state.
    fn step(&mut self, label: &'static str, state: &dyn Debug);
}

/// Discards every step. Used by the untraced entry points.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Tracer for NoTrace {
    #[inline(always)]
    fn step(&mut self, _label: &'static str, _state: &dyn Debug) {}
}

/// Collects rendered steps in memory.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    steps: Vec<(&'static str, String)>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[(&'static str, String)] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps recorded under `label`.
    pub fn count(&self, label: &str) -> usize {
        self.steps.iter().filter(|(l, _)| *l == label).count()
    }
}

impl Tracer for Recorder {
    fn step(&mut self, label: &'static str, state: &dyn Debug) {
        self.steps.push((label, format!("{:?}", state)));
    }
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn step(&mut self, label: &'static str, state: &dyn Debug) {
        (**self).step(label, state);
    }
}
