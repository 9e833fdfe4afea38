//! Press and hold tracking for vertex input
//!
//! A press that is released before the hold threshold is a short press. A
//! press held past the threshold fires a long press once, and its eventual
//! release is swallowed.

/// What a release amounts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Released before the hold threshold
    Short(usize),
    /// Nothing was held, or the hold already fired as a long press
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Held {
    vertex: usize,
    elapsed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PressTracker {
    threshold: f32,
    held: Option<Held>,
}

impl PressTracker {
    pub fn new(threshold: f32) -> Self {
        Self { threshold: threshold.max(0.0), held: None }
    }

    /// Begin holding a vertex. Returns false if a press is already held.
    pub fn press(&mut self, vertex: usize) -> bool {
        if self.held.is_some() {
            return false;
        }
        self.held = Some(Held { vertex, elapsed: 0.0 });
        true
    }

    pub fn release(&mut self, vertex: usize) -> Release {
        match self.held.take() {
            Some(_) => Release::Short(vertex),
            None => Release::Ignored,
        }
    }

    /// Advance the hold timer. Returns the held vertex the first time the
    /// hold reaches the threshold.
    pub fn advance(&mut self, dt: f32) -> Option<usize> {
        let held = self.held.as_mut()?;
        held.elapsed += dt.max(0.0);
        if held.elapsed >= self.threshold {
            let vertex = held.vertex;
            self.held = None;
            return Some(vertex);
        }
        None
    }

    /// Drop any hold without firing
    pub fn cancel(&mut self) {
        self.held = None;
    }

    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    pub fn held_vertex(&self) -> Option<usize> {
        self.held.map(|h| h.vertex)
    }
}
