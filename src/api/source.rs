//! Position sample streams feeding a survey

use std::collections::VecDeque;

use crate::core::GeographicPoint;

/// Cancellable stream of position samples (GPS watch, replayed track, ...)
pub trait PositionSource {
    /// Next available sample.
    /// Returns `None` when the stream is exhausted or cancelled.
    fn next_sample(&mut self) -> Option<GeographicPoint>;

    /// Stop delivering samples
    fn cancel(&mut self);

    fn is_cancelled(&self) -> bool;
}

/// Replays a recorded track, for tests and for re-analysis of stored walks
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    queue: VecDeque<GeographicPoint>,
    cancelled: bool,
}

impl ReplaySource {
    pub fn new(samples: Vec<GeographicPoint>) -> Self {
        Self {
            queue: samples.into(),
            cancelled: false,
        }
    }

    pub fn push(&mut self, sample: GeographicPoint) {
        self.queue.push_back(sample);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl PositionSource for ReplaySource {
    fn next_sample(&mut self) -> Option<GeographicPoint> {
        if self.cancelled {
            return None;
        }
        self.queue.pop_front()
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
