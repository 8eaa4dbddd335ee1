// Touch snapshot state machine: Idle <-> Touching(count).
use crate::geometry::{Point, distance, midpoint};

/// Baseline recorded on the previous event. Only the first two contacts are
/// kept; with more fingers down only the count matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchSnapshot {
    Single(Point),
    Pinch { center: Point, distance: f64 },
    Crowd(usize),
}

impl TouchSnapshot {
    pub fn count(&self) -> usize {
        match self {
            TouchSnapshot::Single(_) => 1,
            TouchSnapshot::Pinch { .. } => 2,
            TouchSnapshot::Crowd(n) => *n,
        }
    }
}

/// Delta produced by one move sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Pan(Point),
    Zoom { factor: f64, center: Point, drift: Point },
}

#[derive(Debug, Default, Clone)]
pub struct TouchTracker {
    snapshot: Option<TouchSnapshot>,
    // added to pinch midpoints to move them from client into surface space
    offset: Point,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_touching(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&TouchSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Rebuilds the baseline from `points`. An empty list leaves the tracker idle.
    pub fn start(&mut self, points: &[Point]) {
        self.snapshot = match points {
            [] => None,
            [p] => Some(TouchSnapshot::Single(*p)),
            [a, b] => Some(TouchSnapshot::Pinch {
                center: midpoint(*a, *b, self.offset),
                distance: distance(*a, *b),
            }),
            more => Some(TouchSnapshot::Crowd(more.len())),
        };
    }

    /// Delta since the previous sample, then re-baselines on `points` so the
    /// next move is relative to this one.
    pub fn move_to(&mut self, points: &[Point]) -> Option<Gesture> {
        let snapshot = self.snapshot?;
        let gesture = match (snapshot, points) {
            (TouchSnapshot::Single(last), [now, ..]) => Some(Gesture::Pan(now.delta_from(last))),
            (
                TouchSnapshot::Pinch {
                    center: last_center,
                    distance: last_distance,
                },
                [a, b, ..],
            ) => {
                let center = midpoint(*a, *b, self.offset);
                // coincident fingers give no usable ratio; keep the drift only
                let factor = if last_distance > f64::EPSILON {
                    distance(*a, *b) / last_distance
                } else {
                    1.0
                };
                Some(Gesture::Zoom {
                    factor,
                    center,
                    drift: center.delta_from(last_center),
                })
            }
            _ => None,
        };
        if !points.is_empty() {
            self.start(points);
        }
        gesture
    }

    /// Lifting fingers: idle when none remain, otherwise continue from the
    /// survivors. An idle tracker stays idle; only `start` begins a gesture.
    pub fn end(&mut self, remaining: &[Point]) {
        if self.snapshot.is_none() {
            return;
        }
        self.start(remaining);
    }
}
