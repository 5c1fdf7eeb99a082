//! Diagram layouts — normalized percentage coordinates per process.
//!
//! The diagram canvas is 100 wide by [`MAP_HEIGHT`] tall, with y growing
//! downward (screen convention). One point per step index. A layout table
//! shorter than its step table is a content mismatch; lookups degrade to a
//! fallback point instead of failing, because a cosmetic mismatch should
//! never take down the whole page.

use serde::{Deserialize, Serialize};

use crate::content::ProcessId;

/// Height of the normalized diagram canvas (width is always 100).
pub const MAP_HEIGHT: f64 = 60.0;

/// A point on the normalized diagram canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    pub x: f64,
    pub y: f64,
}

impl DiagramPoint {
    /// Placement used when a step has no authored coordinate.
    pub const FALLBACK: DiagramPoint = DiagramPoint { x: 10.0, y: 10.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The ordered point list for one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramLayout {
    pub points: Vec<DiagramPoint>,
}

impl DiagramLayout {
    /// Point for a step index, degrading to [`DiagramPoint::FALLBACK`] when
    /// the table is shorter than the step list.
    pub fn point(&self, index: usize) -> DiagramPoint {
        self.points
            .get(index)
            .copied()
            .unwrap_or(DiagramPoint::FALLBACK)
    }

    /// Tracker point for a step index. Unlike [`DiagramLayout::point`], the
    /// tracker prefers the first authored point over the fixed fallback, so
    /// it stays on the path when the table is short.
    pub fn tracker_point(&self, index: usize) -> DiagramPoint {
        self.points
            .get(index)
            .or_else(|| self.points.first())
            .copied()
            .unwrap_or(DiagramPoint::FALLBACK)
    }

    /// Consecutive point pairs, in path order. Drives both the base path and
    /// the progress stroke.
    pub fn segments(&self) -> impl Iterator<Item = (DiagramPoint, DiagramPoint)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Diagram layouts for both processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSet {
    pub engineering: DiagramLayout,
    pub scientific: DiagramLayout,
}

impl DiagramSet {
    pub fn layout(&self, id: ProcessId) -> &DiagramLayout {
        match id {
            ProcessId::Engineering => &self.engineering,
            ProcessId::Scientific => &self.scientific,
        }
    }
}

impl Default for DiagramSet {
    fn default() -> Self {
        Self {
            engineering: DiagramLayout {
                points: vec![
                    DiagramPoint::new(14.0, 36.0),
                    DiagramPoint::new(30.0, 17.0),
                    DiagramPoint::new(50.0, 20.0),
                    DiagramPoint::new(69.0, 14.0),
                    DiagramPoint::new(84.0, 30.0),
                    DiagramPoint::new(79.0, 49.0),
                    DiagramPoint::new(58.0, 55.0),
                    DiagramPoint::new(34.0, 50.0),
                ],
            },
            scientific: DiagramLayout {
                points: vec![
                    DiagramPoint::new(21.0, 22.0),
                    DiagramPoint::new(39.0, 13.0),
                    DiagramPoint::new(62.0, 15.0),
                    DiagramPoint::new(79.0, 30.0),
                    DiagramPoint::new(74.0, 48.0),
                    DiagramPoint::new(56.0, 55.0),
                    DiagramPoint::new(34.0, 50.0),
                    DiagramPoint::new(19.0, 36.0),
                ],
            },
        }
    }
}
