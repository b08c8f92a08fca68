//! Replay event and sink types.

use crate::tour::Cell;

/// A polyline vertex on the unit grid: the center of a cell, so cell
/// (0,0) maps to (0.5, 0.5). Renderers multiply by their cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackPoint {
    pub x: f64,
    pub y: f64,
}

impl TrackPoint {
    /// The center of `cell` on the unit grid.
    pub fn center_of(cell: Cell) -> Self {
        Self {
            x: cell.x as f64 + 0.5,
            y: cell.y as f64 + 0.5,
        }
    }
}

/// One replayed step of a tour path.
///
/// `wide_track` and `narrow_track` hold the same cumulative vertices;
/// consumers draw them as two overlapping strokes of different width
/// and opacity for a layered line effect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepEvent {
    /// The cell reached by this step.
    pub cell: Cell,

    /// 1-based visit order of the cell within the path.
    pub order: usize,

    /// Cumulative polyline through this step, background stroke.
    pub wide_track: Vec<TrackPoint>,

    /// Cumulative polyline through this step, foreground stroke.
    pub narrow_track: Vec<TrackPoint>,
}

/// How a replay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReplayStatus {
    /// Every path cell was emitted.
    Completed,
    /// The cancel flag fired; emission stopped at a step boundary.
    /// Events already delivered remain valid.
    Cancelled,
}

/// Receives replayed steps.
///
/// Implemented for any `FnMut(StepEvent)` closure, so a collecting
/// sink is just `|event| events.push(event)`.
pub trait StepSink {
    fn on_step(&mut self, event: StepEvent);
}

impl<F: FnMut(StepEvent)> StepSink for F {
    fn on_step(&mut self, event: StepEvent) {
        self(event)
    }
}
