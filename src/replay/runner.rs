//! Replay execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use super::config::ReplayConfig;
use super::types::{ReplayStatus, StepEvent, StepSink, TrackPoint};
use crate::tour::Cell;

/// Result of a replay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayReport {
    /// Whether the replay completed or was cancelled.
    pub status: ReplayStatus,

    /// Number of events delivered to the sink. Equals the path length
    /// on completion, strictly fewer on cancellation.
    pub steps_emitted: usize,
}

/// Replays a computed path one step at a time.
pub struct ReplayRunner;

impl ReplayRunner {
    /// Replays `path` to `sink` without a cancel flag.
    pub fn run<S: StepSink>(path: &[Cell], config: &ReplayConfig, sink: &mut S) -> ReplayReport {
        Self::run_with_cancel(path, config, sink, None)
    }

    /// Replays `path` to `sink`, pausing `step_delay` between events.
    ///
    /// The cancel flag is checked on entry and at every step boundary;
    /// cancellation is cooperative, so an in-progress pause always
    /// finishes before the flag is observed. Partially emitted events
    /// stay valid. A cancelled replay cannot be resumed: start a fresh
    /// run from the whole path instead.
    pub fn run_with_cancel<S: StepSink>(
        path: &[Cell],
        config: &ReplayConfig,
        sink: &mut S,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ReplayReport {
        let mut track: Vec<TrackPoint> = Vec::with_capacity(path.len());

        for (i, &cell) in path.iter().enumerate() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return ReplayReport {
                        status: ReplayStatus::Cancelled,
                        steps_emitted: i,
                    };
                }
            }

            track.push(TrackPoint::center_of(cell));
            sink.on_step(StepEvent {
                cell,
                order: i + 1,
                wide_track: track.clone(),
                narrow_track: track.clone(),
            });

            if i + 1 < path.len() && !config.step_delay.is_zero() {
                thread::sleep(config.step_delay);
            }
        }

        ReplayReport {
            status: ReplayStatus::Completed,
            steps_emitted: path.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{TourConfig, TourRunner};
    use std::time::Duration;

    fn short_path() -> Vec<Cell> {
        vec![Cell::new(0, 0), Cell::new(2, 1), Cell::new(4, 2)]
    }

    fn instant() -> ReplayConfig {
        ReplayConfig::default().with_step_delay(Duration::ZERO)
    }

    #[test]
    fn test_replay_emits_all_steps_in_order() {
        let path = short_path();
        let mut events = Vec::new();

        let report = ReplayRunner::run(&path, &instant(), &mut |e: StepEvent| events.push(e));

        assert_eq!(report.status, ReplayStatus::Completed);
        assert_eq!(report.steps_emitted, path.len());
        assert_eq!(events.len(), path.len());
        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.cell, path[i]);
            assert_eq!(event.order, i + 1);
            assert_eq!(event.wide_track.len(), i + 1);
        }
    }

    #[test]
    fn test_tracks_are_identical_and_cumulative() {
        let path = short_path();
        let mut events = Vec::new();

        ReplayRunner::run(&path, &instant(), &mut |e: StepEvent| events.push(e));

        let last = events.last().unwrap();
        assert_eq!(last.wide_track, last.narrow_track);
        assert_eq!(last.wide_track[0], TrackPoint { x: 0.5, y: 0.5 });
        assert_eq!(last.wide_track[2], TrackPoint { x: 4.5, y: 2.5 });
        // Earlier events carry prefixes of the final track.
        assert_eq!(events[0].wide_track, last.wide_track[..1]);
        assert_eq!(events[1].wide_track, last.wide_track[..2]);
    }

    #[test]
    fn test_replay_cancelled_before_start() {
        // Set the flag before running so cancellation is deterministic.
        let cancel = Arc::new(AtomicBool::new(true));
        let mut events = Vec::new();

        let report = ReplayRunner::run_with_cancel(
            &short_path(),
            &instant(),
            &mut |e: StepEvent| events.push(e),
            Some(cancel),
        );

        assert_eq!(report.status, ReplayStatus::Cancelled);
        assert_eq!(report.steps_emitted, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_replay_cancelled_mid_stream() {
        let path = short_path();
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let mut count = 0usize;

        let report = ReplayRunner::run_with_cancel(
            &path,
            &instant(),
            &mut |e: StepEvent| {
                count += 1;
                if e.order == 2 {
                    flag.store(true, Ordering::Relaxed);
                }
            },
            Some(cancel),
        );

        // The flag set during step 2 is observed at the next boundary.
        assert_eq!(report.status, ReplayStatus::Cancelled);
        assert_eq!(report.steps_emitted, 2);
        assert_eq!(count, 2);
        assert!(report.steps_emitted < path.len());
    }

    #[test]
    fn test_replay_full_tour() {
        let solution = TourRunner::run(&TourConfig::default());
        let mut orders = Vec::new();

        let report = ReplayRunner::run(&solution.path, &instant(), &mut |e: StepEvent| {
            orders.push(e.order)
        });

        assert_eq!(report.steps_emitted, 64);
        assert_eq!(orders, (1..=64).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_path_completes() {
        let mut events = Vec::new();
        let report = ReplayRunner::run(&[], &instant(), &mut |e: StepEvent| events.push(e));
        assert_eq!(report.status, ReplayStatus::Completed);
        assert_eq!(report.steps_emitted, 0);
    }
}
