//! Wall-clock timing of a single strategy invocation.
//!
//! The invocation runs on a worker thread and the caller blocks until it completes, so only one
//! invocation is ever in flight. The timer starts right before the strategy is called and stops
//! right after it returns. Nothing is retried.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::TimingError;
use crate::registry::{SearchStrategy, SortStrategy};
use crate::searches;

/// Outcome of [`time_sort`].
#[derive(Debug, Clone, PartialEq)]
pub struct SortTiming {
    pub name: String,
    pub elapsed: Duration,
}

impl SortTiming {
    pub fn elapsed_ms(&self) -> f64 {
        as_millis_f64(self.elapsed)
    }
}

impl fmt::Display for SortTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} took {} ms.", self.name, self.elapsed_ms())
    }
}

/// Outcome of [`time_search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTiming {
    pub name: String,
    pub elapsed: Duration,
    pub index: Option<usize>,
}

impl SearchTiming {
    pub fn elapsed_ms(&self) -> f64 {
        as_millis_f64(self.elapsed)
    }

    /// Found index, or [`NOT_FOUND`](searches::NOT_FOUND).
    pub fn reported_index(&self) -> isize {
        searches::index_or_not_found(self.index)
    }
}

impl fmt::Display for SearchTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: search completed in {} ms. Result index: {}",
            self.name,
            self.elapsed_ms(),
            self.reported_index()
        )
    }
}

fn as_millis_f64(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1_000.0
}

/// Runs `f` on a worker thread and waits for it.
fn on_worker<R, F>(name: &str, f: F) -> Result<R, TimingError>
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    thread::scope(|scope| scope.spawn(f).join()).map_err(|_| TimingError::WorkerPanicked {
        name: name.to_owned(),
    })
}

/// Times one invocation of `strategy` on `seq`.
pub fn time_sort(strategy: &dyn SortStrategy, seq: &mut [i32]) -> Result<SortTiming, TimingError> {
    let name = strategy.name();

    let elapsed = on_worker(&name, || {
        let start = Instant::now();
        strategy.run(seq);
        start.elapsed()
    })?;

    let timing = SortTiming { name, elapsed };
    debug!(
        strategy = %timing.name,
        len = seq.len(),
        elapsed_ms = timing.elapsed_ms(),
        "sort finished"
    );

    Ok(timing)
}

/// Times one invocation of `strategy` looking for `target` in `seq`.
pub fn time_search(
    strategy: &dyn SearchStrategy,
    seq: &[i32],
    target: i32,
) -> Result<SearchTiming, TimingError> {
    let name = strategy.name();

    let (index, elapsed) = on_worker(&name, || {
        let start = Instant::now();
        let index = strategy.run(seq, target);
        (index, start.elapsed())
    })?;

    let timing = SearchTiming {
        name,
        elapsed,
        index,
    };
    debug!(
        strategy = %timing.name,
        len = seq.len(),
        needle = target,
        index = timing.reported_index(),
        elapsed_ms = timing.elapsed_ms(),
        "search finished"
    );

    Ok(timing)
}
