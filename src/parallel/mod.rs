//! Data-parallel map over a bounded worker pool
//!
//! Work items are drained by a dedicated rayon pool and each result lands in
//! the slot of its input index, so output order always matches input order.
//! Failures follow a [`FailurePolicy`]: either the batch fails with the
//! lowest-index error, or the failed slot is left empty and logged.

use std::error::Error as StdError;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync>;

/// What to do when a work item fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail the whole batch
    #[default]
    Propagate,
    /// Log the failure and leave an empty slot
    Skip,
}

/// Errors raised by the executor
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("could not start the worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("work item {index} failed")]
    Worker {
        index: usize,
        #[source]
        source: BoxError,
    },
}

#[derive(Debug, Error)]
#[error("worker panicked: {0}")]
struct WorkerPanic(String);

/// Bounded pool running ordered parallel maps
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: rayon::ThreadPool,
    policy: FailurePolicy,
    progress: bool,
}

impl ParallelExecutor {
    /// Create an executor with `concurrency` workers (0 = one per core)
    ///
    /// # Errors
    ///
    /// Returns `ExecutorError::Pool` if the threads cannot be spawned.
    pub fn new(concurrency: usize, policy: FailurePolicy) -> Result<Self, ExecutorError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(concurrency)
            .thread_name(|i| format!("wordle-worker-{i}"))
            .build()?;
        Ok(Self {
            pool,
            policy,
            progress: false,
        })
    }

    /// Show a progress bar on stderr for every batch
    #[must_use]
    pub const fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub const fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Number of worker threads
    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Apply an infallible function to every item, in parallel
    ///
    /// # Examples
    /// ```
    /// use wordle_entropy::parallel::{FailurePolicy, ParallelExecutor};
    ///
    /// let executor = ParallelExecutor::new(2, FailurePolicy::Propagate).unwrap();
    /// let squares = executor.map("squares", &[1, 2, 3, 4], |x| x * x);
    /// assert_eq!(squares, vec![1, 4, 9, 16]);
    /// ```
    pub fn map<T, R, F>(&self, label: &str, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        let bar = self.progress_bar(label, items.len());
        let start = Instant::now();

        let results = self.pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = f(item);
                    bar.inc(1);
                    result
                })
                .collect()
        });

        bar.finish_and_clear();
        self.log_elapsed(label, items.len(), start);
        results
    }

    /// Apply a fallible function to every item, in parallel
    ///
    /// Panics inside `f` are caught and treated as failures of that item. With
    /// [`FailurePolicy::Propagate`] the error of the lowest failing index is
    /// returned; with [`FailurePolicy::Skip`] failed slots are `None`.
    ///
    /// # Errors
    ///
    /// Returns `ExecutorError::Worker` under the propagate policy.
    pub fn try_map<T, R, E, F>(
        &self,
        label: &str,
        items: &[T],
        f: F,
    ) -> Result<Vec<Option<R>>, ExecutorError>
    where
        T: Sync,
        R: Send,
        E: Into<BoxError>,
        F: Fn(&T) -> Result<R, E> + Sync,
    {
        let bar = self.progress_bar(label, items.len());
        let start = Instant::now();

        let outcomes: Vec<Result<R, BoxError>> = self.pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let outcome = match catch_unwind(AssertUnwindSafe(|| f(item))) {
                        Ok(result) => result.map_err(Into::into),
                        Err(payload) => {
                            Err(Box::new(WorkerPanic(panic_message(&*payload))) as BoxError)
                        }
                    };
                    bar.inc(1);
                    outcome
                })
                .collect()
        });

        bar.finish_and_clear();
        self.log_elapsed(label, items.len(), start);

        let mut results = Vec::with_capacity(outcomes.len());
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(value) => results.push(Some(value)),
                Err(source) => match self.policy {
                    FailurePolicy::Propagate => {
                        return Err(ExecutorError::Worker { index, source });
                    }
                    FailurePolicy::Skip => {
                        error!("{label}: item {index} failed: {source}");
                        results.push(None);
                    }
                },
            }
        }
        Ok(results)
    }

    // Batches started from inside a worker stay quiet
    fn reports(&self) -> bool {
        self.progress && self.pool.current_thread_index().is_none()
    }

    fn progress_bar(&self, label: &str, len: usize) -> ProgressBar {
        if !self.reports() {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar.set_message(label.to_string());
        bar
    }

    fn log_elapsed(&self, label: &str, len: usize, start: Instant) {
        if self.reports() {
            info!(
                "{label}: {len} items in {:.2}s",
                start.elapsed().as_secs_f64()
            );
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("odd input {0}")]
    struct OddInput(u32);

    fn halve(x: &u32) -> Result<u32, OddInput> {
        if x % 2 == 0 { Ok(x / 2) } else { Err(OddInput(*x)) }
    }

    #[test]
    fn map_preserves_order() {
        let executor = ParallelExecutor::new(4, FailurePolicy::Propagate).unwrap();
        let items: Vec<u64> = (0..1000).collect();
        let doubled = executor.map("double", &items, |x| x * 2);
        assert_eq!(doubled, items.iter().map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn map_empty_batch() {
        let executor = ParallelExecutor::new(2, FailurePolicy::Propagate).unwrap();
        let items: Vec<u32> = Vec::new();
        assert!(executor.map("empty", &items, |x| *x).is_empty());
    }

    #[test]
    fn concurrency_is_bounded() {
        let executor = ParallelExecutor::new(3, FailurePolicy::Skip).unwrap();
        assert_eq!(executor.concurrency(), 3);
    }

    #[test]
    fn try_map_all_ok() {
        let executor = ParallelExecutor::new(2, FailurePolicy::Propagate).unwrap();
        let results = executor.try_map("halve", &[2, 4, 6], halve).unwrap();
        assert_eq!(results, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn propagate_reports_lowest_failing_index() {
        let executor = ParallelExecutor::new(4, FailurePolicy::Propagate).unwrap();
        let err = executor
            .try_map("halve", &[2, 4, 5, 6, 7], halve)
            .unwrap_err();
        match err {
            ExecutorError::Worker { index, source } => {
                assert_eq!(index, 2);
                assert_eq!(source.to_string(), "odd input 5");
            }
            ExecutorError::Pool(_) => panic!("unexpected pool error"),
        }
    }

    #[test]
    fn skip_leaves_empty_slots() {
        let executor = ParallelExecutor::new(4, FailurePolicy::Skip).unwrap();
        assert_eq!(executor.policy(), FailurePolicy::Skip);
        let results = executor.try_map("halve", &[2, 3, 4, 5], halve).unwrap();
        assert_eq!(results, vec![Some(1), None, Some(2), None]);
    }

    #[test]
    fn panics_become_failures() {
        let executor = ParallelExecutor::new(2, FailurePolicy::Skip).unwrap();
        let results = executor
            .try_map("boom", &[1u32, 2, 3], |&x| {
                assert!(x != 2, "two is not allowed");
                Ok::<_, OddInput>(x)
            })
            .unwrap();
        assert_eq!(results, vec![Some(1), None, Some(3)]);
    }
}
