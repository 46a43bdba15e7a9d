//! Bounded parallel execution
//!
//! Runs one job per item with at most `max_parallel` jobs in flight.
//! Results come back in input order regardless of completion order.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

/// Run `job` over `items` using at most `max_parallel` worker threads.
///
/// A job's failure is just another result; the batch never stops early.
/// `max_parallel` of 0 is treated as 1.
pub fn run_bounded<T, R, F>(items: Vec<T>, max_parallel: usize, job: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    let threads = max_parallel.max(1).min(items.len().max(1));
    if threads == 1 {
        return items.into_iter().map(job).collect();
    }

    match ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => {
            debug!(threads, jobs = items.len(), "Running batch");
            pool.install(|| items.into_par_iter().map(job).collect())
        }
        Err(e) => {
            warn!(error = %e, "Could not start worker pool, running sequentially");
            items.into_iter().map(job).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn preserves_input_order() {
        let out = run_bounded((0..50).collect(), 8, |n: u32| {
            std::thread::sleep(Duration::from_millis(u64::from(50 - n) % 5));
            n * 2
        });
        assert_eq!(out, (0..50).map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn never_exceeds_limit() {
        let running = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);

        run_bounded((0..24).collect::<Vec<u32>>(), 3, |_| {
            let now = running.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(10));
            running.fetch_sub(1, Ordering::SeqCst);
        });

        assert!(peak.load(Ordering::SeqCst) <= 3);
        assert!(peak.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let out: Vec<Result<u32, String>> = run_bounded(vec![1, 2, 3, 4], 2, |n| {
            if n % 2 == 0 {
                Err(format!("job {n} failed"))
            } else {
                Ok(n)
            }
        });

        assert_eq!(
            out,
            vec![
                Ok(1),
                Err("job 2 failed".to_string()),
                Ok(3),
                Err("job 4 failed".to_string())
            ]
        );
    }

    #[test]
    fn zero_limit_runs_sequentially() {
        let out = run_bounded(vec!["a", "b"], 0, str::to_uppercase);
        assert_eq!(out, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn empty_input() {
        let out: Vec<u8> = run_bounded(Vec::<u8>::new(), 4, |n| n);
        assert!(out.is_empty());
    }
}
