//! Independent runs evolved side by side on a worker pool.
//!
//! Each job gets its own engine, created, stepped and dropped on a single
//! worker. Engines are never shared between threads; only the rendered
//! histories travel back to the caller.

use rayon::prelude::*;

use super::rule::Rule;
use crate::error::AutomatonError;
use crate::state::State;

/// Upper bound on the cells a single rendered history may hold.
pub const MAX_HISTORY_CELLS: usize = 1 << 26;

/// Number of lines a job's history holds, if it fits under
/// `MAX_HISTORY_CELLS`.
fn history_lines(job: &BatchJob) -> Option<usize> {
    let lines = usize::try_from(job.generations).ok()?.checked_add(1)?;
    let cells = lines.checked_mul(job.width)?;
    (cells <= MAX_HISTORY_CELLS).then_some(lines)
}

/// One run to evolve: a fresh seed row of `width` cells stepped
/// `generations` times under `rule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchJob {
    pub width: usize,
    pub generations: u64,
    pub rule: Rule,
}

/// Rendered history of one job: the seed line followed by one line per
/// generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub job: BatchJob,
    pub lines: Vec<String>,
    pub final_live_count: usize,
}

/// Run a single job on the calling thread.
///
/// Fails with `HistoryTooLarge` when the full history would exceed
/// `MAX_HISTORY_CELLS`.
pub fn run_job(job: BatchJob) -> Result<BatchOutcome, AutomatonError> {
    let mut state = State::new(job.width)?;
    let line_count = history_lines(&job).ok_or(AutomatonError::HistoryTooLarge {
        width: job.width,
        generations: job.generations,
    })?;
    let mut lines = Vec::with_capacity(line_count);
    lines.push(state.render());

    for _ in 0..job.generations {
        state.step(job.rule);
        lines.push(state.render());
    }

    Ok(BatchOutcome {
        job,
        lines,
        final_live_count: state.live_count(),
    })
}

fn build_pool(num_threads: u8) -> Result<rayon::ThreadPool, AutomatonError> {
    let num_threads = if num_threads == 0 {
        1
    } else {
        num_threads as usize
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .or_else(|_| rayon::ThreadPoolBuilder::new().num_threads(1).build())
        .map_err(|e| AutomatonError::ThreadPool(e.to_string()))
}

/// Evolve every job on a pool of `num_threads` workers.
///
/// Outcomes come back in job order. A job that cannot be constructed fails
/// the whole batch. `num_threads == 0` runs on a single worker.
pub fn run_batch(
    jobs: &[BatchJob],
    num_threads: u8,
) -> Result<Vec<BatchOutcome>, AutomatonError> {
    let pool = build_pool(num_threads)?;
    pool.install(|| jobs.par_iter().map(|&job| run_job(job)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(width: usize, generations: u64, rule: Rule) -> BatchJob {
        BatchJob {
            width,
            generations,
            rule,
        }
    }

    #[test]
    fn test_run_job_history() {
        let outcome = run_job(job(5, 1, Rule::Rule184)).unwrap();
        assert_eq!(outcome.lines, vec!["  *  ".to_string(), " *** ".to_string()]);
        assert_eq!(outcome.final_live_count, 3);
    }

    #[test]
    fn test_run_job_zero_generations() {
        let outcome = run_job(job(3, 0, Rule::Rule2Neighbor)).unwrap();
        assert_eq!(outcome.lines, vec![" * ".to_string()]);
        assert_eq!(outcome.final_live_count, 1);
    }

    #[test]
    fn test_run_job_rejects_oversized_history() {
        let err = run_job(job(3, u64::MAX, Rule::Rule184)).unwrap_err();
        assert_eq!(
            err,
            AutomatonError::HistoryTooLarge {
                width: 3,
                generations: u64::MAX
            }
        );

        // Just past the cell budget
        let generations = (MAX_HISTORY_CELLS / 4) as u64;
        assert!(matches!(
            run_job(job(4, generations, Rule::Rule184)),
            Err(AutomatonError::HistoryTooLarge { .. })
        ));
    }

    #[test]
    fn test_run_job_zero_width_reported_first() {
        assert_eq!(
            run_job(job(0, u64::MAX, Rule::Rule184)),
            Err(AutomatonError::ZeroWidth)
        );
    }

    #[test]
    fn test_run_batch_oversized_job_fails_batch() {
        let jobs = [job(5, 2, Rule::Rule184), job(6, u64::MAX, Rule::Rule2Neighbor)];
        assert!(matches!(
            run_batch(&jobs, 2),
            Err(AutomatonError::HistoryTooLarge { width: 6, .. })
        ));
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let jobs = vec![
            job(9, 4, Rule::Rule184),
            job(5, 2, Rule::Rule2Neighbor),
            job(1, 3, Rule::Rule184),
            job(32, 10, Rule::Rule184),
        ];

        let outcomes = run_batch(&jobs, 4).unwrap();
        assert_eq!(outcomes.len(), jobs.len());
        for (outcome, expected_job) in outcomes.iter().zip(&jobs) {
            assert_eq!(outcome.job, *expected_job);
            assert_eq!(outcome.lines.len(), expected_job.generations as usize + 1);
            assert!(outcome.lines.iter().all(|l| l.len() == expected_job.width));
        }
    }

    #[test]
    fn test_run_batch_matches_sequential() {
        let jobs: Vec<BatchJob> = (1..12)
            .flat_map(|w| Rule::ALL.into_iter().map(move |r| job(w, 6, r)))
            .collect();

        let parallel = run_batch(&jobs, 3).unwrap();
        let sequential: Vec<BatchOutcome> =
            jobs.iter().map(|&j| run_job(j).unwrap()).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_run_batch_zero_threads_uses_one_worker() {
        let outcomes = run_batch(&[job(7, 3, Rule::Rule184)], 0).unwrap();
        assert_eq!(outcomes.len(), 1);
    }

    #[test]
    fn test_run_batch_rejects_zero_width() {
        let jobs = [job(5, 1, Rule::Rule184), job(0, 1, Rule::Rule184)];
        assert_eq!(run_batch(&jobs, 2), Err(AutomatonError::ZeroWidth));
    }

    #[test]
    fn test_run_batch_empty() {
        assert_eq!(run_batch(&[], 2), Ok(Vec::new()));
    }
}
