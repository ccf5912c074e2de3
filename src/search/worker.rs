//! The sequential search loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cancel::CancelToken;
use crate::matcher::TargetPattern;
use crate::wallet::{Candidate, CandidateGenerator, GeneratorError};

/// Terminal state of a worker run.
pub enum WorkerExit {
    /// Found a candidate whose address ends with the target.
    Succeeded(Candidate),
    /// Observed cancellation (external token or coordinator stop) before a
    /// match.
    Cancelled,
    /// Hit a non-retryable generation error.
    Failed(GeneratorError),
}

/// One independent generate-and-test loop; the unit of parallel fan-out.
pub struct SearchWorker<G> {
    id: usize,
    generator: G,
    target: TargetPattern,
    token: CancelToken,
    /// Set only for pooled workers; an inline worker answers to the token
    /// alone.
    stop: Option<Arc<AtomicBool>>,
    trace: bool,
}

impl<G: CandidateGenerator> SearchWorker<G> {
    pub fn new(
        id: usize,
        generator: G,
        target: TargetPattern,
        token: CancelToken,
        trace: bool,
    ) -> Self {
        Self {
            id,
            generator,
            target,
            token,
            stop: None,
            trace,
        }
    }

    /// Attaches the coordinator's stop flag, honored alongside the token.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Runs the loop until a match, cancellation, or a fatal error.
    ///
    /// Cancellation is checked once per iteration, before generating, so a
    /// generation already in flight finishes first and a pre-triggered token
    /// means no candidate is generated at all. Transient generation failures
    /// are logged and retried with no cap.
    pub fn run(mut self) -> WorkerExit {
        loop {
            let stopped = self
                .stop
                .as_ref()
                .map_or(false, |stop| stop.load(Ordering::Relaxed));
            if stopped || self.token.is_cancelled() {
                return WorkerExit::Cancelled;
            }

            let candidate = match self.generator.generate() {
                Ok(candidate) => candidate,
                Err(e) if e.is_transient() => {
                    eprintln!("worker {}: error generating wallet, retrying: {}", self.id, e);
                    continue;
                }
                Err(e) => return WorkerExit::Failed(e),
            };

            if self.trace {
                println!("Trying address: {}", candidate.address);
            }

            if self.target.matches(&candidate.address) {
                return WorkerExit::Succeeded(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::search::testing::{ScriptedGenerator, Step};

    fn worker(generator: ScriptedGenerator, target: &str, token: CancelToken) -> SearchWorker<ScriptedGenerator> {
        SearchWorker::new(0, generator, TargetPattern::new(target).unwrap(), token, false)
    }

    #[test]
    fn test_succeeds_on_matching_address() {
        let generator = ScriptedGenerator::new(vec![
            Step::Address("EQnothing"),
            Step::Address("EQxyzABC"),
        ]);
        match worker(generator, "ABC", CancelToken::new()).run() {
            WorkerExit::Succeeded(candidate) => assert_eq!(candidate.address, "EQxyzABC"),
            _ => panic!("expected success"),
        }
    }

    #[test]
    fn test_pre_triggered_token_generates_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator =
            ScriptedGenerator::with_counter(vec![Step::Address("EQxyzABC")], calls.clone());
        let token = CancelToken::new();
        token.cancel();

        assert!(matches!(
            worker(generator, "ABC", token).run(),
            WorkerExit::Cancelled
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_transient_error_is_retried() {
        let generator = ScriptedGenerator::new(vec![
            Step::TransientError,
            Step::TransientError,
            Step::Address("EQxyzABC"),
        ]);
        match worker(generator, "ABC", CancelToken::new()).run() {
            WorkerExit::Succeeded(candidate) => assert_eq!(candidate.address, "EQxyzABC"),
            _ => panic!("expected success after retries"),
        }
    }

    #[test]
    fn test_fatal_error_ends_the_worker() {
        let generator = ScriptedGenerator::new(vec![Step::FatalError]);
        assert!(matches!(
            worker(generator, "ABC", CancelToken::new()).run(),
            WorkerExit::Failed(GeneratorError::Derivation(_))
        ));
    }

    #[test]
    fn test_coordinator_stop_flag_cancels() {
        let generator = ScriptedGenerator::new(vec![Step::Address("EQnothing")]);
        let worker = SearchWorker::new(
            1,
            generator,
            TargetPattern::new("ABC").unwrap(),
            CancelToken::new(),
            false,
        )
        .with_stop_flag(Arc::new(AtomicBool::new(true)));
        assert!(matches!(worker.run(), WorkerExit::Cancelled));
    }
}
