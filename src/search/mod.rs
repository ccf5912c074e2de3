//! Parallel wallet search.
//!
//! This module provides:
//! - `worker`: the sequential generate-and-test loop
//! - `coordinator`: racing workers and returning the first success

mod coordinator;
mod worker;

pub use coordinator::{FoundWallet, SearchError, WalletFinder};
pub use worker::{SearchWorker, WorkerExit};

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::wallet::{Candidate, CandidateGenerator, GeneratorError, Keypair};

    /// One scripted generator outcome.
    #[derive(Clone, Copy)]
    pub enum Step {
        Address(&'static str),
        TransientError,
        FatalError,
    }

    /// Deterministic generator for driving workers in tests.
    ///
    /// Steps are consumed in order; the last step repeats forever once the
    /// script is exhausted.
    pub struct ScriptedGenerator {
        steps: Vec<Step>,
        next: usize,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedGenerator {
        pub fn new(steps: Vec<Step>) -> Self {
            Self::with_counter(steps, Arc::new(AtomicUsize::new(0)))
        }

        pub fn with_counter(steps: Vec<Step>, calls: Arc<AtomicUsize>) -> Self {
            assert!(!steps.is_empty(), "script cannot be empty");
            Self {
                steps,
                next: 0,
                calls,
            }
        }

        /// Shared counter of `generate` calls.
        pub fn calls(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }
    }

    impl CandidateGenerator for ScriptedGenerator {
        fn generate(&mut self) -> Result<Candidate, GeneratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let step = self.steps[self.next.min(self.steps.len() - 1)];
            self.next += 1;
            match step {
                Step::Address(address) => Ok(candidate(address)),
                Step::TransientError => Err(GeneratorError::Entropy("scripted".into())),
                Step::FatalError => Err(GeneratorError::Derivation("scripted".into())),
            }
        }
    }

    /// A candidate with fixed key material and the given address.
    pub fn candidate(address: &str) -> Candidate {
        Candidate {
            keypair: Keypair::from_parts([0xab; 32], [0xcd; 64]),
            words: vec!["test".to_string(); 24],
            address: address.to_string(),
        }
    }
}
