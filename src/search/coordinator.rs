//! Racing workers and delivering the first success.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError};

use super::worker::{SearchWorker, WorkerExit};
use crate::cancel::CancelToken;
use crate::config::SearchConfig;
use crate::wallet::{Candidate, CandidateGenerator, GeneratorError, WalletGenerator};

/// How often the coordinator re-checks the cancellation token while waiting
/// for worker events.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The winning wallet, with every field encoded for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWallet {
    /// Lowercase hex public key (64 characters).
    pub public_key: String,
    /// Lowercase hex secret key (128 characters).
    pub private_key: String,
    /// The 24-word seed phrase.
    pub words: Vec<String>,
    /// The matching wallet address.
    pub address: String,
}

impl FoundWallet {
    fn from_candidate(candidate: Candidate) -> Self {
        Self {
            public_key: candidate.keypair.public_key_hex(),
            private_key: candidate.keypair.secret_key_hex(),
            words: candidate.words,
            address: candidate.address,
        }
    }

    /// The seed phrase as a single space-separated string.
    pub fn words_joined(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Cancellation was observed before any worker produced a match.
    #[error("wallet search aborted: {reason}")]
    Aborted { reason: String },

    /// The worker pool could not be started.
    #[error("failed to start worker thread")]
    Spawn {
        #[source]
        source: io::Error,
    },

    /// Every worker exited with a fatal error before finding a match.
    #[error("all workers failed")]
    AllWorkersFailed {
        #[source]
        source: GeneratorError,
    },

    /// Workers disappeared without reporting a terminal state.
    #[error("worker pool shut down without reporting a result")]
    PoolShutdown,
}

/// Owns the worker lifecycle: start, race, tear down.
///
/// At most one [`FoundWallet`] is produced per [`find`](WalletFinder::find)
/// call; the first worker to report success wins and the rest are cancelled
/// and joined before the call returns, on every exit path.
pub struct WalletFinder {
    config: SearchConfig,
}

impl WalletFinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search until a match, cancellation, or failure.
    pub fn find(&self, token: &CancelToken) -> Result<FoundWallet, SearchError> {
        let version = self.config.version;
        self.find_with(token, move |_id| WalletGenerator::new(version))
    }

    /// Like [`find`](Self::find), but with a caller-supplied generator per
    /// worker.
    pub fn find_with<G, F>(
        &self,
        token: &CancelToken,
        mut factory: F,
    ) -> Result<FoundWallet, SearchError>
    where
        G: CandidateGenerator + 'static,
        F: FnMut(usize) -> G,
    {
        // A token triggered before the run aborts without a single generation.
        if token.is_cancelled() {
            return Err(SearchError::Aborted {
                reason: token.reason(),
            });
        }

        let workers = self.config.worker_count();
        if workers == 1 {
            self.find_single(token, factory(0))
        } else {
            self.find_parallel(token, workers, factory)
        }
    }

    /// The common case: one worker, run inline on the caller's thread.
    fn find_single<G: CandidateGenerator>(
        &self,
        token: &CancelToken,
        generator: G,
    ) -> Result<FoundWallet, SearchError> {
        // No pool, so only the external token can interrupt the loop.
        let worker = SearchWorker::new(
            0,
            generator,
            self.config.target.clone(),
            token.clone(),
            self.config.trace,
        );

        match worker.run() {
            WorkerExit::Succeeded(candidate) => Ok(FoundWallet::from_candidate(candidate)),
            WorkerExit::Cancelled => Err(SearchError::Aborted {
                reason: token.reason(),
            }),
            WorkerExit::Failed(e) => Err(SearchError::AllWorkersFailed { source: e }),
        }
    }

    fn find_parallel<G, F>(
        &self,
        token: &CancelToken,
        workers: usize,
        mut factory: F,
    ) -> Result<FoundWallet, SearchError>
    where
        G: CandidateGenerator + 'static,
        F: FnMut(usize) -> G,
    {
        // Each worker sends exactly one terminal event; capacity `workers`
        // guarantees a laggard's send never blocks after the race is decided.
        let (event_tx, event_rx) = bounded::<WorkerExit>(workers);
        let stop = Arc::new(AtomicBool::new(false));
        let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(workers);

        for id in 0..workers {
            let worker = SearchWorker::new(
                id,
                factory(id),
                self.config.target.clone(),
                token.clone(),
                self.config.trace,
            )
            .with_stop_flag(stop.clone());
            let event_tx = event_tx.clone();

            let spawned = thread::Builder::new()
                .name(format!("vanity-worker-{}", id))
                .spawn(move || {
                    let _ = event_tx.send(worker.run());
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    shut_down(&stop, handles);
                    return Err(SearchError::Spawn { source: e });
                }
            }
        }
        drop(event_tx);

        let mut exited = 0usize;
        let mut first_failure: Option<GeneratorError> = None;

        let outcome = loop {
            match event_rx.recv_timeout(CANCEL_POLL_INTERVAL) {
                Ok(WorkerExit::Succeeded(candidate)) => {
                    break Ok(FoundWallet::from_candidate(candidate));
                }
                Ok(WorkerExit::Failed(e)) => {
                    eprintln!("worker failed: {}", e);
                    if first_failure.is_none() {
                        first_failure = Some(e);
                    }
                    exited += 1;
                    if exited == workers {
                        break Err(all_exited_error(token, first_failure.take()));
                    }
                }
                Ok(WorkerExit::Cancelled) => {
                    exited += 1;
                    if exited == workers {
                        break Err(all_exited_error(token, first_failure.take()));
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    if token.is_cancelled() {
                        break Err(SearchError::Aborted {
                            reason: token.reason(),
                        });
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break Err(SearchError::PoolShutdown),
            }
        };

        // Every exit path releases the pool before returning.
        shut_down(&stop, handles);
        outcome
    }
}

/// All workers exited without a success: cancellation if the token fired,
/// otherwise the first fatal cause.
fn all_exited_error(token: &CancelToken, first_failure: Option<GeneratorError>) -> SearchError {
    if token.is_cancelled() {
        return SearchError::Aborted {
            reason: token.reason(),
        };
    }
    match first_failure {
        Some(source) => SearchError::AllWorkersFailed { source },
        None => SearchError::PoolShutdown,
    }
}

fn shut_down(stop: &Arc<AtomicBool>, handles: Vec<JoinHandle<()>>) {
    stop.store(true, Ordering::Relaxed);
    for handle in handles {
        let _ = handle.join();
    }
}
