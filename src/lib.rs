//! # ton_vanity
//!
//! Parallel TON vanity wallet finder.
//!
//! Repeatedly generates random wallets (24-word seed phrase, Ed25519 keypair,
//! url-safe bounceable address) until one whose address ends with the target
//! pattern is found. Workers race on independent threads; the first success
//! wins, the rest are cancelled.
//!
//! ## Architecture
//!
//! - `wallet`: Candidate generation (mnemonic, key derivation, address)
//! - `matcher`: Target suffix validation and matching
//! - `search`: Worker loop and the coordinator racing the workers
//! - `cancel`: Cooperative cancellation token
//! - `sink`: Result reporting and optional file persistence
//! - `config`: Runtime configuration
//!
//! ## Example
//!
//! ```no_run
//! use ton_vanity::{CancelToken, SearchConfig, WalletFinder, WalletVersion, WorkerCount};
//!
//! let config = SearchConfig::new("abc", WorkerCount::Auto, WalletVersion::V4, false)?;
//! let found = WalletFinder::new(config).find(&CancelToken::new())?;
//! println!("{}", found.address);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cancel;
pub mod config;
pub mod matcher;
pub mod search;
pub mod sink;
pub mod wallet;

pub use cancel::{CancelToken, DEFAULT_ABORT_REASON};
pub use config::{Cli, SearchConfig, ValidationError, WalletVersion, WorkerCount};
pub use matcher::TargetPattern;
pub use search::{FoundWallet, SearchError, WalletFinder};
pub use sink::ResultSink;
pub use wallet::{Candidate, CandidateGenerator, GeneratorError, WalletGenerator};
