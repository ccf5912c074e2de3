//! Runtime configuration for the wallet search.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::matcher::TargetPattern;

/// Wallet contract version used for address derivation.
///
/// Different versions derive different addresses from the same key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletVersion {
    /// WalletContractV4 (the default contract for most TON wallets)
    #[default]
    V4,
    /// WalletContractV5R1
    V5R1,
}

impl FromStr for WalletVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v4" => Ok(WalletVersion::V4),
            "v5r1" | "v5" => Ok(WalletVersion::V5R1),
            other => Err(ValidationError::UnsupportedVersion(other.into())),
        }
    }
}

impl std::fmt::Display for WalletVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletVersion::V4 => write!(f, "v4"),
            WalletVersion::V5R1 => write!(f, "v5r1"),
        }
    }
}

/// Number of concurrent search workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerCount {
    /// One worker per logical CPU.
    Auto,
    /// A fixed number of workers (at least 1).
    Fixed(usize),
}

impl WorkerCount {
    /// Resolves to a concrete worker count, at least 1.
    pub fn resolve(self) -> usize {
        match self {
            WorkerCount::Auto => num_cpus::get().max(1),
            WorkerCount::Fixed(n) => n.max(1),
        }
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        WorkerCount::Fixed(1)
    }
}

impl FromStr for WorkerCount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(WorkerCount::Auto);
        }
        match s.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(WorkerCount::Fixed(n)),
            _ => Err(ValidationError::InvalidWorkers(s.into())),
        }
    }
}

/// Immutable, validated search configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// The required address suffix.
    pub target: TargetPattern,
    /// How many workers to race.
    pub workers: WorkerCount,
    /// Which wallet contract derives the address.
    pub version: WalletVersion,
    /// Log every attempted address to stdout.
    pub trace: bool,
}

impl SearchConfig {
    /// Builds a configuration, validating the target pattern.
    pub fn new(
        target: &str,
        workers: WorkerCount,
        version: WalletVersion,
        trace: bool,
    ) -> Result<Self, ValidationError> {
        if workers == WorkerCount::Fixed(0) {
            return Err(ValidationError::InvalidWorkers("0".into()));
        }

        Ok(Self {
            target: TargetPattern::new(target)?,
            workers,
            version,
            trace,
        })
    }

    /// Returns the resolved number of workers (at least 1).
    pub fn worker_count(&self) -> usize {
        self.workers.resolve()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid target ending: {0}")]
    InvalidPattern(String),

    #[error("unsupported wallet version: {0:?} (supported: v4, v5r1)")]
    UnsupportedVersion(String),

    #[error("invalid worker count: {0:?} (expected a positive integer or \"auto\")")]
    InvalidWorkers(String),
}

/// TON Vanity Wallet Finder
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Desired address ending (Latin letters, digits, dashes, underscores)
    pub ending: String,

    /// Number of search workers, or "auto" for one per CPU core
    #[arg(short = 'w', long, default_value = "1")]
    pub workers: WorkerCount,

    /// Wallet contract version: v4 or v5r1
    #[arg(long = "wallet-version", default_value = "v4")]
    pub wallet_version: WalletVersion,

    /// Log each attempted address
    #[arg(short = 't', long, default_value = "false")]
    pub trace: bool,

    /// Do not print the found credentials to stdout
    #[arg(short = 'q', long, default_value = "false")]
    pub quiet: bool,

    /// Save the found credentials to a text file
    #[arg(short = 's', long, default_value = "false")]
    pub save: bool,

    /// Output file used with --save
    #[arg(short = 'o', long, default_value = "ton_wallet_results.txt")]
    pub output: PathBuf,
}

impl Cli {
    /// Converts the raw CLI arguments into a validated search config.
    pub fn to_search_config(&self) -> Result<SearchConfig, ValidationError> {
        SearchConfig::new(&self.ending, self.workers, self.wallet_version, self.trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = SearchConfig::new("abc", WorkerCount::Fixed(2), WalletVersion::V4, false);
        assert!(config.is_ok());
        assert_eq!(config.unwrap().worker_count(), 2);
    }

    #[test]
    fn test_invalid_pattern_rejected_at_construction() {
        let config = SearchConfig::new("!@#", WorkerCount::default(), WalletVersion::V4, false);
        assert!(matches!(config, Err(ValidationError::InvalidPattern(_))));
    }

    #[test]
    fn test_version_parsing() {
        assert_eq!("v4".parse::<WalletVersion>().unwrap(), WalletVersion::V4);
        assert_eq!("V5R1".parse::<WalletVersion>().unwrap(), WalletVersion::V5R1);
        assert!(matches!(
            "v3".parse::<WalletVersion>(),
            Err(ValidationError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_worker_count_parsing() {
        assert_eq!("auto".parse::<WorkerCount>().unwrap(), WorkerCount::Auto);
        assert_eq!("4".parse::<WorkerCount>().unwrap(), WorkerCount::Fixed(4));
        assert!("0".parse::<WorkerCount>().is_err());
        assert!("-1".parse::<WorkerCount>().is_err());
        assert!("many".parse::<WorkerCount>().is_err());
    }

    #[test]
    fn test_zero_workers_rejected_at_construction() {
        let config = SearchConfig::new("abc", WorkerCount::Fixed(0), WalletVersion::V4, false);
        assert!(matches!(config, Err(ValidationError::InvalidWorkers(_))));
    }

    #[test]
    fn test_resolve_never_returns_zero() {
        assert!(WorkerCount::Auto.resolve() >= 1);
        assert_eq!(WorkerCount::Fixed(0).resolve(), 1);
        assert_eq!(WorkerCount::Fixed(3).resolve(), 3);
    }
}
