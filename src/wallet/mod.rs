//! Wallet candidate generation.
//!
//! This module provides:
//! - 24-word mnemonic generation from private entropy
//! - TON-style mnemonic to Ed25519 key derivation
//! - Versioned wallet address derivation and encoding
//!
//! The search itself only sees the [`CandidateGenerator`] trait, so tests can
//! drive the workers with scripted generators.

mod address;
mod keypair;
mod mnemonic;

pub use address::Address;
pub use keypair::Keypair;
pub use mnemonic::MNEMONIC_WORDS;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::WalletVersion;

/// One generated wallet: key material plus its encoded address.
#[derive(Clone)]
pub struct Candidate {
    /// The derived Ed25519 keypair.
    pub keypair: Keypair,
    /// The 24-word seed phrase the keypair was derived from.
    pub words: Vec<String>,
    /// The url-safe bounceable address string.
    pub address: String,
}

/// A single candidate-generation attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The entropy source could not produce random bytes right now.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    /// Key or address derivation failed.
    #[error("key derivation failed: {0}")]
    Derivation(String),
}

impl GeneratorError {
    /// Transient failures are retried by the worker loop; the rest end the
    /// worker.
    pub fn is_transient(&self) -> bool {
        matches!(self, GeneratorError::Entropy(_))
    }
}

/// Produces random wallet candidates.
///
/// Implementations own their entropy source, so every worker gets an
/// independent stream.
pub trait CandidateGenerator: Send {
    fn generate(&mut self) -> Result<Candidate, GeneratorError>;
}

/// The real generator: random mnemonic, TON key derivation, versioned
/// address.
pub struct WalletGenerator {
    version: WalletVersion,
    rng: StdRng,
}

impl WalletGenerator {
    /// Creates a generator with a freshly seeded private RNG.
    pub fn new(version: WalletVersion) -> Self {
        Self {
            version,
            rng: StdRng::from_entropy(),
        }
    }
}

impl CandidateGenerator for WalletGenerator {
    fn generate(&mut self) -> Result<Candidate, GeneratorError> {
        let words = mnemonic::generate(&mut self.rng)?;
        let keypair = Keypair::from_mnemonic(&words)?;
        let address = Address::derive(self.version, keypair.public_key()).to_url_safe();

        Ok(Candidate {
            keypair,
            words,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_candidate_shape() {
        let mut generator = WalletGenerator::new(WalletVersion::V4);
        let candidate = generator.generate().unwrap();

        assert_eq!(candidate.words.len(), MNEMONIC_WORDS);
        assert_eq!(candidate.keypair.public_key_hex().len(), 64);
        assert_eq!(candidate.keypair.secret_key_hex().len(), 128);
        assert!(candidate.address.starts_with("EQ"));
        assert_eq!(candidate.address.len(), 48);
    }

    #[test]
    fn test_generator_errors_classify() {
        assert!(GeneratorError::Entropy("os rng".into()).is_transient());
        assert!(!GeneratorError::Derivation("bad length".into()).is_transient());
    }
}
