//! Seed phrase generation.

use bip39::{Language, Mnemonic};
use rand::RngCore;

use super::GeneratorError;

/// Number of words in a generated seed phrase.
pub const MNEMONIC_WORDS: usize = 24;

/// Entropy backing a 24-word phrase.
const ENTROPY_BYTES: usize = 32;

/// Generates a fresh 24-word phrase from the given entropy stream.
pub fn generate(rng: &mut impl RngCore) -> Result<Vec<String>, GeneratorError> {
    let mut entropy = [0u8; ENTROPY_BYTES];
    rng.try_fill_bytes(&mut entropy)
        .map_err(|e| GeneratorError::Entropy(e.to_string()))?;

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map_err(|e| GeneratorError::Derivation(e.to_string()))?;

    Ok(mnemonic
        .to_string()
        .split_whitespace()
        .map(String::from)
        .collect())
}
