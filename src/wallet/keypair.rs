//! TON-style mnemonic to Ed25519 key derivation.

use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2;
use sha2::Sha512;

use super::GeneratorError;

type HmacSha512 = Hmac<Sha512>;

/// PBKDF2 round count used by the TON seed derivation.
const PBKDF2_ROUNDS: u32 = 100_000;
const SEED_SALT: &[u8] = b"TON default seed";

/// An Ed25519 keypair derived from a seed phrase.
///
/// The secret key uses the 64-byte layout (seed followed by the public key),
/// so its hex form is 128 characters.
#[derive(Clone)]
pub struct Keypair {
    public: [u8; 32],
    secret: [u8; 64],
}

impl Keypair {
    /// Derives a keypair from a seed phrase.
    ///
    /// The phrase is stretched with HMAC-SHA512 and PBKDF2 before the first
    /// 32 bytes seed the Ed25519 signing key.
    pub fn from_mnemonic(words: &[String]) -> Result<Self, GeneratorError> {
        let phrase = words.join(" ");

        let mut mac = HmacSha512::new_from_slice(phrase.as_bytes())
            .map_err(|e| GeneratorError::Derivation(e.to_string()))?;
        mac.update(b"");
        let entropy = mac.finalize().into_bytes();

        let mut seed = [0u8; 64];
        pbkdf2::<HmacSha512>(&entropy, SEED_SALT, PBKDF2_ROUNDS, &mut seed)
            .map_err(|e| GeneratorError::Derivation(e.to_string()))?;

        let mut key_seed = [0u8; 32];
        key_seed.copy_from_slice(&seed[..32]);

        let signing_key = SigningKey::from_bytes(&key_seed);
        let public = signing_key.verifying_key().to_bytes();

        let mut secret = [0u8; 64];
        secret[..32].copy_from_slice(&key_seed);
        secret[32..].copy_from_slice(&public);

        Ok(Self { public, secret })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(public: [u8; 32], secret: [u8; 64]) -> Self {
        Self { public, secret }
    }

    /// Returns the 32-byte public key.
    #[inline]
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public
    }

    /// Returns the 64-byte secret key.
    #[inline]
    pub fn secret_key(&self) -> &[u8; 64] {
        &self.secret
    }

    /// Public key as lowercase hex (64 characters).
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public)
    }

    /// Secret key as lowercase hex (128 characters).
    pub fn secret_key_hex(&self) -> String {
        hex::encode(self.secret)
    }
}
