//! Reporting and best-effort persistence of a found wallet.

use std::fs;
use std::path::{Path, PathBuf};

use crate::search::FoundWallet;

/// Consumes the search outcome: console output plus optional file output.
///
/// Persistence is best-effort by design — the caller already holds the
/// credentials in memory, so a write failure is logged and never escalated.
pub struct ResultSink {
    print_result: bool,
    save_path: Option<PathBuf>,
}

impl ResultSink {
    pub fn new(print_result: bool, save_path: Option<PathBuf>) -> Self {
        Self {
            print_result,
            save_path,
        }
    }

    /// Reports the found wallet.
    pub fn report(&self, found: &FoundWallet) {
        if self.print_result {
            println!("Public Key: {}", found.public_key);
            println!("Private Key: {}", found.private_key);
            println!("Words: {}", found.words_joined());
            println!("Wallet: {}", found.address);
        } else {
            println!("The search is over.");
        }

        if let Some(path) = &self.save_path {
            eprintln!(
                "WARNING: Private key and seed phrase are being saved to disk in plain text. \
                 Keep the file secure and never share it."
            );
            match save_to_file(found, path) {
                Ok(()) => println!("Results saved to {}", path.display()),
                Err(e) => eprintln!("Error while writing results to file: {}", e),
            }
        }
    }
}

/// Writes the credentials in a plain-text key/value format.
fn save_to_file(found: &FoundWallet, path: &Path) -> std::io::Result<()> {
    let data = format!(
        "Public Key: {}\nPrivate Key: {}\nWords: {}\nWallet: {}\n",
        found.public_key,
        found.private_key,
        found.words_joined(),
        found.address,
    );
    fs::write(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found_wallet() -> FoundWallet {
        FoundWallet {
            public_key: "a".repeat(64),
            private_key: "b".repeat(128),
            words: vec!["test".to_string(); 24],
            address: "EQabc".to_string(),
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ton_vanity_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_saved_file_format() {
        let path = temp_path("format.txt");
        let found = found_wallet();

        save_to_file(&found, &path).unwrap();
        let data = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let expected = format!(
            "Public Key: {}\nPrivate Key: {}\nWords: {}\nWallet: EQabc\n",
            "a".repeat(64),
            "b".repeat(128),
            vec!["test"; 24].join(" "),
        );
        assert_eq!(data, expected);
    }

    #[test]
    fn test_report_survives_unwritable_path() {
        let sink = ResultSink::new(false, Some(PathBuf::from("/nonexistent-dir/out.txt")));
        // Must not panic or propagate the write failure.
        sink.report(&found_wallet());
    }
}
