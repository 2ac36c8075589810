//! Deterministic password derivation.
//!
//! Pure computation, no I/O and no stored state: the same
//! (master secret, domain, salt, alphabet, length) tuple always produces the
//! same password, which is what lets the tool regenerate passwords instead of
//! storing them.

pub mod digest;
pub mod encode;

pub use digest::site_digest;
pub use encode::encode_symbols;

use zeroize::Zeroizing;

use crate::alphabet::Alphabet;
use crate::error::DeriveError;

/// Length of the SHA-256 digest (32 bytes / 256 bits).
pub const DIGEST_LEN: usize = 32;
/// Default derived-password length in symbols.
pub const DEFAULT_LENGTH: usize = 18;

/// Output shape for a derivation: target length and symbol set.
#[derive(Debug, Clone)]
pub struct DeriveOptions {
    pub length: usize,
    pub alphabet: Alphabet,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            alphabet: Alphabet::default(),
        }
    }
}

/// Derives a per-site password from a master secret.
///
/// `domain` is expected to be a bare hostname; URL stripping is the caller's
/// job (see [`crate::normalize`]). `salt` is a fixed, non-secret namespacing
/// string from configuration.
///
/// # Errors
///
/// [`DeriveError::InvalidInput`] if `master` or `domain` is empty,
/// [`DeriveError::InvalidLength`] if the requested length is 0. Alphabet
/// validity is enforced when the [`Alphabet`] is constructed.
pub fn derive_password(
    master: &str,
    domain: &str,
    salt: &str,
    options: &DeriveOptions,
) -> Result<Zeroizing<String>, DeriveError> {
    if master.is_empty() {
        return Err(DeriveError::InvalidInput("master secret"));
    }
    if domain.is_empty() {
        return Err(DeriveError::InvalidInput("domain"));
    }

    let digest = site_digest(master, domain, salt);
    let password = encode_symbols(&digest, &options.alphabet, options.length)?;
    Ok(Zeroizing::new(password))
}
