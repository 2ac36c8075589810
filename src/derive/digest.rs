use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::DIGEST_LEN;

/// Joins master secret, domain, and salt with newlines, in that order.
///
/// The exact byte layout of this message is load-bearing: any change alters
/// every derived password.
pub fn canonical_message(master: &str, domain: &str, salt: &str) -> Zeroizing<String> {
    Zeroizing::new([master, domain, salt].join("\n"))
}

/// SHA-256 digest of the UTF-8 canonical message.
pub fn site_digest(master: &str, domain: &str, salt: &str) -> [u8; DIGEST_LEN] {
    let message = canonical_message(master, domain, salt);
    let digest = Sha256::digest(message.as_bytes());
    digest.into()
}
