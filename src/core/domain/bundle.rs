//! Secrets bundle.
//!
//! A decoded certificate container together with the password protecting it.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Certificate bytes and password, decoded in memory.
///
/// Immutable once built. Both fields are wiped when the bundle is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretsBundle {
    certificate: Vec<u8>,
    password: String,
}

impl SecretsBundle {
    pub fn new(certificate: Vec<u8>, password: String) -> Self {
        Self {
            certificate,
            password,
        }
    }

    /// Raw certificate container bytes.
    pub fn certificate(&self) -> &[u8] {
        &self.certificate
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Lowercase hex SHA-256 of the certificate bytes.
    pub fn fingerprint(&self) -> String {
        Sha256::digest(&self.certificate)
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}

impl std::fmt::Debug for SecretsBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsBundle")
            .field("certificate_len", &self.certificate.len())
            .field("password", &"***")
            .finish()
    }
}

impl Drop for SecretsBundle {
    fn drop(&mut self) {
        self.certificate.zeroize();
        self.password.zeroize();
    }
}
