//! Domain types.

mod bundle;
mod paths;

pub use bundle::SecretsBundle;
pub use paths::SecretsPaths;
