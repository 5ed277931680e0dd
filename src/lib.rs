//! code-sign - code-signing credentials for CI.
//!
//! Generates a self-signed code-signing certificate, stores it with its
//! password as a portable secrets pair, and signs or verifies executables
//! with `signtool.exe`. Outside Windows, generation and signing do nothing so
//! the same CI job can run on every platform.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── info          # Show configuration
//! │   ├── cert          # Generate a secrets pair
//! │   ├── sign          # Sign an executable
//! │   ├── verify        # Verify an executable
//! │   ├── resolve       # Path and default-secret resolution
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Immutable process configuration
//!     ├── domain/       # Secrets bundle and secrets pair paths
//!     ├── platform      # Signing tool discovery
//!     ├── runner        # External process invocation
//!     ├── store         # Secrets pair encoding and storage
//!     └── signer        # Generate, sign and verify
//! ```
//!
//! # Secrets pair
//!
//! A certificate path `X.crt` names two files: `X.crt` with the base64
//! encoded certificate container and `X.crtpass` with the plain-text
//! password.

pub mod cli;
pub mod core;
pub mod error;
