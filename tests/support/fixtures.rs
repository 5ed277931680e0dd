//! Test fixtures and constants.

/// Default certificate variable.
pub const ENV_CRT: &str = "RUST_TOOL_ACTION_CODE_SIGN_CRT";

/// Default password variable.
pub const ENV_CRTPASS: &str = "RUST_TOOL_ACTION_CODE_SIGN_CRTPASS";

/// Bytes standing in for a PFX container.
pub const FAKE_PFX: &[u8] = b"\x30\x82\x0a\x1b fake pfx \x00\xff";

/// Base64 of `FAKE_PFX`.
pub const FAKE_PFX_B64: &str = "MIIKGyBmYWtlIHBmeCAA/w==";

/// Contents of a fake executable.
pub const FAKE_EXECUTABLE: &[u8] = b"MZ\x90\x00 not really a PE file";

pub const PASSWORD: &str = "0123456789abcdef0123456789abcdef";
