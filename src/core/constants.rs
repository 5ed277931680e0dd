//! Constants used throughout code-sign.
//!
//! Centralizes file extensions, tool names and signing parameters.

/// Extension of the base64 certificate file of a secrets pair.
pub const CERTIFICATE_EXT: &str = ".crt";

/// Extension of the password file of a secrets pair.
pub const PASSWORD_EXT: &str = ".crtpass";

/// Prefix of the environment variables holding the default secrets.
pub const ENV_PREFIX: &str = "RUST_TOOL_ACTION_CODE_SIGN_";

/// Suffix of the default certificate variable (`<prefix>CRT`).
pub const ENV_CERTIFICATE_SUFFIX: &str = "CRT";

/// Suffix of the default password variable (`<prefix>CRTPASS`).
pub const ENV_PASSWORD_SUFFIX: &str = "CRTPASS";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "CODE_SIGN_LOG";

/// RFC 3161 timestamp authority used when signing.
pub const TIMESTAMP_URL: &str = "http://timestamp.digicert.com";

/// Digest algorithm for both the file digest and the timestamp digest.
pub const DIGEST_ALGORITHM: &str = "SHA256";

/// Signing tool executable name.
pub const SIGNTOOL_FILE_NAME: &str = "signtool.exe";

/// CPU architecture directory the signing tool is picked from.
pub const SIGNTOOL_ARCH: &str = "x64";

/// Environment variable pointing at the 32-bit program files directory.
pub const PROGRAM_FILES_ENV: &str = "ProgramFiles(x86)";

/// Windows SDK binaries directory, relative to program files.
pub const WINDOWS_KITS_BIN: &[&str] = &["Windows Kits", "10", "bin"];

/// PowerShell script that produces a self-signed PFX.
pub const HELPER_FILE_NAME: &str = "generate-certificate-helper.ps1";

/// PowerShell executable used to run the helper.
pub const POWERSHELL: &str = "powershell";

/// Subject of generated certificates.
pub const CERTIFICATE_SUBJECT: &str = "Code-signing certificate for rcook.org";

/// File name of the decoded certificate inside a scratch directory.
pub const SCRATCH_PFX_NAME: &str = "cert.pfx";

/// Placeholder locations used when signing is unavailable.
pub const NO_OP_HELPER_PATH: &str = "HELPER_PATH";
pub const NO_OP_SIGNTOOL_PATH: &str = "SIGNTOOL_PATH";
pub const NO_OP_TIMESTAMP_URL: &str = "TIMESTAMP_URL";
