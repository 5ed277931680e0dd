//! Secrets pair storage.
//!
//! A bundle lives on disk as two sibling UTF-8 files: the certificate
//! container encoded as base64, and the plain-text password. The password
//! file is protected only by filesystem permissions.
//!
//! Writes go through a temporary file in the target directory which is then
//! renamed into place, so a reader never sees a partially written file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tempfile::NamedTempFile;
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::core::config::AppConfig;
use crate::core::domain::{SecretsBundle, SecretsPaths};
use crate::error::{Error, Result, StoreError};

/// Encode certificate bytes for storage.
pub fn encode(certificate: &[u8]) -> String {
    STANDARD.encode(certificate)
}

/// Build a bundle from a stored base64 certificate and its password.
///
/// ASCII whitespace anywhere in the base64 text is ignored, so line-wrapped
/// output from `base64` and similar tools is accepted.
///
/// # Errors
///
/// Returns `StoreError::Decode` if the certificate is not valid base64.
pub fn decode(b64_certificate: &str, password: &str) -> Result<SecretsBundle> {
    let compact: Vec<u8> = b64_certificate
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let certificate = STANDARD.decode(&compact).map_err(StoreError::Decode)?;
    Ok(SecretsBundle::new(certificate, password.to_string()))
}

/// Load the bundle named by `certificate_path`.
///
/// # Errors
///
/// Returns `ValidationError::Extension` for a path with the wrong extension,
/// `StoreError::Read` if either file cannot be read and `StoreError::Decode`
/// if the certificate file is not valid base64.
pub fn load(config: &AppConfig, certificate_path: &Path) -> Result<SecretsBundle> {
    let paths = SecretsPaths::parse(config, certificate_path)?;
    let b64_certificate = read(&paths.certificate_path)?;
    let password = read(&paths.password_path)?;

    let bundle = decode(&b64_certificate, &password)?;
    debug!(
        path = %paths.certificate_path.display(),
        fingerprint = %bundle.fingerprint(),
        "loaded secrets"
    );
    Ok(bundle)
}

/// Write `bundle` to the pair of files named by `paths`.
///
/// Without `overwrite`, fails if either file already exists and leaves
/// both untouched. Both files are staged before either is committed. If the
/// password commit fails the certificate file is put back the way it was:
/// restored to its previous contents when overwriting, removed otherwise.
///
/// # Errors
///
/// Returns `StoreError::AlreadyExists` on a collision without `overwrite`,
/// `StoreError::Read` if an existing certificate cannot be backed up and
/// `StoreError::Write` on any other write failure.
pub fn save(bundle: &SecretsBundle, paths: &SecretsPaths, overwrite: bool) -> Result<()> {
    let previous = if overwrite {
        read_existing(&paths.certificate_path)?
    } else {
        if let Some(existing) = paths.any_exists() {
            return Err(StoreError::AlreadyExists(existing.to_path_buf()).into());
        }
        None
    };

    let certificate = stage(&paths.certificate_path, encode(bundle.certificate()).as_bytes())?;
    let password = stage(&paths.password_path, bundle.password().as_bytes())?;
    let previous = previous.as_ref().map(|contents| contents.as_slice());
    commit_pair(certificate, password, paths, overwrite, previous)?;

    debug!(
        certificate = %paths.certificate_path.display(),
        password = %paths.password_path.display(),
        overwrite,
        "saved secrets"
    );
    Ok(())
}

/// Commit both staged files, certificate first.
fn commit_pair(
    certificate: NamedTempFile,
    password: NamedTempFile,
    paths: &SecretsPaths,
    overwrite: bool,
    previous: Option<&[u8]>,
) -> Result<()> {
    commit(certificate, &paths.certificate_path, overwrite)?;
    let Err(e) = commit(password, &paths.password_path, overwrite) else {
        return Ok(());
    };

    let target = &paths.certificate_path;
    let rolled_back = match previous {
        Some(contents) => stage(target, contents).and_then(|file| commit(file, target, true)),
        None => fs::remove_file(target).map_err(Error::from),
    };
    match rolled_back {
        Ok(()) => debug!(path = %target.display(), "rolled back certificate file"),
        Err(cleanup) => warn!(error = %cleanup, "failed to roll back certificate file"),
    }
    Err(e)
}

/// Current contents of `path`, or `None` if it does not exist.
fn read_existing(path: &Path) -> Result<Option<Zeroizing<Vec<u8>>>> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(Zeroizing::new(contents))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        StoreError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Write `contents` to a temporary file next to `target`.
///
/// The temporary file is created with owner-only permissions on Unix and
/// removed on drop unless committed.
fn stage(target: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let write_err = |source: io::Error| StoreError::Write {
        path: target.to_path_buf(),
        source,
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    trace!(target = %target.display(), staged = %file.path().display(), "staged");
    Ok(file)
}

fn commit(file: NamedTempFile, target: &Path, overwrite: bool) -> Result<()> {
    let persisted = if overwrite {
        file.persist(target)
    } else {
        file.persist_noclobber(target)
    };

    match persisted {
        Ok(_) => Ok(()),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
            Err(StoreError::AlreadyExists(target.to_path_buf()).into())
        }
        Err(e) => Err(StoreError::Write {
            path: target.to_path_buf(),
            source: e.error,
        }
        .into()),
    }
}
