//! Settings persistence.
//!
//! A small JSON file holds the derivation salt and output preferences. Saves
//! go through an atomic-replace scheme so a crash mid-write leaves either the
//! old or the new file, never a torn one.

use anyhow::{Context, Result};
use chrono::Local;
use getrandom::fill;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::derive::DEFAULT_LENGTH;

/// Salt shipped with the tool. Fixed and non-secret; it namespaces this
/// tool's hash usage away from any other use of the same master secret.
/// Changing it changes every derived password, so it only moves via
/// `init --fresh-salt`.
pub const DEFAULT_SALT: &str = "59f385a7-8a15-45ab-ab8a-5be9dbffe365";

/// User-facing bounds on the configured password length.
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;

/// Persisted settings: derivation salt plus output preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    salt: String,
    length: usize,
    use_emojis: bool,
    created: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT.to_string(),
            length: DEFAULT_LENGTH,
            use_emojis: false,
            created: Local::now().to_string(),
        }
    }
}

impl Config {
    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn use_emojis(&self) -> bool {
        self.use_emojis
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    pub fn set_salt(&mut self, salt: String) {
        self.salt = salt;
    }

    /// Sets the default password length, enforcing the user-facing 8-64
    /// range. The derivation core itself accepts any length >= 1; this bound
    /// exists so a typo cannot silently configure a 2-symbol password.
    pub fn set_length(&mut self, length: usize) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            anyhow::bail!("password length must be {MIN_LENGTH}-{MAX_LENGTH}, got {length}");
        }
        self.length = length;
        Ok(())
    }

    pub fn set_use_emojis(&mut self, use_emojis: bool) {
        self.use_emojis = use_emojis;
    }
}

/// Generates a fresh random salt (32 hex chars).
pub fn fresh_salt() -> Result<String> {
    let mut buf = [0u8; 16];
    fill(&mut buf).map_err(|_| anyhow::anyhow!("OS random generator unavailable"))?;
    Ok(buf.iter().map(|b| format!("{b:02x}")).collect())
}

/// File-backed store for [`Config`].
#[derive(Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the config file, or the built-in defaults when none exists yet.
    pub fn load(&self) -> Result<Config> {
        if !self.exists() {
            return Ok(Config::default());
        }
        let data = fs::read(&self.path)
            .with_context(|| format!("failed to read config at {}", self.path.display()))?;
        serde_json::from_slice(&data)
            .with_context(|| format!("config at {} is not valid JSON", self.path.display()))
    }

    /// Writes the config atomically:
    /// 1. serialize to a temp file with a random name next to the target
    /// 2. fsync the temp file
    /// 3. atomically replace the target
    /// 4. fsync the parent directory so the rename is persisted
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(config)?;
        let tmp_path = self.random_tmp_path()?;

        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .context("failed to create temporary config file")?;

        tmp_file.write_all(&data)?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        if let Err(e) = self.atomic_replace(&tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if let Some(parent) = self.path.parent() {
            let dir = File::open(parent)?;
            dir.sync_all()?;
        }

        Ok(())
    }

    /// Unique temp path in the target's directory: `name.tmp.<randomhex>`.
    fn random_tmp_path(&self) -> Result<PathBuf> {
        let mut buf = [0u8; 8];
        fill(&mut buf).map_err(|_| anyhow::anyhow!("OS random generator unavailable"))?;

        let rand_string = buf.iter().map(|b| format!("{b:02x}")).collect::<String>();

        let file_name = self
            .path
            .file_name()
            .context("config path has no file name")?
            .to_string_lossy();

        Ok(self
            .path
            .with_file_name(format!("{file_name}.tmp.{rand_string}")))
    }

    /// Atomic replace via `ReplaceFileW` with write-through on Windows.
    #[cfg(target_os = "windows")]
    fn atomic_replace(&self, tmp_path: &Path) -> Result<()> {
        use std::ffi::OsStr;
        use std::os::windows::ffi::OsStrExt;
        use windows_sys::Win32::Storage::FileSystem::{REPLACEFILE_WRITE_THROUGH, ReplaceFileW};

        fn to_wide(s: &OsStr) -> Vec<u16> {
            s.encode_wide().chain(std::iter::once(0)).collect()
        }

        // ReplaceFileW fails when the target is missing; fall back to a
        // plain rename for the first save.
        if !self.path.exists() {
            fs::rename(tmp_path, &self.path)?;
            return Ok(());
        }

        let target_w = to_wide(self.path.as_os_str());
        let tmp_w = to_wide(tmp_path.as_os_str());

        // SAFETY:
        // - Strings are valid UTF-16 and null-terminated
        // - Pointers remain valid during the call
        // - Windows does not retain the pointers after return
        let result = unsafe {
            ReplaceFileW(
                target_w.as_ptr(),
                tmp_w.as_ptr(),
                std::ptr::null(),
                REPLACEFILE_WRITE_THROUGH,
                std::ptr::null(),
                std::ptr::null(),
            )
        };

        if result == 0 {
            let err = std::io::Error::last_os_error();
            return Err(err).context("atomic replace failed");
        }

        Ok(())
    }

    /// On Unix, `rename()` is atomic when both paths share a filesystem.
    #[cfg(not(target_os = "windows"))]
    fn atomic_replace(&self, tmp_path: &Path) -> Result<()> {
        fs::rename(tmp_path, &self.path)?;
        Ok(())
    }
}
