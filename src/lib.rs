mod alphabet;
mod config;
mod derive;
mod error;
mod site;

pub use crate::alphabet::{Alphabet, DEFAULT_ALPHABET, EMOJI_ALPHABET};
pub use crate::config::{Config, ConfigStore, DEFAULT_SALT, MAX_LENGTH, MIN_LENGTH, fresh_salt};
pub use crate::derive::{DEFAULT_LENGTH, DeriveOptions, derive_password};
pub use crate::error::DeriveError;
pub use crate::site::normalize;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use zeroize::Zeroizing;

/// Ties the configured salt and output preferences to the derivation core.
///
/// Holds no secrets: the master secret is passed in per call and dropped by
/// the caller.
pub struct Passforge {
    config: Config,
}

impl Passforge {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads settings from the given store (defaults when no file exists).
    pub fn open(store: &ConfigStore) -> Result<Self> {
        Ok(Self {
            config: store.load()?,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Derives the password for `site` using the configured defaults.
    ///
    /// `site` may be a bare hostname or a full URL; it is normalized to a
    /// hostname first.
    pub fn generate(&self, master: &str, site: &str) -> Result<Zeroizing<String>> {
        self.generate_with(master, site, None, None)
    }

    /// Derives the password for `site`, overriding the configured length
    /// and/or emoji preference for this call only.
    pub fn generate_with(
        &self,
        master: &str,
        site: &str,
        length: Option<usize>,
        use_emojis: Option<bool>,
    ) -> Result<Zeroizing<String>> {
        let domain = site::normalize(site)?;

        let alphabet = if use_emojis.unwrap_or(self.config.use_emojis()) {
            Alphabet::with_emoji()
        } else {
            Alphabet::ascii()
        };
        let options = DeriveOptions {
            length: length.unwrap_or(self.config.length()),
            alphabet,
        };

        let password = derive_password(master, &domain, self.config.salt(), &options)
            .context("password derivation failed")?;
        Ok(password)
    }
}

/// Platform config location, e.g. `~/.config/passforge/config.json` on
/// Linux.
pub fn default_config_store() -> Result<ConfigStore> {
    let project_dirs =
        ProjectDirs::from("", "", "passforge").context("could not determine platform directories")?;

    let path = project_dirs.config_dir().join("config.json");

    Ok(ConfigStore::new(path))
}
