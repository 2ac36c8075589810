use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
mod auth;
mod clipboard;
use passforge::{Config, ConfigStore, Passforge, default_config_store, fresh_salt};
use std::path::PathBuf;

fn resolve_store(path: Option<PathBuf>) -> Result<ConfigStore> {
    match path {
        Some(p) => Ok(ConfigStore::new(p)),
        None => default_config_store(),
    }
}

#[derive(Debug, Parser)]
#[command(name = "passforge")]
#[command(
    version,
    about = "Deterministic, offline per-site password generator. Nothing is stored; passwords are re-derived from one master secret."
)]
struct Cli {
    ///Path to the passforge config file
    #[arg(long, global = true, value_name = "PATH", env = "PASSFORGE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Writes the config file (salt and output defaults)
    Init {
        /// Mint a random salt instead of the built-in one
        #[arg(long, default_value_t = false)]
        fresh_salt: bool,

        /// Use this exact salt
        #[arg(long, conflicts_with = "fresh_salt")]
        salt: Option<String>,

        /// Overwrite an existing config file
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Derives the password for a site
    #[command(arg_required_else_help = true)]
    Generate {
        /// Hostname or URL of the site
        site: String,

        /// Output length in symbols for this call
        #[arg(short, long)]
        length: Option<usize>,

        /// Append the emoji symbol set for this call
        #[arg(long, overrides_with = "no_emoji")]
        emoji: bool,

        /// Plain ASCII symbols for this call
        #[arg(long = "no-emoji")]
        no_emoji: bool,

        /// Copy to the clipboard instead of printing
        #[arg(short, long)]
        copy: bool,

        /// With --copy, clear the clipboard after SECS seconds
        #[arg(long, value_name = "SECS", requires = "copy")]
        clear_after: Option<u64>,
    },

    /// Sets the default password length (8-64)
    #[command(arg_required_else_help = true)]
    SetLength { length: usize },

    /// Enables or disables the emoji symbol set by default
    #[command(arg_required_else_help = true)]
    SetEmojis {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },

    /// Shows the active configuration
    Info,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    let store = resolve_store(args.config.clone())?;
    match args.command {
        Commands::Init {
            fresh_salt: mint,
            salt,
            force,
        } => {
            if store.exists() && !force {
                bail!(
                    "config already exists at {} (use --force to overwrite)",
                    store.path().display()
                );
            }

            let mut config = Config::default();
            if let Some(salt) = salt {
                config.set_salt(salt);
            } else if mint {
                config.set_salt(fresh_salt()?);
                eprintln!(
                    "warning: a fresh salt changes every password this tool derives; \
                     keep it if you already use derived passwords elsewhere"
                );
            }

            store.save(&config)?;
            println!("config written to {}", store.path().display());
        }
        Commands::Generate {
            site,
            length,
            emoji,
            no_emoji,
            copy,
            clear_after,
        } => {
            let use_emojis = if emoji {
                Some(true)
            } else if no_emoji {
                Some(false)
            } else {
                None
            };

            let secret = auth::read_secret()?;
            let forge = Passforge::open(&store)?;
            let password = forge.generate_with(&secret, &site, length, use_emojis)?;

            if copy {
                clipboard::copy(&password, clear_after)?;
                println!("password copied to clipboard");
            } else {
                println!("{}", &*password);
            }
        }
        Commands::SetLength { length } => {
            let mut config = store.load()?;
            config.set_length(length)?;
            store.save(&config)?;
            println!("default password length set to {length}");
        }
        Commands::SetEmojis { enabled } => {
            let mut config = store.load()?;
            config.set_use_emojis(enabled);
            store.save(&config)?;
            println!("emoji symbols {}", if enabled { "enabled" } else { "disabled" });
        }
        Commands::Info => {
            let config = store.load()?;
            println!("config file:  {}", store.path().display());
            println!(
                "on disk:      {}",
                if store.exists() { "yes" } else { "no (defaults)" }
            );
            println!("salt:         {}", config.salt());
            println!("length:       {}", config.length());
            println!("emoji set:    {}", config.use_emojis());
            println!("created:      {}", config.created());
        }
    }

    Ok(())
}
