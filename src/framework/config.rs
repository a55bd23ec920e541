use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

const DEFAULT_PATH: &str = "./wordle.toml";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem loading config: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub words: WordsConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    pub address: SocketAddr,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    Memory,
    Json {
        path: PathBuf,
    },
    MongoDb {
        url: String,
        database: String,
        #[serde(default = "default_collection")]
        collection: String,
    },
}

fn default_collection() -> String {
    "games".to_owned()
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct WordsConfig {
    /// Directory of `*.txt` word lists replacing the built-in ones.
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Reads `$WORDLE_TOML` (or `./wordle.toml`), then `WORDLE__*` overrides.
    #[tracing::instrument(name = "config")]
    pub fn load() -> Result<Self, Error> {
        let path = if let Ok(path) = std::env::var("WORDLE_TOML") {
            info!(%path, "looking for config file with WORDLE_TOML...");
            path
        } else {
            warn!(path = DEFAULT_PATH, "WORDLE_TOML env unset, using default path");
            DEFAULT_PATH.to_owned()
        };

        let config = Self::builder()?
            .add_source(config::File::new(&path, config::FileFormat::Toml).required(false))
            .add_source(config::Environment::with_prefix("WORDLE").separator("__"))
            .build()?
            .try_deserialize()?;

        info!("config loaded");
        Ok(config)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, Error> {
        Ok(config::Config::builder()
            .set_default("server.address", "127.0.0.1:5000")?
            .set_default("store.backend", "json")?
            .set_default("store.path", "data.json")?)
    }

    #[cfg(test)]
    fn from_toml(toml: &str) -> Result<Self, Error> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }
}
