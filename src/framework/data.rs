use anyhow::Context;
use tracing::{debug, info, warn};

use super::config::{Config, StoreConfig};
use crate::games::wordle::{
    store::{self, AnyBackend},
    Difficulty, Games, WordsList,
};

/// Everything the web layer needs, assembled once at startup.
#[derive(Debug, Clone)]
pub struct AppData {
    pub(crate) config: Config,
    pub(crate) games: Games<AnyBackend>,
}

impl AppData {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let words = match &config.words.dir {
            Some(dir) => WordsList::load(dir)
                .with_context(|| format!("could not read word lists from {}", dir.display()))?,
            None => WordsList::embedded(),
        };

        for difficulty in Difficulty::ALL {
            let length = difficulty.settings().word_length;
            match words.count(length) {
                0 => warn!(%difficulty, length, "no words for difficulty"),
                count => debug!(%difficulty, length, count, "loaded words"),
            }
        }

        let backend = match &config.store {
            StoreConfig::Memory => {
                info!("keeping games in memory");
                AnyBackend::Memory(store::HashMap::default())
            }
            StoreConfig::Json { path } => AnyBackend::Json(
                store::JsonFile::open(path)
                    .await
                    .with_context(|| format!("could not open {}", path.display()))?,
            ),
            StoreConfig::MongoDb {
                url,
                database,
                collection,
            } => {
                info!(%database, %collection, "storing games in mongodb");
                AnyBackend::MongoDb(
                    store::MongoDb::connect(url, database, collection)
                        .await
                        .context("could not connect to mongodb")?,
                )
            }
        };

        Ok(Self {
            games: Games::new(backend, words),
            config,
        })
    }

    pub(crate) const fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) const fn games(&self) -> &Games<AnyBackend> {
        &self.games
    }
}
