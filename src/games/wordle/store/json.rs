use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{Backend, Error};
use crate::games::wordle::{game::GameRecord, SessionId};

/// Every record kept in one pretty-printed JSON document on disk.
///
/// The whole document is rewritten on each change, through a temporary file
/// so a crash never leaves it half written.
#[derive(Debug)]
pub struct JsonFile {
    path: PathBuf,
    document: RwLock<Document>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    games: BTreeMap<SessionId, GameRecord>,
}

impl JsonFile {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        let document = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Document::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Document::default(),
            Err(err) => return Err(err.into()),
        };

        info!(path = %path.display(), games = document.games.len(), "opened game store");

        Ok(Self {
            path,
            document: RwLock::new(document),
        })
    }

    async fn persist(&self, document: &Document) -> Result<(), Error> {
        let bytes = serde_json::to_vec_pretty(document)?;

        let temp = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp, bytes).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        debug!(path = %self.path.display(), "persisted game store");
        Ok(())
    }

    /// Applies `change` to a copy of the document, writes it out and only then
    /// swaps it in, so memory never runs ahead of the file.
    async fn modify<T>(&self, change: impl FnOnce(&mut Document) -> T) -> Result<T, Error> {
        let mut guard = self.document.write().await;

        let mut document = guard.clone();
        let output = change(&mut document);
        self.persist(&document).await?;

        *guard = document;
        Ok(output)
    }
}

impl Backend for JsonFile {
    type Error = Error;

    async fn get(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error> {
        let guard = self.document.read().await;
        Ok(guard.games.get(&id).cloned())
    }

    async fn insert(&self, id: SessionId, record: GameRecord) -> Result<(), Self::Error> {
        self.modify(|document| {
            document.games.insert(id, record);
        })
        .await
    }

    async fn update(&self, id: SessionId, record: &GameRecord) -> Result<bool, Self::Error> {
        if self.get(id).await?.is_none() {
            return Ok(false);
        }

        self.modify(|document| {
            document
                .games
                .get_mut(&id)
                .map(|stored| *stored = record.clone())
                .is_some()
        })
        .await
    }

    async fn remove(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error> {
        if self.get(id).await?.is_none() {
            return Ok(None);
        }

        self.modify(|document| document.games.remove(&id)).await
    }
}
