use std::convert::Infallible;

use super::{game::GameRecord, SessionId};

mod json;
pub use json::JsonFile;

mod mongodb;
pub use self::mongodb::MongoDb;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error from mongodb: {0}")]
    MongoDb(#[from] ::mongodb::error::Error),
}

impl From<Infallible> for Error {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// Durable session id -> game record storage.
#[allow(async_fn_in_trait)]
pub trait Backend {
    type Error: Into<Error>;

    async fn get(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error>;

    /// Inserts `record`, replacing whatever was stored under `id`.
    async fn insert(&self, id: SessionId, record: GameRecord) -> Result<(), Self::Error>;

    /// Replaces an existing record. Returns `false` if there was none.
    async fn update(&self, id: SessionId, record: &GameRecord) -> Result<bool, Self::Error>;

    async fn remove(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error>;
}

pub type HashMap = tokio::sync::RwLock<std::collections::HashMap<SessionId, GameRecord>>;

impl Backend for HashMap {
    type Error = Infallible;

    async fn get(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error> {
        let guard = self.read().await;
        Ok(guard.get(&id).cloned())
    }

    async fn insert(&self, id: SessionId, record: GameRecord) -> Result<(), Self::Error> {
        let mut guard = self.write().await;
        guard.insert(id, record);
        Ok(())
    }

    async fn update(&self, id: SessionId, record: &GameRecord) -> Result<bool, Self::Error> {
        let mut guard = self.write().await;
        Ok(guard
            .get_mut(&id)
            .map(|stored| *stored = record.clone())
            .is_some())
    }

    async fn remove(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error> {
        let mut guard = self.write().await;
        Ok(guard.remove(&id))
    }
}

/// The backend picked by configuration at startup.
#[derive(Debug)]
pub enum AnyBackend {
    Memory(HashMap),
    Json(JsonFile),
    MongoDb(MongoDb),
}

impl Backend for AnyBackend {
    type Error = Error;

    async fn get(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error> {
        match self {
            Self::Memory(map) => map.get(id).await.map_err(Into::into),
            Self::Json(file) => file.get(id).await,
            Self::MongoDb(db) => Ok(db.get(id).await?),
        }
    }

    async fn insert(&self, id: SessionId, record: GameRecord) -> Result<(), Self::Error> {
        match self {
            Self::Memory(map) => map.insert(id, record).await.map_err(Into::into),
            Self::Json(file) => file.insert(id, record).await,
            Self::MongoDb(db) => Ok(db.insert(id, record).await?),
        }
    }

    async fn update(&self, id: SessionId, record: &GameRecord) -> Result<bool, Self::Error> {
        match self {
            Self::Memory(map) => map.update(id, record).await.map_err(Into::into),
            Self::Json(file) => file.update(id, record).await,
            Self::MongoDb(db) => Ok(db.update(id, record).await?),
        }
    }

    async fn remove(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error> {
        match self {
            Self::Memory(map) => map.remove(id).await.map_err(Into::into),
            Self::Json(file) => file.remove(id).await,
            Self::MongoDb(db) => Ok(db.remove(id).await?),
        }
    }
}
