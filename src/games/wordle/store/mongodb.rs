use mongodb::{bson::doc, options::ReplaceOptions, Collection, Database};
use serde::{Deserialize, Serialize};

use super::Backend;
use crate::games::wordle::{game::GameRecord, SessionId};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Record {
    #[serde(rename = "_id")]
    id: SessionId,

    #[serde(flatten)]
    game: GameRecord,
}

#[derive(Debug, Clone)]
pub struct MongoDb {
    collection: Collection<Record>,
}

impl MongoDb {
    pub fn new(db: &Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
        }
    }

    pub async fn connect(
        url: &str,
        database: &str,
        collection: &str,
    ) -> Result<Self, mongodb::error::Error> {
        let client = mongodb::Client::with_uri_str(url).await?;
        Ok(Self::new(&client.database(database), collection))
    }
}

impl Backend for MongoDb {
    type Error = mongodb::error::Error;

    async fn get(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error> {
        self.collection
            .find_one(doc! { "_id": id.get() }, None)
            .await
            .map(|op| op.map(|record| record.game))
    }

    async fn insert(&self, id: SessionId, record: GameRecord) -> Result<(), Self::Error> {
        let record = Record { id, game: record };

        self.collection
            .replace_one(
                doc! { "_id": id.get() },
                record,
                ReplaceOptions::builder().upsert(true).build(),
            )
            .await
            .map(|_| ())
    }

    async fn update(&self, id: SessionId, record: &GameRecord) -> Result<bool, Self::Error> {
        let record = Record {
            id,
            game: record.clone(),
        };

        self.collection
            .replace_one(doc! { "_id": id.get() }, record, None)
            .await
            .map(|result| result.matched_count > 0)
    }

    async fn remove(&self, id: SessionId) -> Result<Option<GameRecord>, Self::Error> {
        self.collection
            .find_one_and_delete(doc! { "_id": id.get() }, None)
            .await
            .map(|op| op.map(|record| record.game))
    }
}
