use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::{
    store::{self, Backend},
    Difficulty, Error, Result, SessionId, WordsList,
};

mod locks;
use locks::SessionLocks;

mod record;
pub use record::{GameRecord, Status};

/// Starts, advances and resets games, one record per session.
#[derive(Debug)]
pub struct Games<B> {
    backend: Arc<B>,
    words: Arc<WordsList>,
    locks: SessionLocks,
}

impl<B> Clone for Games<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            words: self.words.clone(),
            locks: self.locks.clone(),
        }
    }
}

impl<B: Backend> Games<B> {
    pub fn new(backend: B, words: WordsList) -> Self {
        Self {
            backend: Arc::new(backend),
            words: Arc::new(words),
            locks: SessionLocks::new(),
        }
    }

    #[instrument(skip(self))]
    pub async fn start(&self, difficulty: Difficulty) -> Result<(SessionId, GameRecord)> {
        let length = difficulty.settings().word_length;
        let word = self
            .words
            .random(length)
            .ok_or(Error::NoWords(length))?
            .clone();

        let record = GameRecord::new(word, difficulty);

        let id = loop {
            let id = SessionId::random();
            if self.backend.get(id).await.map_err(store_error)?.is_none() {
                break id;
            }
        };

        self.backend
            .insert(id, record.clone())
            .await
            .map_err(store_error)?;

        info!(%id, %difficulty, "started game");
        Ok((id, record))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: SessionId) -> Result<GameRecord> {
        self.backend
            .get(id)
            .await
            .map_err(store_error)?
            .ok_or(Error::NotFound(id))
    }

    /// Scores `guess` against the session's game and persists the result.
    #[instrument(skip(self))]
    pub async fn submit(&self, id: SessionId, guess: &str) -> Result<GameRecord> {
        let guard = self.locks.lock(id).await;
        let result = self.submit_locked(id, guess).await;
        self.locks.release(id, guard).await;

        result
    }

    async fn submit_locked(&self, id: SessionId, guess: &str) -> Result<GameRecord> {
        let mut record = self.get(id).await?;

        if let Err(err) = record.attempt(guess) {
            warn!("rejected guess: {err}");
            return Err(err);
        }

        if !self
            .backend
            .update(id, &record)
            .await
            .map_err(store_error)?
        {
            return Err(Error::NotFound(id));
        }

        match record.status() {
            Status::Running => (),
            status => info!(
                %status,
                difficulty = %record.difficulty(),
                attempts = record.attempts().len(),
                "game over"
            ),
        }

        Ok(record)
    }

    /// Unbinds the session from its game. Unknown sessions are ignored.
    #[instrument(skip(self))]
    pub async fn reset(&self, id: SessionId) -> Result<()> {
        let guard = self.locks.lock(id).await;
        let removed = self.backend.remove(id).await;
        self.locks.release(id, guard).await;

        if removed.map_err(store_error)?.is_some() {
            info!("reset session");
        }

        Ok(())
    }
}

fn store_error(err: impl Into<store::Error>) -> Error {
    Error::Store(err.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::{Games, Status};
    use crate::games::wordle::{store, Difficulty, Error, InvalidGuess, SessionId, WordsList};

    type Result<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

    fn games() -> Games<store::HashMap> {
        let words = WordsList::from_lines(["AMBER", "STRING", "AARDVARKS"]);
        Games::new(store::HashMap::default(), words)
    }

    #[tokio::test]
    async fn start_uses_difficulty_table() -> Result {
        let games = games();

        for (difficulty, word, max_attempts) in [
            (Difficulty::Easy, "AMBER", 7),
            (Difficulty::Medium, "AMBER", 6),
            (Difficulty::Hard, "STRING", 5),
            (Difficulty::Hackerman, "AARDVARKS", 1),
        ] {
            let (id, record) = games.start(difficulty).await?;

            assert_eq!(record.word().to_string(), word);
            assert_eq!(record.word_length(), word.len());
            assert_eq!(record.max_attempts(), max_attempts);
            assert_eq!(record.status(), Status::Running);
            assert_eq!(games.get(id).await?, record);
        }

        Ok(())
    }

    #[tokio::test]
    async fn unknown_label_starts_default_game() -> Result {
        let games = games();

        let difficulty = Difficulty::from_label("impossible").unwrap_or_default();
        let (_, record) = games.start(difficulty).await?;

        assert_eq!(record.word_length(), 5);
        assert_eq!(record.max_attempts(), 7);

        Ok(())
    }

    #[tokio::test]
    async fn start_without_words() {
        let games = Games::new(store::HashMap::default(), WordsList::from_lines(["AMBER"]));

        assert!(matches!(
            games.start(Difficulty::Hard).await,
            Err(Error::NoWords(6))
        ));
    }

    #[tokio::test]
    async fn submit_persists_attempts() -> Result {
        let games = games();
        let (id, _) = games.start(Difficulty::Medium).await?;

        let record = games.submit(id, "ARBOR").await?;
        assert_eq!(record.attempts().len(), 1);
        assert_eq!(record.attempts()[0].colors, "GBGBG");

        assert_eq!(games.get(id).await?, record);

        Ok(())
    }

    #[tokio::test]
    async fn win_rejects_further_submissions() -> Result {
        let games = games();
        let (id, _) = games.start(Difficulty::Easy).await?;

        games.submit(id, "HANDY").await?;
        let record = games.submit(id, "AMBER").await?;
        assert_eq!(record.status(), Status::Won);

        let err = games.submit(id, "AMBER").await.unwrap_err();
        assert!(matches!(err, Error::GameOver(Status::Won)));
        assert!(err.is_rejection());
        assert_eq!(games.get(id).await?.attempts().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn loses_after_max_attempts() -> Result {
        let games = games();
        let (id, _) = games.start(Difficulty::Hard).await?;

        for _ in 0..4 {
            let record = games.submit(id, "STRONG").await?;
            assert_eq!(record.status(), Status::Running);
        }

        let record = games.submit(id, "STRONG").await?;
        assert_eq!(record.status(), Status::Lost);

        let err = games.submit(id, "STRING").await.unwrap_err();
        assert!(matches!(err, Error::GameOver(Status::Lost)));
        assert_eq!(games.get(id).await?.status(), Status::Lost);

        Ok(())
    }

    #[tokio::test]
    #[traced_test]
    async fn invalid_guess_is_rejected() -> Result {
        let games = games();
        let (id, _) = games.start(Difficulty::Easy).await?;

        for guess in ["AMBERS", "AMB", "amber", "AMB3R", "ÄMBER"] {
            let err = games.submit(id, guess).await.unwrap_err();
            assert!(matches!(err, Error::InvalidGuess(_)), "{guess}: {err}");
            assert!(err.is_rejection());
        }

        assert!(matches!(
            games.submit(id, "AMBERS").await,
            Err(Error::InvalidGuess(InvalidGuess::WrongLength {
                expected: 5,
                found: 6
            }))
        ));
        assert!(games.get(id).await?.attempts().is_empty());
        assert!(logs_contain("rejected guess"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let games = games();
        let id = SessionId::new(404);

        let err = games.submit(id, "AMBER").await.unwrap_err();

        assert!(matches!(err, Error::NotFound(missing) if missing == id));
        assert!(!err.is_rejection());
        assert!(matches!(games.get(id).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn reset_discards_game() -> Result {
        let games = games();
        let (id, _) = games.start(Difficulty::Easy).await?;

        games.reset(id).await?;

        assert!(matches!(games.submit(id, "AMBER").await, Err(Error::NotFound(_))));

        // unknown sessions are fine too
        games.reset(SessionId::new(404)).await?;

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_submissions_are_serialised() -> Result {
        let games = Arc::new(games());
        let (id, _) = games.start(Difficulty::Easy).await?;

        let tasks = (0..20)
            .map(|_| {
                let games = games.clone();
                tokio::spawn(async move { games.submit(id, "ARBOR").await })
            })
            .collect::<Vec<_>>();

        let mut accepted = 0;
        for task in tasks {
            match task.await? {
                Ok(_) => accepted += 1,
                Err(Error::GameOver(Status::Lost)) => (),
                Err(err) => return Err(err.into()),
            }
        }

        let record = games.get(id).await?;
        assert_eq!(accepted, 7);
        assert_eq!(record.attempts().len(), 7);
        assert_eq!(record.status(), Status::Lost);

        Ok(())
    }

    #[tokio::test]
    async fn locks_only_held_for_live_requests() -> Result {
        let games = games();

        for n in 0..100 {
            let err = games.submit(SessionId::new(n), "AMBER").await.unwrap_err();
            assert!(matches!(err, Error::NotFound(_)));
        }
        assert_eq!(games.locks.len().await, 0);

        let (id, _) = games.start(Difficulty::Hackerman).await?;
        let record = games.submit(id, "AAAAAAAAA").await?;
        assert_eq!(record.status(), Status::Lost);
        assert!(games.submit(id, "AARDVARKS").await.is_err());

        assert_eq!(games.locks.len().await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn store_failure_is_not_a_rejection() -> Result {
        let dir = tempfile::tempdir()?;
        let file = store::JsonFile::open(dir.path().join("data.json")).await?;
        let games = Games::new(file, WordsList::from_lines(["AMBER"]));

        let (id, _) = games.start(Difficulty::Easy).await?;
        std::fs::remove_dir_all(dir.path())?;

        let err = games.submit(id, "ARBOR").await.unwrap_err();
        assert!(matches!(err, Error::Store(store::Error::Io(_))), "{err}");
        assert!(!err.is_rejection());

        assert!(games.get(id).await?.attempts().is_empty());
        assert_eq!(games.locks.len().await, 0);

        Ok(())
    }
}
