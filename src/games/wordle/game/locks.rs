use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::games::wordle::SessionId;

/// One async mutex per session, so read-modify-write on a record never
/// interleaves with another request for the same session.
#[derive(Clone, Debug, Default)]
pub struct SessionLocks(Arc<RwLock<HashMap<SessionId, Arc<Mutex<()>>>>>);

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, id: SessionId) -> OwnedMutexGuard<()> {
        let existing = {
            let guard = self.0.read().await;
            guard.get(&id).cloned()
        };

        let mutex = match existing {
            Some(mutex) => mutex,
            None => {
                let mut guard = self.0.write().await;
                guard.entry(id).or_default().clone()
            }
        };

        mutex.lock_owned().await
    }

    /// Unlocks the session and drops its mutex unless another request is
    /// already waiting on it, so the map only holds sessions in use.
    pub async fn release(&self, id: SessionId, held: OwnedMutexGuard<()>) {
        drop(held);

        let mut guard = self.0.write().await;
        if guard.get(&id).is_some_and(|mutex| Arc::strong_count(mutex) == 1) {
            guard.remove(&id);
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.0.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::SessionLocks;
    use crate::games::wordle::SessionId;

    #[tokio::test]
    async fn same_session_waits() {
        let locks = SessionLocks::new();
        let id = SessionId::new(1);

        let guard = locks.lock(id).await;

        let blocked = tokio::time::timeout(Duration::from_millis(50), locks.lock(id)).await;
        assert!(blocked.is_err(), "second lock on the same session should wait");

        locks.release(id, guard).await;

        let unblocked = tokio::time::timeout(Duration::from_millis(50), locks.lock(id)).await;
        assert!(unblocked.is_ok());
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let locks = SessionLocks::new();

        let _foo = locks.lock(SessionId::new(1)).await;
        let bar = tokio::time::timeout(Duration::from_millis(50), locks.lock(SessionId::new(2))).await;

        assert!(bar.is_ok());
        assert_eq!(locks.len().await, 2);
    }

    #[tokio::test]
    async fn release_removes_entry() {
        let locks = SessionLocks::new();
        let id = SessionId::new(1);

        let guard = locks.lock(id).await;
        locks.release(id, guard).await;

        assert_eq!(locks.len().await, 0);
    }

    #[tokio::test]
    async fn release_keeps_entry_with_waiters() {
        let locks = SessionLocks::new();
        let id = SessionId::new(1);

        let guard = locks.lock(id).await;

        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let guard = locks.lock(id).await;
                locks.release(id, guard).await;
            })
        };

        // give the waiter time to queue on the mutex
        tokio::time::sleep(Duration::from_millis(50)).await;
        locks.release(id, guard).await;
        assert_eq!(locks.len().await, 1);

        waiter.await.unwrap();
        assert_eq!(locks.len().await, 0);
    }
}
