use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Bounded pool of worker slots.
///
/// One slot must be held for the whole lifetime of a worker process. Permits
/// are owned, so a slot is released when the permit drops, including when
/// the holding task is cancelled or panics. Acquisition queues behind the
/// limit instead of spawning without bound.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    slots: Arc<Semaphore>,
}

impl WorkerPool {
    pub fn new(max_concurrency: usize) -> Self {
        WorkerPool {
            slots: Arc::new(Semaphore::new(max_concurrency)),
        }
    }

    /// Waits for a free slot and returns it. The semaphore is never closed,
    /// so acquisition cannot fail, only wait.
    pub async fn acquire(&self) -> OwnedSemaphorePermit {
        match self.slots.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => unreachable!("worker slot semaphore is never closed"),
        }
    }

    /// Number of slots not currently held.
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }
}
