//! Deferred completion queue for cross-thread reports.
//!
//! Worker threads that finish evaluating a tween cannot touch the scheduler's
//! containers. They push the handle here instead, and the tick thread drains
//! the queue at the start of its next tick.

use std::sync::Arc;

use crossbeam_queue::ArrayQueue;

use crate::api::error::SlotError;

use super::handles::TweenHandle;

/// Lock-free, fixed-capacity queue of completed tween handles.
///
/// Cloning is cheap and yields another sender to the same queue.
#[derive(Debug, Clone)]
pub struct DeferredCompletions {
    queue: Arc<ArrayQueue<TweenHandle>>,
}

impl DeferredCompletions {
    /// Create a queue holding at most `capacity` pending completions.
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Arc::new(ArrayQueue::new(capacity.max(1))),
        }
    }

    /// Report `handle` as complete from any thread.
    ///
    /// Fails with [`SlotError::CapacityExceeded`] when the queue is full; the
    /// tween then stays active until reported again.
    pub fn push(&self, handle: TweenHandle) -> Result<(), SlotError> {
        self.queue.push(handle).map_err(|_| {
            crate::ts_emit_ctx!(TS201);
            SlotError::CapacityExceeded {
                capacity: self.queue.capacity(),
            }
        })
    }

    /// Pop every pending completion, oldest first.
    pub(crate) fn drain(&self, mut f: impl FnMut(TweenHandle)) -> usize {
        let mut drained = 0;
        while let Some(handle) = self.queue.pop() {
            f(handle);
            drained += 1;
        }
        drained
    }

    /// Check if there are pending completions.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Approximate number of pending completions.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Maximum number of pending completions.
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::handles::HandleRegistry;

    #[test]
    fn test_push_and_drain() {
        let mut registry = HandleRegistry::default();
        let queue = DeferredCompletions::new(2);
        let sender = queue.clone();

        sender.push(registry.mint(1, 0, None)).unwrap();
        sender.push(registry.mint(2, 0, None)).unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(
            sender.push(registry.mint(3, 0, None)),
            Err(SlotError::CapacityExceeded { capacity: 2 })
        );

        let mut ids = Vec::new();
        let drained = queue.drain(|handle| ids.push(crate::SlotItem::id(&handle)));
        assert_eq!(drained, 2);
        assert_eq!(ids, vec![1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cross_thread_push() {
        let queue = DeferredCompletions::new(16);
        let mut registry = HandleRegistry::default();
        let handles: Vec<_> = (0..8).map(|id| registry.mint(id, 0, None)).collect();

        let workers: Vec<_> = handles
            .chunks(4)
            .map(|chunk| {
                let sender = queue.clone();
                let chunk = chunk.to_vec();
                std::thread::spawn(move || {
                    for handle in chunk {
                        sender.push(handle).unwrap();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(queue.drain(|_| {}), 8);
    }
}
