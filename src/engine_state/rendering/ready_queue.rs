//! Hand-off channel carrying freshly meshed chunks to the upload step.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::warn;

use crate::engine_state::voxels::chunk::Chunk;

/// A multi-producer queue of chunks whose mesh is ready for upload.
///
/// Clones share the same queue. Pushing and popping never block. The queue carries chunk
/// handles, not meshes: the consumer copies the latest buffers out of the chunk when it
/// pops it, so a chunk queued twice before a drain is uploaded with its newest mesh.
#[derive(Clone)]
pub struct ReadyQueue {
    sender: Sender<Arc<Chunk>>,
    receiver: Receiver<Arc<Chunk>>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Queues a chunk whose mesh has just been rebuilt.
    pub fn push(&self, chunk: Arc<Chunk>) {
        // The queue owns a receiver, so the channel cannot be disconnected here.
        if let Err(err) = self.sender.send(chunk) {
            warn!(
                "Ready queue disconnected, dropping chunk {}",
                err.into_inner().coordinate()
            );
        }
    }

    /// Takes the oldest queued chunk without blocking.
    pub fn pop(&self) -> Option<Arc<Chunk>> {
        self.receiver.try_recv().ok()
    }

    /// Takes every chunk queued at the time of the call.
    pub fn drain(&self) -> Vec<Arc<Chunk>> {
        self.receiver.try_iter().collect()
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        Self::new()
    }
}
