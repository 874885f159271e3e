//! Per-chunk mesh storage guarded by one lock.
//!
//! The slot owns a chunk's live vertex and index buffers. Everything that touches them goes
//! through a scoped method here: the lock is taken inside the call and released before it
//! returns, so no caller can carry the lock into a render backend call.

use parking_lot::Mutex;

use super::mesh::MeshBuffers;

/// Lifecycle of a chunk's mesh.
///
/// `Unbuilt → Building → Ready → Uploaded`. A rebuild from `Ready` or `Uploaded` re-enters
/// `Building` and overwrites the buffers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshState {
    /// Never built
    Unbuilt,
    /// A build holds the lock
    Building,
    /// Built and not yet taken for upload
    Ready,
    /// Taken for upload; nothing new since
    Uploaded,
}

/// What the upload step must do with a ready mesh.
#[derive(Debug, PartialEq)]
pub enum PendingUpload {
    /// Upload this copy of the buffers
    Upload(MeshBuffers),
    /// The mesh became empty; drop the previously uploaded one
    Release,
}

#[derive(Debug)]
struct SlotContents {
    buffers: MeshBuffers,
    state: MeshState,
    /// Whether the backend currently holds a mesh for this chunk.
    resident: bool,
}

/// Lock-guarded mesh buffers of one chunk.
#[derive(Debug)]
pub struct MeshSlot {
    contents: Mutex<SlotContents>,
}

impl MeshSlot {
    /// Creates an empty, unbuilt slot.
    pub fn new() -> Self {
        Self {
            contents: Mutex::new(SlotContents {
                buffers: MeshBuffers::new(),
                state: MeshState::Unbuilt,
                resident: false,
            }),
        }
    }

    /// Clears the buffers and refills them with `build`, all under the lock.
    ///
    /// The build always runs to completion before the lock is released, so readers never
    /// see a half-built mesh.
    pub fn rebuild<F>(&self, build: F)
    where
        F: FnOnce(&mut MeshBuffers),
    {
        let mut contents = self.contents.lock();
        contents.state = MeshState::Building;
        contents.buffers.clear();
        build(&mut contents.buffers);
        contents.state = MeshState::Ready;
    }

    /// Runs `read` against the current buffers under the lock.
    pub fn read<R>(&self, read: impl FnOnce(&MeshBuffers) -> R) -> R {
        read(&self.contents.lock().buffers)
    }

    /// Copies the current buffers out.
    pub fn snapshot(&self) -> MeshBuffers {
        self.read(MeshBuffers::clone)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> MeshState {
        self.contents.lock().state
    }

    /// Whether the backend holds a mesh for this chunk.
    pub fn is_resident(&self) -> bool {
        self.contents.lock().resident
    }

    /// Claims a ready mesh for upload.
    ///
    /// Copies the buffers under the lock and marks the mesh as uploaded. The caller performs
    /// the actual backend call after this returns.
    ///
    /// # Returns
    /// - `None` if no new mesh is ready, or the new mesh is empty and nothing was resident
    /// - `Some(Upload)` with a copy of non-empty buffers
    /// - `Some(Release)` if the new mesh is empty but an older one is resident
    pub fn take_pending_upload(&self) -> Option<PendingUpload> {
        let mut contents = self.contents.lock();
        if contents.state != MeshState::Ready {
            return None;
        }
        contents.state = MeshState::Uploaded;

        if contents.buffers.is_empty() {
            if contents.resident {
                contents.resident = false;
                return Some(PendingUpload::Release);
            }
            return None;
        }

        contents.resident = true;
        Some(PendingUpload::Upload(contents.buffers.clone()))
    }

    /// Forgets backend residency.
    ///
    /// # Returns
    /// `true` if a mesh was resident, meaning the caller must release it from the backend.
    pub fn release(&self) -> bool {
        std::mem::replace(&mut self.contents.lock().resident, false)
    }
}

impl Default for MeshSlot {
    fn default() -> Self {
        Self::new()
    }
}
