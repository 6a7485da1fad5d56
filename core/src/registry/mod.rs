//! Object handle registry
//!
//! Scripts refer to graphics resources through opaque integer handles. The
//! registry is the arena mapping those handles to driver-allocated object
//! names. Handles are minted on the submitting thread without touching the
//! driver; names are bound later, when the creating work item executes on
//! the render thread.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use glrelay_common::{NativeName, ObjectHandle};
use hashbrown::HashMap;

use crate::error::RegistryError;

/// Handle -> native name table with atomic handle allocation.
///
/// Allocation must be callable from the submitting thread while the render
/// thread is mid-drain, so it is an independent atomic counter. The name
/// table is only mutated by work items on the render thread; FIFO execution
/// order is what keeps create-before-delete correct.
#[derive(Debug)]
pub struct ObjectRegistry {
    next_handle: AtomicU32,
    names: Mutex<HashMap<ObjectHandle, NativeName>>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self {
            next_handle: AtomicU32::new(1),
            names: Mutex::new(HashMap::new()),
        }
    }

    /// Mint a fresh handle. Never returns [`ObjectHandle::NONE`] and never
    /// reuses a previously allocated handle.
    pub fn allocate(&self) -> ObjectHandle {
        let raw = self.next_handle.fetch_add(1, Ordering::Relaxed);
        ObjectHandle::from_raw(raw)
    }

    /// Store the driver name for a previously allocated handle.
    pub fn bind(&self, handle: ObjectHandle, name: NativeName) {
        self.lock().insert(handle, name);
    }

    /// Resolve a handle to its driver name.
    ///
    /// [`ObjectHandle::NONE`] resolves to native name 0, the deliberate null
    /// binding. An unknown non-zero handle is an internal-consistency fault.
    pub fn lookup(&self, handle: ObjectHandle) -> Result<NativeName, RegistryError> {
        if handle.is_none() {
            return Ok(0);
        }
        self.lock()
            .get(&handle)
            .copied()
            .ok_or(RegistryError::UnknownHandle(handle))
    }

    /// Find the handle bound to a driver name.
    ///
    /// Linear scan; registries stay in the hundreds of entries and only
    /// introspection calls need the reverse direction.
    pub fn reverse_lookup(&self, name: NativeName) -> Option<ObjectHandle> {
        self.lock()
            .iter()
            .find(|(_, bound)| **bound == name)
            .map(|(handle, _)| *handle)
    }

    /// Drop a handle, returning the bound name (if any) so the caller can
    /// delete the driver object. Removing a never-bound handle yields `None`.
    pub fn remove(&self, handle: ObjectHandle) -> Option<NativeName> {
        self.lock().remove(&handle)
    }

    /// Number of live handle bindings.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ObjectHandle, NativeName>> {
        self.names.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
