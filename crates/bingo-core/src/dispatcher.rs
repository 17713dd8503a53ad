//! Callback dispatcher
//!
//! The callback convention needs somewhere to drive a submission stream that
//! the caller never sees. The runtime is chosen when the task is spawned, not
//! when the dispatcher is built:
//!
//! 1. A handle pinned with [`Dispatcher::from_handle`]
//! 2. The caller's ambient tokio runtime
//! 3. A small runtime owned by the dispatcher (e.g. a host calling in over FFI,
//!    or an SDK built inside a runtime that has since shut down)

use crate::error::{Error, Result};
use std::future::Future;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;
use tracing::debug;

/// Worker threads of a dispatcher-owned runtime
const OWNED_WORKER_THREADS: usize = 1;

/// Spawns callback-convention submissions
pub struct Dispatcher {
    /// Always used when set
    pinned: Option<Handle>,

    /// Used when nothing is pinned and the caller is outside any runtime
    fallback: Handle,

    /// Runtime behind `fallback`, when the dispatcher built it
    owned: Option<Runtime>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pinned", &self.pinned.is_some())
            .field("owns_runtime", &self.owns_runtime())
            .finish()
    }
}

impl Dispatcher {
    /// Spawn on the caller's runtime, falling back to a private one
    ///
    /// The private runtime is built up front so that spawning never fails.
    ///
    /// # Returns
    ///
    /// - `Err(Error::Runtime)`: If the private runtime could not be built
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(OWNED_WORKER_THREADS)
            .thread_name("bingo-dispatch")
            .enable_all()
            .build()
            .map_err(|e| Error::runtime(format!("Failed to build dispatcher runtime: {}", e)))?;

        debug!("Dispatcher fallback runtime started");

        Ok(Self {
            pinned: None,
            fallback: runtime.handle().clone(),
            owned: Some(runtime),
        })
    }

    /// Always spawn onto `handle`
    ///
    /// The caller keeps that runtime alive for as long as callbacks are
    /// expected; tasks spawned after it shuts down never run.
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            pinned: Some(handle.clone()),
            fallback: handle,
            owned: None,
        }
    }

    /// Whether this dispatcher owns its fallback runtime
    pub fn owns_runtime(&self) -> bool {
        self.owned.is_some()
    }

    /// Spawn a task
    ///
    /// Dropping the returned handle detaches the task; it is not cancelled.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.target().spawn(future)
    }

    fn target(&self) -> Handle {
        if let Some(handle) = &self.pinned {
            return handle.clone();
        }
        Handle::try_current().unwrap_or_else(|_| self.fallback.clone())
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        // shutdown_background never blocks, so dropping from async code is fine
        if let Some(runtime) = self.owned.take() {
            runtime.shutdown_background();
        }
    }
}
