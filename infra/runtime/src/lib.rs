//! # Runtime
//!
//! Builds the [Tokio](https://tokio.rs) runtime used by the workspace binaries.
//!
//! ## Profiles
//! * **High Performance**: multi-threaded scheduler for the HTTP server.
//! * **Current Thread**: single-threaded scheduler for one-shot CLI commands,
//!   where every estimate is computed synchronously anyway.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[mlife_runtime::main(current_thread)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use mlife_derive::main;

use anyhow::anyhow;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Fallback worker count when parallelism cannot be detected.
const DEFAULT_WORKER_THREADS: usize = 4;
/// Upper bound accepted from `TOKIO_WORKER_THREADS`.
const MAX_WORKER_THREADS: usize = 1024;
const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

fn detected_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| (1..=MAX_WORKER_THREADS).contains(&n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(DEFAULT_WORKER_THREADS, std::num::NonZero::get)
            })
    })
}

/// Scheduler flavor of a [`RuntimeProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduler {
    CurrentThread,
    MultiThread { workers: usize },
}

/// Named runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeProfile {
    pub scheduler: Scheduler,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeProfile {
    fn default() -> Self {
        Self {
            scheduler: Scheduler::MultiThread { workers: detected_worker_threads() },
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: "mlife-worker".to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }
}

impl RuntimeProfile {
    /// Preset for the HTTP server.
    #[must_use]
    pub fn high_performance() -> Self {
        Self {
            scheduler: Scheduler::MultiThread { workers: detected_worker_threads() },
            stack_size: 4 * 1024 * 1024,
            thread_name: "mlife-hp".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
        }
    }

    /// Preset for short-lived, single request commands.
    #[must_use]
    pub fn current_thread() -> Self {
        Self {
            scheduler: Scheduler::CurrentThread,
            thread_name: "mlife-main".to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_worker_threads(mut self, workers: usize) -> Self {
        let workers = if workers == 0 {
            1
        } else if workers > MAX_WORKER_THREADS {
            MAX_WORKER_THREADS
        } else {
            workers
        };
        self.scheduler = Scheduler::MultiThread { workers };
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.thread_name = name;
        }
        self
    }
}

/// Builds a runtime for the given profile.
///
/// # Errors
/// Returns an error if the OS refuses to create the runtime threads or I/O driver.
pub fn build_runtime(profile: &RuntimeProfile) -> Result<Runtime> {
    debug!(profile = ?profile, "Building tokio runtime");

    let mut builder = match profile.scheduler {
        Scheduler::CurrentThread => Builder::new_current_thread(),
        Scheduler::MultiThread { workers } => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(workers.clamp(1, MAX_WORKER_THREADS));
            builder
        },
    };

    builder
        .thread_name(&profile.thread_name)
        .thread_stack_size(profile.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE))
        .thread_keep_alive(profile.thread_keep_alive)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}
