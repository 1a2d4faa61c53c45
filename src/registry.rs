//! Process-wide classification registry.
//!
//! The registry holds at most one custom classification override for the
//! whole process. It is initialized exactly once, typically at application
//! start-up before concurrent traffic begins:
//!
//! ```
//! # use opresult::error::AppError;
//! if let Ok(registry) = opresult::registry::initialize() {
//!     registry.with_override(|cause| AppError::generic(cause));
//! }
//! ```
//!
//! Misuse (initializing twice, installing an override before initializing)
//! is a programmer error reported synchronously as [`RegistryError`]; it is
//! never classified into the [`AppError`] taxonomy.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::error::{classify, AppError, BoxError};

type OverrideFn = dyn Fn(BoxError) -> AppError + Send + Sync;

/// One-shot initialization flag. `compare_exchange` guarantees a single
/// winner under concurrent initialization.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// The installed override, if any. The lock provides safe publication so a
/// reader never observes a partially constructed handler.
static OVERRIDE: RwLock<Option<Arc<OverrideFn>>> = RwLock::new(None);

/// Registry misuse errors. These are precondition violations, reported
/// synchronously and kept out of the [`AppError`] taxonomy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// `initialize` was called a second time.
    #[error("classification registry is already initialized")]
    AlreadyInitialized,

    /// `install_override` was called before `initialize`.
    #[error("classification registry is not initialized")]
    NotInitialized,
}

/// Handle returned by a successful [`initialize`], for chaining
/// configuration calls.
#[derive(Debug)]
pub struct Registry {
    _private: (),
}

impl Registry {
    /// Installs the classification override, replacing any previous one.
    ///
    /// The override fully shadows the default rules in
    /// [`classify_with_registry`]. Only one override exists at a time; the
    /// last installed handler wins.
    pub fn with_override<H>(self, handler: H) -> Self
    where
        H: Fn(BoxError) -> AppError + Send + Sync + 'static,
    {
        store_override(Arc::new(handler));
        self
    }
}

/// Initializes the registry. Exactly one call per process succeeds.
///
/// Concurrent callers race on an atomic check-and-set: one receives the
/// [`Registry`] handle, every other call (then and later) receives
/// [`RegistryError::AlreadyInitialized`].
pub fn initialize() -> Result<Registry, RegistryError> {
    if INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_ok()
    {
        Ok(Registry { _private: () })
    } else {
        Err(RegistryError::AlreadyInitialized)
    }
}

/// Returns true once [`initialize`] has succeeded.
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::SeqCst)
}

/// Installs the classification override, replacing any previous one.
///
/// Fails with [`RegistryError::NotInitialized`] unless [`initialize`] has
/// already succeeded.
pub fn install_override<H>(handler: H) -> Result<(), RegistryError>
where
    H: Fn(BoxError) -> AppError + Send + Sync + 'static,
{
    if !is_initialized() {
        return Err(RegistryError::NotInitialized);
    }
    store_override(Arc::new(handler));
    Ok(())
}

/// Classifies a failure cause, delegating to the installed override if one
/// is present and to the default rules in [`classify`] otherwise.
pub fn classify_with_registry(cause: BoxError) -> AppError {
    let handler = OVERRIDE.read().unwrap().clone();
    match handler {
        Some(handler) => handler(cause),
        None => classify(cause),
    }
}

fn store_override(handler: Arc<OverrideFn>) {
    *OVERRIDE.write().unwrap() = Some(handler);
}
