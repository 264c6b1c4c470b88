//! Type-erased registry of initialized feature slices.
//!
//! Each feature crate builds its immutable state once at startup and hands it
//! to the kernel as an [`InitializedSlice`]; handlers look it up by type.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Immutable feature state shared across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Short feature name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

/// A registered slice keyed by its concrete type.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.state.name()
    }

    /// Downcasts to the concrete slice type.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}
