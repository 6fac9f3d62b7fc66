// catalog/src/state.rs
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared, interior-mutable state behind a view.
///
/// Cloning the handle shares the state, so a submission running on one task
/// and a render on another observe the same draft and in-flight flag.
///
/// IMPORTANT: guards are blocking and MUST be dropped before any `.await`.
#[derive(Debug)]
pub struct ViewState<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> ViewState<T> {
  pub fn new(data: T) -> Self {
    ViewState(Arc::new(RwLock::new(data)))
  }

  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Runs `f` under the write lock and returns its result; the guard never escapes.
  pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.0.write();
    f(&mut *guard)
  }
}

impl<T: Send + Sync + 'static> Clone for ViewState<T> {
  fn clone(&self) -> Self {
    ViewState(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for ViewState<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
