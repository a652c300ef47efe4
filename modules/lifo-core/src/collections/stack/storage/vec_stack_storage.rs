use alloc::{collections::TryReserveError, vec::Vec};


/// Contiguous stack storage backed by `alloc::vec::Vec`.
///
/// The reported capacity is a logical limit kept apart from the allocation, because `Vec` is free
/// to over-allocate while callers expect the exact capacity they asked for.
pub struct VecStackStorage<T> {
  data:  Vec<T>,
  limit: usize,
}

impl<T> VecStackStorage<T> {
  /// Creates a storage buffer with the provided capacity limit.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { data: Vec::with_capacity(capacity), limit: capacity }
  }

  /// Returns the number of initialized elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Returns whether the storage currently holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Returns the capacity limit.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.limit
  }

  /// Returns whether every slot up to the capacity limit is occupied.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.data.len() >= self.limit
  }

  /// Pushes an element onto the end of the storage without additional checks.
  ///
  /// Callers grow the storage first when it is full.
  pub fn push(&mut self, value: T) {
    debug_assert!(self.len() < self.limit);
    self.data.push(value);
  }

  /// Pops the last element from storage.
  pub fn pop(&mut self) -> Option<T> {
    self.data.pop()
  }

  /// Returns a reference to the last element if it exists.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.data.last()
  }

  /// Returns a mutable reference to the last element if it exists.
  pub fn peek_mut(&mut self) -> Option<&mut T> {
    self.data.last_mut()
  }

  /// Drops all elements while keeping the capacity limit.
  pub fn clear(&mut self) {
    self.data.clear();
  }

  /// Grows the capacity limit to `new_capacity`; smaller or equal values are ignored.
  ///
  /// # Panics
  ///
  /// Panics if the new allocation size overflows `isize::MAX` bytes.
  pub fn grow(&mut self, new_capacity: usize) {
    if new_capacity <= self.limit {
      return;
    }
    self.data.reserve_exact(new_capacity - self.data.len());
    self.limit = new_capacity;
  }

  /// Attempts to grow the capacity limit to `new_capacity`; smaller or equal values are ignored.
  ///
  /// # Errors
  ///
  /// Returns the allocator's [`TryReserveError`] when the buffer cannot be enlarged. The storage is
  /// left untouched in that case.
  pub fn try_grow(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
    if new_capacity <= self.limit {
      return Ok(());
    }
    self.data.try_reserve_exact(new_capacity - self.data.len())?;
    self.limit = new_capacity;
    Ok(())
  }

  /// Shrinks the capacity limit down to the number of stored elements.
  pub fn shrink_to_fit(&mut self) {
    self.data.shrink_to_fit();
    self.limit = self.data.len();
  }

  /// Returns the stored elements from bottom to top.
  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }
}

impl<T: Clone> Clone for VecStackStorage<T> {
  fn clone(&self) -> Self {
    let mut data = Vec::with_capacity(self.limit);
    data.extend_from_slice(&self.data);
    Self { data, limit: self.limit }
  }
}

impl<T> Default for VecStackStorage<T> {
  fn default() -> Self {
    Self::with_capacity(0)
  }
}
