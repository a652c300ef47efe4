use core::fmt;

use tracing::{debug, trace};

use crate::collections::stack::{
  ArrayStackConfig, DEFAULT_CAPACITY, LOG_TARGET, PushOutcome, StackBackend, StackError, VecStackStorage,
};


/// LIFO stack backed by a contiguous, growable buffer.
///
/// When the buffer is full a push regrows it to `2 * len + 1` slots, which keeps pushes amortized
/// O(1) and also works from a zero capacity. The capacity controls ([`capacity`](Self::capacity),
/// [`ensure_capacity`](Self::ensure_capacity), [`trim_to_size`](Self::trim_to_size)) are public so
/// callers can manage reallocation cost explicitly.
pub struct ArrayStack<T> {
  storage: VecStackStorage<T>,
}

impl<T> ArrayStack<T> {
  /// Creates an empty stack with [`DEFAULT_CAPACITY`] slots.
  #[must_use]
  pub fn new() -> Self {
    Self::with_capacity(DEFAULT_CAPACITY)
  }

  /// Creates an empty stack with exactly `capacity` slots.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { storage: VecStackStorage::with_capacity(capacity) }
  }

  /// Creates an empty stack from the provided configuration.
  #[must_use]
  pub fn from_config(config: ArrayStackConfig) -> Self {
    Self::with_capacity(config.initial_capacity())
  }

  /// Pushes an element onto the top of the stack, growing the buffer first when it is full.
  pub fn push(&mut self, item: T) -> PushOutcome {
    let outcome = if self.storage.is_full() {
      let from = self.storage.capacity();
      let to = grown_capacity(self.storage.len());
      self.storage.grow(to);
      debug!(target: LOG_TARGET, from, to, len = self.storage.len(), "array stack buffer grown");
      PushOutcome::GrewTo { capacity: to }
    } else {
      PushOutcome::Pushed
    };
    self.storage.push(item);
    outcome
  }

  /// Pops the most recently pushed element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.storage.pop().ok_or(StackError::Empty)
  }

  /// Returns the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<&T, StackError> {
    self.storage.peek().ok_or(StackError::Empty)
  }

  /// Returns a mutable reference to the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
    self.storage.peek_mut().ok_or(StackError::Empty)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.storage.len()
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  /// Returns the number of slots in the buffer.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Regrows the buffer to exactly `capacity` slots when that exceeds the current capacity.
  ///
  /// Never shrinks; smaller or equal requests leave the stack untouched.
  pub fn ensure_capacity(&mut self, capacity: usize) {
    let from = self.storage.capacity();
    if capacity <= from {
      return;
    }
    self.storage.grow(capacity);
    trace!(target: LOG_TARGET, from, to = capacity, "array stack capacity ensured");
  }

  /// Fallible variant of [`ensure_capacity`](Self::ensure_capacity).
  ///
  /// # Errors
  ///
  /// Returns [`StackError::CapacityOverflow`] when the allocator cannot provide `capacity` slots.
  /// The stack is left unchanged in that case.
  pub fn try_ensure_capacity(&mut self, capacity: usize) -> Result<(), StackError> {
    let from = self.storage.capacity();
    if capacity <= from {
      return Ok(());
    }
    self.storage.try_grow(capacity).map_err(|_| StackError::CapacityOverflow { requested: capacity })?;
    trace!(target: LOG_TARGET, from, to = capacity, "array stack capacity ensured");
    Ok(())
  }

  /// Reallocates the buffer so that its capacity equals the number of stored elements.
  pub fn trim_to_size(&mut self) {
    let from = self.storage.capacity();
    self.storage.shrink_to_fit();
    trace!(target: LOG_TARGET, from, to = self.storage.capacity(), "array stack trimmed");
  }

  /// Drops every stored element; the capacity is kept.
  pub fn clear(&mut self) {
    self.storage.clear();
  }
}

const fn grown_capacity(len: usize) -> usize {
  len.saturating_mul(2).saturating_add(1)
}

impl<T> StackBackend<T> for ArrayStack<T> {
  fn push(&mut self, item: T) -> PushOutcome {
    ArrayStack::push(self, item)
  }

  fn pop(&mut self) -> Result<T, StackError> {
    ArrayStack::pop(self)
  }

  fn peek(&self) -> Result<&T, StackError> {
    ArrayStack::peek(self)
  }

  fn peek_mut(&mut self) -> Result<&mut T, StackError> {
    ArrayStack::peek_mut(self)
  }

  fn len(&self) -> usize {
    ArrayStack::len(self)
  }

  fn clear(&mut self) {
    ArrayStack::clear(self);
  }
}

impl<T: Clone> Clone for ArrayStack<T> {
  fn clone(&self) -> Self {
    Self { storage: self.storage.clone() }
  }
}

impl<T> Default for ArrayStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: PartialEq> PartialEq for ArrayStack<T> {
  fn eq(&self, other: &Self) -> bool {
    self.storage.as_slice() == other.storage.as_slice()
  }
}

impl<T: Eq> Eq for ArrayStack<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.storage.as_slice().iter().rev()).finish()
  }
}
