use crate::collections::stack::DEFAULT_CAPACITY;


/// Configuration object consumed by [`ArrayStack::from_config`](super::ArrayStack::from_config).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayStackConfig {
  initial_capacity: usize,
}

impl ArrayStackConfig {
  /// Creates a configuration using [`DEFAULT_CAPACITY`].
  #[must_use]
  pub const fn new() -> Self {
    Self { initial_capacity: DEFAULT_CAPACITY }
  }

  /// Overrides the capacity allocated up front. Zero is allowed; the first push then grows.
  #[must_use]
  pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }

  /// Returns the configured initial capacity.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }
}

impl Default for ArrayStackConfig {
  fn default() -> Self {
    Self::new()
  }
}
