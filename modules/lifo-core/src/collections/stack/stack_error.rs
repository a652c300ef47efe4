use core::fmt;

#[cfg(test)]
mod tests;

/// Errors that may arise while operating on a stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack contains no elements.
  Empty,
  /// The allocator could not provide the requested capacity.
  CapacityOverflow {
    /// Capacity that was asked for.
    requested: usize,
  },
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Empty => f.write_str("stack is empty"),
      | Self::CapacityOverflow { requested } => write!(f, "unable to grow stack capacity to {}", requested),
    }
  }
}

impl core::error::Error for StackError {}
