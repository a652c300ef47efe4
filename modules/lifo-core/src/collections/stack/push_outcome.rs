/// Result of a successful push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
  /// The element was stored without touching the backing allocation.
  Pushed,
  /// The backing buffer was regrown to the given capacity before storing the element.
  GrewTo {
    /// Capacity after growth.
    capacity: usize,
  },
}

impl PushOutcome {
  /// Returns `true` when the push had to regrow the backing buffer.
  #[must_use]
  pub const fn grew(&self) -> bool {
    matches!(self, Self::GrewTo { .. })
  }
}
