use crate::collections::stack::{PushOutcome, StackError};

/// Contract shared by every stack backing store.
///
/// Code written against this trait works with either [`ArrayStack`](super::ArrayStack) or
/// [`LinkedStack`](super::LinkedStack) without changes.
pub trait StackBackend<T> {
  /// Pushes an element onto the top of the stack.
  fn push(&mut self, item: T) -> PushOutcome;

  /// Pops the most recently pushed element from the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  fn pop(&mut self) -> Result<T, StackError>;

  /// Returns a reference to the element at the top of the stack without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  fn peek(&self) -> Result<&T, StackError>;

  /// Returns a mutable reference to the element at the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  fn peek_mut(&mut self) -> Result<&mut T, StackError>;

  /// Returns the number of elements currently stored.
  fn len(&self) -> usize;

  /// Indicates whether the stack is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drops every stored element.
  fn clear(&mut self);
}
