use alloc::boxed::Box;
use core::{fmt, iter};

mod link_node;


use link_node::LinkNode;

use crate::collections::stack::{PushOutcome, StackBackend, StackError};

/// LIFO stack backed by a singly-linked chain of owned nodes.
///
/// Each node owns the node below it and the stack owns the top node. The element count is cached so
/// [`len`](Self::len) does not walk the chain. Cloning copies every node, so two stacks never share
/// structure.
pub struct LinkedStack<T> {
  top: Option<Box<LinkNode<T>>>,
  len: usize,
}

impl<T> LinkedStack<T> {
  /// Creates an empty stack.
  #[must_use]
  pub const fn new() -> Self {
    Self { top: None, len: 0 }
  }

  /// Pushes an element onto the top of the stack.
  pub fn push(&mut self, item: T) -> PushOutcome {
    let next = self.top.take();
    self.top = Some(Box::new(LinkNode::new(item, next)));
    self.len += 1;
    PushOutcome::Pushed
  }

  /// Pops the most recently pushed element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    let node = self.top.take().ok_or(StackError::Empty)?;
    let (value, next) = node.into_parts();
    self.top = next;
    debug_assert!(self.len > 0);
    self.len -= 1;
    Ok(value)
  }

  /// Returns the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek(&self) -> Result<&T, StackError> {
    self.top.as_deref().map(LinkNode::value).ok_or(StackError::Empty)
  }

  /// Returns a mutable reference to the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when the stack holds no elements.
  pub fn peek_mut(&mut self) -> Result<&mut T, StackError> {
    self.top.as_deref_mut().map(LinkNode::value_mut).ok_or(StackError::Empty)
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.top.is_none()
  }

  /// Drops every stored element.
  pub fn clear(&mut self) {
    // Unlink node by node; the default recursive drop of a long chain can exhaust the call stack.
    let mut cursor = self.top.take();
    while let Some(mut node) = cursor {
      cursor = node.take_next();
    }
    self.len = 0;
  }

  fn nodes(&self) -> impl Iterator<Item = &LinkNode<T>> {
    iter::successors(self.top.as_deref(), |node| node.next())
  }
}

impl<T> StackBackend<T> for LinkedStack<T> {
  fn push(&mut self, item: T) -> PushOutcome {
    LinkedStack::push(self, item)
  }

  fn pop(&mut self) -> Result<T, StackError> {
    LinkedStack::pop(self)
  }

  fn peek(&self) -> Result<&T, StackError> {
    LinkedStack::peek(self)
  }

  fn peek_mut(&mut self) -> Result<&mut T, StackError> {
    LinkedStack::peek_mut(self)
  }

  fn len(&self) -> usize {
    LinkedStack::len(self)
  }

  fn is_empty(&self) -> bool {
    LinkedStack::is_empty(self)
  }

  fn clear(&mut self) {
    LinkedStack::clear(self);
  }
}

impl<T: Clone> Clone for LinkedStack<T> {
  fn clone(&self) -> Self {
    let mut top = None;
    let mut tail = &mut top;
    for node in self.nodes() {
      let fresh = tail.insert(Box::new(LinkNode::new(node.value().clone(), None)));
      tail = fresh.next_slot();
    }
    Self { top, len: self.len }
  }
}

impl<T> Drop for LinkedStack<T> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<T> Default for LinkedStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.nodes().zip(other.nodes()).all(|(left, right)| left.value() == right.value())
  }
}

impl<T: Eq> Eq for LinkedStack<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.nodes().map(LinkNode::value)).finish()
  }
}
