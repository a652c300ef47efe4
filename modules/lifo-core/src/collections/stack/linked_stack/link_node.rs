use alloc::boxed::Box;


/// Single link of a [`LinkedStack`](super::LinkedStack) chain; owns the node below it.
pub(crate) struct LinkNode<T> {
  value: T,
  next:  Option<Box<LinkNode<T>>>,
}

impl<T> LinkNode<T> {
  pub(crate) const fn new(value: T, next: Option<Box<Self>>) -> Self {
    Self { value, next }
  }

  pub(crate) const fn value(&self) -> &T {
    &self.value
  }

  pub(crate) const fn value_mut(&mut self) -> &mut T {
    &mut self.value
  }

  pub(crate) fn next(&self) -> Option<&Self> {
    self.next.as_deref()
  }

  /// Link slot below this node, used to append while building a chain top-down.
  pub(crate) const fn next_slot(&mut self) -> &mut Option<Box<Self>> {
    &mut self.next
  }

  /// Detaches and returns the rest of the chain.
  pub(crate) const fn take_next(&mut self) -> Option<Box<Self>> {
    self.next.take()
  }

  pub(crate) fn into_parts(self: Box<Self>) -> (T, Option<Box<Self>>) {
    let node = *self;
    (node.value, node.next)
  }
}
