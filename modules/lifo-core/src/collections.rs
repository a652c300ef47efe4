pub mod stack;

pub use stack::{
  ArrayStack, ArrayStackConfig, DEFAULT_CAPACITY, LinkedStack, PushOutcome, StackBackend, StackError, VecStackStorage,
};
