//! LIFO stacks with interchangeable array and linked backing stores.

mod array_stack;
mod array_stack_config;
mod linked_stack;
mod push_outcome;
mod stack_backend;
mod stack_error;
pub mod storage;

pub use array_stack::ArrayStack;
pub use array_stack_config::ArrayStackConfig;
pub use linked_stack::LinkedStack;
pub use push_outcome::PushOutcome;
pub use stack_backend::StackBackend;
pub use stack_error::StackError;
pub use storage::VecStackStorage;

/// Capacity used by [`ArrayStack::new`] when none is provided.
pub const DEFAULT_CAPACITY: usize = 10;

/// `tracing` target shared by stack diagnostics.
pub(crate) const LOG_TARGET: &str = "lifo::collections::stack";
