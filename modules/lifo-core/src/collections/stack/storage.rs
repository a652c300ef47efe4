//! Storage layer abstractions for array-backed stacks.

mod vec_stack_storage;

pub use vec_stack_storage::VecStackStorage;
