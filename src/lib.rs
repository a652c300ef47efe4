#![deny(missing_docs)]

//! Facade crate for the lifo workspace.
//!
//! Re-exports the `no_std` stack collections from `lifo-core-rs`.

pub use lifo_core_rs::collections::stack::{
  ArrayStack, ArrayStackConfig, DEFAULT_CAPACITY, LinkedStack, PushOutcome, StackBackend, StackError, VecStackStorage,
};


/// Returns the crate version recorded at build time.
#[must_use]
pub const fn crate_version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}
