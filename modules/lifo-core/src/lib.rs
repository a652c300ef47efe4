#![no_std]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! LIFO stack collections for `no_std` + `alloc` environments.
//!
//! Two interchangeable backing stores share the [`StackBackend`](collections::stack::StackBackend)
//! contract: [`ArrayStack`](collections::stack::ArrayStack) keeps elements in a growable contiguous
//! buffer, while [`LinkedStack`](collections::stack::LinkedStack) keeps them in a chain of owned nodes.

extern crate alloc;

/// Stack collections and their storage layer.
pub mod collections;
