//! Core types and trait definitions for the trivia question bank.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! API crate and the storage backends both depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod category;
pub mod page;
pub mod question;
pub mod select;
pub mod store;

pub use category::{Category, CategoryIndex};
pub use question::{NewQuestion, Question};
