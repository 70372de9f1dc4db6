//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs are separate structs (`NewLink`, `NewClick`) so store-assigned
//! fields like ids never appear half-initialized.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
