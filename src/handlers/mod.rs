//! HTTP handlers for recipe CRUD and AI suggestions.

pub mod recipe;
pub mod suggest;
pub use recipe::*;
pub use suggest::*;
