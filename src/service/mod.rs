//! Request validation ahead of the record store.

mod validation;
pub use validation::RequestValidator;
