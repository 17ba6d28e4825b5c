//! imprint-core
//!
//! Pure value types shared by the scoring engine and its callers: response
//! sets going in, score reports coming out. No instrument knowledge lives
//! here; this is the vocabulary persisted and rendered by other layers.

pub mod error;
pub mod models;
