//! Command implementations for the lineup optimizer CLI

pub mod common;
pub mod optimize;
pub mod pools;

pub use common::resolve_salary_cap;
