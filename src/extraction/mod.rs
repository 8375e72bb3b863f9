//! Typed field extraction from listing JSON.

pub mod fields;

pub use fields::*;
