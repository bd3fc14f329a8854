//! restforge library - generates strongly-typed Rust REST client builders
//! from service declaration schemas.

#![deny(unsafe_code)]

pub mod generation;
pub mod infrastructure;
