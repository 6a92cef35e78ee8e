//! Configuration models shared across the crate.

pub mod config;
