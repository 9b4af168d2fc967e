//! Integration test crate for Lumina.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every lumina crate to verify they work together.

#[cfg(test)]
mod adapter;

#[cfg(test)]
mod tools;
