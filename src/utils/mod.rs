//! Utility functions and helpers

pub mod address;
