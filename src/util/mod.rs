//! Utility functions.

pub mod formatters;
