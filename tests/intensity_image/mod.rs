//! Module containing tests for grayscale reduction at the input boundary.
mod conversion;
