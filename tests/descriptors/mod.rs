//! Module containing tests for the `Descriptors` facade.
mod descriptors_facade;
