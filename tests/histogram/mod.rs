//! Module containing tests for the intensity probability model.
