//! Module containing tests for the moment statistics.
