//! Helper utilities for BDD tests

pub mod tables;
