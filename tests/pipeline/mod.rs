//! Pipeline integration tests
//!
//! Exercise the buffer, spawn, parse, annotate flow and the reporters.

pub mod batch_tests;
pub mod reporter_tests;
