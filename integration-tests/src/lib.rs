//! Cross-crate tests for the Meander workspace.
//!
//! The actual tests live under `tests/`; this member only exists so they
//! can exercise the published crates together without becoming part of any
//! one of them.
