//! Filesystem utilities for readmequick.
//!
//! Session state and exported READMEs are always written atomically.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
