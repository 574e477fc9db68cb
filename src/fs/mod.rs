//! Filesystem utilities for dotairc.

pub mod atomic;

pub use atomic::atomic_write_file;
