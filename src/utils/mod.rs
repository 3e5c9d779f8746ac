//! Utility modules for common functionality
//!
//! Provides the line-based terminal the session reads from and writes to.

pub mod terminal;

pub use terminal::Terminal;
