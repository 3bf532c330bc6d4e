//! Scheduling
//!
//! 遅延実行とデバウンス

pub mod debouncer;
