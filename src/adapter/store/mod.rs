//! Durable Store Implementations
//!
//! Domain層のDurableStoreトレイトの実装

pub mod json_file_store;
