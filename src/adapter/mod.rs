//! Adapter Layer
//!
//! 外部システム（ファイルシステム、描画形式、タイマー）との統合

pub mod config;
pub mod photo;
pub mod render;
pub mod scheduling;
pub mod store;
