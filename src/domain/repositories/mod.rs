//! # Domain Repositories
//!
//! 永続化と外部コラボレータの抽象化
//!
//! ## 特徴
//!
//! - 永続ストア・写真エンコーダ・グラフレンダラーはtraitの定義のみ（Adapter層で実装）
//! - RecordRepository は trait に依存し、具体的な保存先を知らない
//! - 依存性逆転の原則（DIP）を実現

pub mod chart_renderer;
pub mod durable_store;
pub mod photo_encoder;
pub mod record_repository;
