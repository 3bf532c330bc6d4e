//! Photo Ingestion
//!
//! 写真ファイルのData URL変換

pub mod data_url;
