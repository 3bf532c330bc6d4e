//! # Photo Encoder Trait
//!
//! 写真ファイルのテキスト化を抽象化

use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::ConversionError;

/// 写真エンコーダ
///
/// バイナリの写真ファイルを、埋め込み可能なテキスト表現に変換する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PhotoEncoder: Send + Sync {
    /// 写真ファイルをテキストに変換する
    ///
    /// # Arguments
    ///
    /// * `path` - 写真ファイルのパス
    ///
    /// # Errors
    ///
    /// ファイルの読み込みや変換に失敗した場合にエラーを返す
    async fn to_text(&self, path: &Path) -> Result<String, ConversionError>;
}
