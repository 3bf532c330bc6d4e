//! # Durable Store Trait
//!
//! 単一キーに対するシリアライズ済みデータの永続化を抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::errors::StorageError;

/// 永続ストア
///
/// キーごとに1つの文字列を保持する汎用的なキーバリューストア
#[cfg_attr(test, automock)]
pub trait DurableStore {
    /// 値を読み込む
    ///
    /// # Returns
    ///
    /// キーが存在しない場合は `None`
    ///
    /// # Errors
    ///
    /// ストアの読み込みに失敗した場合にエラーを返す
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 値を書き込む（部分更新はせず、常に全体を置き換える）
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合にエラーを返す
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
