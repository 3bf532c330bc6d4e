//! # Domain Errors
//!
//! 記録操作で発生するエラー

use thiserror::Error;

use super::entities::calendar_date::CalendarDate;

/// 永続化の失敗（容量不足など）
///
/// メモリ上の変更は巻き戻さず、警告として呼び出し元に返す
#[derive(Debug, Error, Clone, PartialEq)]
#[error("failed to persist records: {0}")]
pub struct StorageError(pub String);

/// 写真のテキスト変換の失敗
#[derive(Debug, Error, Clone, PartialEq)]
#[error("failed to convert photo: {0}")]
pub struct ConversionError(pub String);

/// 記録の登録・編集エラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    /// 必須項目（日付・体重）が空
    #[error("{0} is required")]
    MissingField(&'static str),

    /// 編集で既存の別の日付に変更しようとした
    #[error("a record for {0} already exists; choose another date")]
    DuplicateDate(CalendarDate),

    /// 写真の変換に失敗したため登録全体を中止した
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
