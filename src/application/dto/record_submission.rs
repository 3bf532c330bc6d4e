//! # Record Submission DTO
//!
//! 記録フォームの送信内容のData Transfer Object

use std::path::PathBuf;

/// 記録の送信内容
///
/// 追加・編集のどちらにも使う。編集中かどうかは送信内容ではなくユースケース側が保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSubmission {
    /// 日付（`YYYY-MM-DD`）
    pub date: String,
    /// 体重（入力されたテキストのまま）
    pub weight: String,
    /// 新しい写真ファイル（省略時は既存の写真を保持）
    pub photo_path: Option<PathBuf>,
}

impl RecordSubmission {
    /// 新しい送信内容を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use weightlog::application::dto::record_submission::RecordSubmission;
    ///
    /// let submission = RecordSubmission::new("2024-01-01", "70.5", None);
    ///
    /// assert_eq!(submission.date, "2024-01-01");
    /// assert!(submission.photo_path.is_none());
    /// ```
    pub fn new(
        date: impl Into<String>,
        weight: impl Into<String>,
        photo_path: Option<PathBuf>,
    ) -> Self {
        Self {
            date: date.into(),
            weight: weight.into(),
            photo_path,
        }
    }
}
