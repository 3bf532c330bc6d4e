//! # Submit Record Use Case
//!
//! 記録の追加・編集ユースケース（編集セッションの管理を含む）

use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::record_submission::RecordSubmission;
use crate::domain::entities::calendar_date::CalendarDate;
use crate::domain::entities::record::Record;
use crate::domain::errors::RecordError;
use crate::domain::repositories::durable_store::DurableStore;
use crate::domain::repositories::photo_encoder::PhotoEncoder;
use crate::domain::repositories::record_repository::{RecordRepository, UpsertOutcome};

/// 記録の追加・編集ユースケース
///
/// 同時に編集できる記録は1件まで。編集中の記録は元の日付で識別し、永続化はしない。
pub struct SubmitRecordUseCase<P: PhotoEncoder> {
    photo_encoder: Arc<P>,
    editing: Option<CalendarDate>,
}

impl<P: PhotoEncoder> SubmitRecordUseCase<P> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `photo_encoder` - 写真エンコーダ
    pub fn new(photo_encoder: Arc<P>) -> Self {
        Self {
            photo_encoder,
            editing: None,
        }
    }

    /// 記録の編集を開始する
    ///
    /// # Returns
    ///
    /// フォームに表示する編集対象の記録。存在しない日付の場合は `None` で、編集状態は変わらない。
    pub fn begin_edit<S: DurableStore>(
        &mut self,
        repository: &RecordRepository<S>,
        date: &CalendarDate,
    ) -> Option<Record> {
        let record = repository.find(date)?.clone();
        info!("Editing record {}", date);
        self.editing = Some(date.clone());
        Some(record)
    }

    /// 編集を取り消す
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// 編集中の記録の元の日付
    pub fn editing(&self) -> Option<&CalendarDate> {
        self.editing.as_ref()
    }

    /// 送信内容を記録に反映する
    ///
    /// 写真の変換が完了するまで反映を保留し、変換に失敗した場合は何も変更しない。
    /// 反映に成功すると（永続化に失敗した場合も）編集状態を終了する。
    ///
    /// # Arguments
    ///
    /// * `repository` - 記録リポジトリ
    /// * `submission` - 送信内容
    ///
    /// # Returns
    ///
    /// 反映結果（永続化の警告を含む）
    ///
    /// # Errors
    ///
    /// 必須項目が空、写真の変換失敗、既存の日付への変更の場合にエラーを返す
    pub async fn execute<S: DurableStore>(
        &mut self,
        repository: &mut RecordRepository<S>,
        submission: RecordSubmission,
    ) -> Result<UpsertOutcome, RecordError> {
        if submission.date.trim().is_empty() {
            return Err(RecordError::MissingField("date"));
        }
        if submission.weight.trim().is_empty() {
            return Err(RecordError::MissingField("weight"));
        }

        let photo = match &submission.photo_path {
            Some(path) => match self.photo_encoder.to_text(path).await {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("Photo conversion failed for {}: {}", path.display(), e);
                    return Err(e.into());
                }
            },
            None => None,
        };

        let outcome = repository.upsert(
            CalendarDate::new(submission.date),
            submission.weight,
            photo,
            self.editing.as_ref(),
        )?;

        self.editing = None;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ConversionError, StorageError};
    use crate::domain::repositories::photo_encoder::MockPhotoEncoder;
    use crate::domain::repositories::record_repository::UpsertKind;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl DurableStore for MockStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn new_repository() -> RecordRepository<MockStore> {
        RecordRepository::load(Arc::new(MockStore::default()), "lambRecords")
    }

    fn encoder_returning(text: &'static str) -> Arc<MockPhotoEncoder> {
        let mut encoder = MockPhotoEncoder::new();
        encoder
            .expect_to_text()
            .returning(move |_| Ok(text.to_string()));
        Arc::new(encoder)
    }

    fn unused_encoder() -> Arc<MockPhotoEncoder> {
        let mut encoder = MockPhotoEncoder::new();
        encoder.expect_to_text().never();
        Arc::new(encoder)
    }

    #[tokio::test]
    async fn test_add_record_without_photo() {
        let mut repository = new_repository();
        let mut use_case = SubmitRecordUseCase::new(unused_encoder());

        let outcome = use_case
            .execute(&mut repository, RecordSubmission::new("2024-01-01", "70", None))
            .await
            .unwrap();

        assert_eq!(outcome.kind, UpsertKind::Inserted);
        assert_eq!(
            repository.find(&CalendarDate::new("2024-01-01")).unwrap().weight,
            "70"
        );
    }

    #[tokio::test]
    async fn test_add_record_with_photo() {
        let mut repository = new_repository();
        let mut use_case = SubmitRecordUseCase::new(encoder_returning("data:image/png;base64,AAAA"));

        use_case
            .execute(
                &mut repository,
                RecordSubmission::new("2024-01-01", "70", Some(PathBuf::from("lamb.png"))),
            )
            .await
            .unwrap();

        let record = repository.find(&CalendarDate::new("2024-01-01")).unwrap();
        assert_eq!(record.photo.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let mut repository = new_repository();
        let mut use_case = SubmitRecordUseCase::new(unused_encoder());

        let result = use_case
            .execute(&mut repository, RecordSubmission::new("", "70", None))
            .await;
        assert_eq!(result, Err(RecordError::MissingField("date")));

        let result = use_case
            .execute(&mut repository, RecordSubmission::new("2024-01-01", "  ", None))
            .await;
        assert_eq!(result, Err(RecordError::MissingField("weight")));
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn test_conversion_failure_aborts_submission() {
        let mut repository = new_repository();
        repository
            .upsert(CalendarDate::new("2024-01-01"), "70".to_string(), None, None)
            .unwrap();

        let mut encoder = MockPhotoEncoder::new();
        encoder
            .expect_to_text()
            .returning(|_| Err(ConversionError("unreadable".to_string())));
        let mut use_case = SubmitRecordUseCase::new(Arc::new(encoder));
        use_case.begin_edit(&repository, &CalendarDate::new("2024-01-01"));

        let result = use_case
            .execute(
                &mut repository,
                RecordSubmission::new("2024-01-01", "99", Some(PathBuf::from("broken.png"))),
            )
            .await;

        assert_eq!(
            result,
            Err(RecordError::Conversion(ConversionError(
                "unreadable".to_string()
            )))
        );
        assert_eq!(
            repository.find(&CalendarDate::new("2024-01-01")).unwrap().weight,
            "70"
        );
        // 編集状態は維持される
        assert_eq!(use_case.editing(), Some(&CalendarDate::new("2024-01-01")));
    }

    #[tokio::test]
    async fn test_edit_session_renames_and_ends() {
        let mut repository = new_repository();
        let mut use_case = SubmitRecordUseCase::new(unused_encoder());
        use_case
            .execute(&mut repository, RecordSubmission::new("2024-01-01", "70", None))
            .await
            .unwrap();

        let prefill = use_case
            .begin_edit(&repository, &CalendarDate::new("2024-01-01"))
            .unwrap();
        assert_eq!(prefill.weight, "70");

        let outcome = use_case
            .execute(&mut repository, RecordSubmission::new("2024-01-03", "69", None))
            .await
            .unwrap();

        assert_eq!(outcome.kind, UpsertKind::Edited);
        assert!(use_case.editing().is_none());
        assert!(repository.find(&CalendarDate::new("2024-01-01")).is_none());
        assert_eq!(
            repository.find(&CalendarDate::new("2024-01-03")).unwrap().weight,
            "69"
        );
    }

    #[tokio::test]
    async fn test_edit_into_existing_date_keeps_session() {
        let mut repository = new_repository();
        let mut use_case = SubmitRecordUseCase::new(unused_encoder());
        for (date, weight) in [("2024-01-01", "70"), ("2024-01-02", "71")] {
            use_case
                .execute(&mut repository, RecordSubmission::new(date, weight, None))
                .await
                .unwrap();
        }

        use_case.begin_edit(&repository, &CalendarDate::new("2024-01-01"));
        let result = use_case
            .execute(&mut repository, RecordSubmission::new("2024-01-02", "50", None))
            .await;

        assert_eq!(
            result,
            Err(RecordError::DuplicateDate(CalendarDate::new("2024-01-02")))
        );
        assert_eq!(use_case.editing(), Some(&CalendarDate::new("2024-01-01")));
        assert_eq!(
            repository.find(&CalendarDate::new("2024-01-01")).unwrap().weight,
            "70"
        );
        assert_eq!(
            repository.find(&CalendarDate::new("2024-01-02")).unwrap().weight,
            "71"
        );
    }

    #[test]
    fn test_begin_edit_unknown_date_is_noop() {
        let repository = new_repository();
        let mut use_case = SubmitRecordUseCase::new(unused_encoder());

        assert!(use_case
            .begin_edit(&repository, &CalendarDate::new("2024-01-01"))
            .is_none());
        assert!(use_case.editing().is_none());
    }

    #[test]
    fn test_cancel_edit() {
        let mut repository = new_repository();
        repository
            .upsert(CalendarDate::new("2024-01-01"), "70".to_string(), None, None)
            .unwrap();
        let mut use_case = SubmitRecordUseCase::new(unused_encoder());

        use_case.begin_edit(&repository, &CalendarDate::new("2024-01-01"));
        use_case.cancel_edit();

        assert!(use_case.editing().is_none());
    }
}
