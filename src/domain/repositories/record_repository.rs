//! # Record Repository
//!
//! 体重記録の正規コレクションを保持し、変更のたびに永続ストアへ書き出す
//!
//! ## 不変条件
//!
//! - 日付はリポジトリ内で一意
//! - 写真は新しい写真が指定された場合のみ上書きされる（省略で消えることはない）
//! - 永続化の失敗はメモリ上の変更を巻き戻さない

use log::{debug, info, warn};
use std::sync::Arc;

use crate::domain::entities::calendar_date::CalendarDate;
use crate::domain::entities::record::Record;
use crate::domain::errors::{RecordError, StorageError};
use crate::domain::repositories::durable_store::DurableStore;

/// upsert で行われた変更の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertKind {
    /// 新しい記録を追加した
    Inserted,
    /// 同じ日付の既存記録に上書きした
    Merged,
    /// 編集中の記録を更新した（日付の変更を含む）
    Edited,
    /// 編集対象の記録が見つからず、何も変更しなかった
    EditTargetMissing,
}

/// upsert の結果
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertOutcome {
    pub kind: UpsertKind,
    /// 永続化に失敗した場合の警告
    pub storage_warning: Option<StorageError>,
}

impl UpsertOutcome {
    pub fn is_persisted(&self) -> bool {
        self.storage_warning.is_none()
    }
}

/// 記録リポジトリ
///
/// セッション開始時に `load` で構築し、セッション終了時に破棄する
pub struct RecordRepository<S: DurableStore> {
    store: Arc<S>,
    key: String,
    records: Vec<Record>,
    dirty: bool,
}

impl<S: DurableStore> RecordRepository<S> {
    /// 永続ストアから記録を読み込む
    ///
    /// キーが存在しない・読み込みに失敗した・内容が壊れている場合は空のコレクションで開始する
    ///
    /// # Arguments
    ///
    /// * `store` - 永続ストア
    /// * `key` - 記録を保存するキー
    pub fn load(store: Arc<S>, key: impl Into<String>) -> Self {
        let key = key.into();

        let records = match store.get(&key) {
            Ok(Some(blob)) => match Self::decode(&blob) {
                Ok(records) => {
                    info!("Loaded {} records from store key '{}'", records.len(), key);
                    records
                }
                Err(e) => {
                    warn!("Stored records under '{}' are corrupt, starting empty: {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("No existing records found under '{}', starting empty", key);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read records from store, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            store,
            key,
            records,
            dirty: false,
        }
    }

    /// 記録を追加または更新する
    ///
    /// # Arguments
    ///
    /// * `date` - 記録の日付
    /// * `weight` - 入力された体重（文字列のまま保存）
    /// * `photo` - 新しい写真（`None` の場合は既存の写真を保持）
    /// * `editing_key` - 編集中の記録の元の日付（追加モードでは `None`）
    ///
    /// # Errors
    ///
    /// 編集で既存の別の記録の日付に変更しようとした場合に `DuplicateDate` を返す。
    /// この場合メモリ上の状態は変更されない。
    pub fn upsert(
        &mut self,
        date: CalendarDate,
        weight: String,
        photo: Option<String>,
        editing_key: Option<&CalendarDate>,
    ) -> Result<UpsertOutcome, RecordError> {
        let kind = match editing_key {
            Some(original) => {
                if &date != original && self.position(&date).is_some() {
                    return Err(RecordError::DuplicateDate(date));
                }

                match self.position(original) {
                    Some(index) => {
                        let record = &mut self.records[index];
                        record.date = date;
                        record.weight = weight;
                        if photo.is_some() {
                            record.photo = photo;
                        }
                        UpsertKind::Edited
                    }
                    None => {
                        warn!("Record being edited no longer exists: {}", original);
                        UpsertKind::EditTargetMissing
                    }
                }
            }
            None => match self.position(&date) {
                Some(index) => {
                    let record = &mut self.records[index];
                    record.weight = weight;
                    if photo.is_some() {
                        record.photo = photo;
                    }
                    UpsertKind::Merged
                }
                None => {
                    self.records.push(Record { date, weight, photo });
                    UpsertKind::Inserted
                }
            },
        };

        debug!("Upsert applied: {:?}", kind);

        let storage_warning = self.persist().err();

        Ok(UpsertOutcome {
            kind,
            storage_warning,
        })
    }

    /// 日付で記録を検索する
    pub fn find(&self, date: &CalendarDate) -> Option<&Record> {
        self.records.iter().find(|r| &r.date == date)
    }

    /// 全記録（順序は問わない）
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 直近の永続化が失敗したままかどうか
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// 永続化を再試行する
    ///
    /// # Errors
    ///
    /// 書き込みに再び失敗した場合にエラーを返す
    pub fn flush(&mut self) -> Result<(), StorageError> {
        self.persist()
    }

    /// 記録を永続化用のJSONに変換する
    ///
    /// # Errors
    ///
    /// シリアライズに失敗した場合にエラーを返す
    pub fn encode(records: &[Record]) -> Result<String, StorageError> {
        serde_json::to_string(records).map_err(|e| StorageError(e.to_string()))
    }

    /// 永続化用のJSONから記録を復元する
    ///
    /// 同じ日付が複数含まれる場合は最初の記録を残す
    ///
    /// # Errors
    ///
    /// JSONとして解釈できない場合にエラーを返す
    pub fn decode(blob: &str) -> Result<Vec<Record>, serde_json::Error> {
        let decoded: Vec<Record> = serde_json::from_str(blob)?;

        let mut records: Vec<Record> = Vec::with_capacity(decoded.len());
        for record in decoded {
            if records.iter().any(|r| r.date == record.date) {
                warn!("Dropping duplicate stored record for {}", record.date);
                continue;
            }
            records.push(record);
        }

        Ok(records)
    }

    fn position(&self, date: &CalendarDate) -> Option<usize> {
        self.records.iter().position(|r| &r.date == date)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let result = Self::encode(&self.records).and_then(|blob| self.store.set(&self.key, &blob));

        match &result {
            Ok(()) => {
                self.dirty = false;
                debug!("Persisted {} records under '{}'", self.records.len(), self.key);
            }
            Err(e) => {
                self.dirty = true;
                warn!("Failed to persist records: {}", e);
            }
        }

        result
    }
}
