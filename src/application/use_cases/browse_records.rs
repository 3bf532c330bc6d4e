//! # Browse Records Use Case
//!
//! 記録一覧と写真ギャラリーの表示ユースケース

use crate::domain::entities::record::Record;
use crate::domain::repositories::durable_store::DurableStore;
use crate::domain::repositories::record_repository::RecordRepository;
use crate::domain::services::view_projection::ViewProjection;

/// 記録一覧の1行
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub date: String,
    pub weight: String,
    pub has_photo: bool,
    /// グラフに含まれるかどうか（体重を数値として解釈できるか）
    pub charted: bool,
}

impl RecordRow {
    fn from_record(record: &Record) -> Self {
        Self {
            date: record.date.to_string(),
            weight: record.weight.clone(),
            has_photo: record.has_photo(),
            charted: record.weight_value().is_some(),
        }
    }

    /// 一覧表示用のテキスト（例: `2024-01-01 : 70 kg`）
    pub fn display_text(&self) -> String {
        format!("{} : {} kg", self.date, self.weight)
    }
}

/// 写真ギャラリーの1枚
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub date: String,
    pub photo: String,
}

/// 記録閲覧ユースケース
///
/// 一覧・ギャラリーは状態を持たず、呼び出しのたびにリポジトリから再計算する
pub struct BrowseRecordsUseCase;

impl BrowseRecordsUseCase {
    /// 日付の新しい順の記録一覧
    pub fn list<S: DurableStore>(repository: &RecordRepository<S>) -> Vec<RecordRow> {
        ViewProjection::records_by_date_descending(repository.all())
            .into_iter()
            .map(RecordRow::from_record)
            .collect()
    }

    /// 日付の新しい順の写真ギャラリー
    pub fn gallery<S: DurableStore>(repository: &RecordRepository<S>) -> Vec<GalleryItem> {
        ViewProjection::photos_by_date_descending(repository.all())
            .into_iter()
            .filter_map(|record| {
                record.photo.as_ref().map(|photo| GalleryItem {
                    date: record.date.to_string(),
                    photo: photo.clone(),
                })
            })
            .collect()
    }
}
