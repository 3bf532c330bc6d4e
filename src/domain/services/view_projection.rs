//! # View Projection Service
//!
//! 記録一覧と写真ギャラリーの表示順を導出する読み取り専用ビュー

use crate::domain::entities::record::Record;

/// ビュー射影
///
/// 保持する状態はなく、呼び出しのたびに記録から再計算する
pub struct ViewProjection;

impl ViewProjection {
    /// 日付の新しい順に並べた記録一覧
    ///
    /// 解釈できない日付はエポック（1970-01-01）として扱う
    pub fn records_by_date_descending(records: &[Record]) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = records.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// 写真のある記録だけを日付の新しい順に並べたギャラリー
    pub fn photos_by_date_descending(records: &[Record]) -> Vec<&Record> {
        Self::records_by_date_descending(records)
            .into_iter()
            .filter(|r| r.has_photo())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("2024-01-15", "68", Some("data:a".to_string())),
            Record::new("garbage", "70", None),
            Record::new("2024-03-01", "abc", None),
            Record::new("2023-12-31", "71", Some("data:b".to_string())),
        ]
    }

    fn dates(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.date.to_string()).collect()
    }

    #[test]
    fn test_records_by_date_descending() {
        let records = sample_records();
        let sorted = ViewProjection::records_by_date_descending(&records);

        assert_eq!(
            dates(&sorted),
            vec!["2024-03-01", "2024-01-15", "2023-12-31", "garbage"]
        );
    }

    #[test]
    fn test_records_view_is_permutation_and_idempotent() {
        let records = sample_records();
        let once: Vec<Record> = ViewProjection::records_by_date_descending(&records)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Record> = ViewProjection::records_by_date_descending(&once)
            .into_iter()
            .cloned()
            .collect();

        assert_eq!(once.len(), records.len());
        for record in &records {
            assert!(once.contains(record));
        }
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unparseable_weight_still_listed() {
        let records = sample_records();
        let sorted = ViewProjection::records_by_date_descending(&records);
        assert!(sorted.iter().any(|r| r.weight == "abc"));
    }

    #[test]
    fn test_photos_by_date_descending() {
        let records = sample_records();
        let photos = ViewProjection::photos_by_date_descending(&records);

        assert_eq!(dates(&photos), vec!["2024-01-15", "2023-12-31"]);
    }

    #[test]
    fn test_empty_views() {
        assert!(ViewProjection::records_by_date_descending(&[]).is_empty());
        assert!(ViewProjection::photos_by_date_descending(&[]).is_empty());
    }
}
