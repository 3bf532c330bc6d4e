//! # Record Entity
//!
//! 体重記録のドメインエンティティ

use serde::{Deserialize, Serialize};

use super::calendar_date::CalendarDate;

/// 体重記録
///
/// 日付が主キー。体重は入力された文字列のまま保持し、
/// グラフ描画時にのみ数値として解釈する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: CalendarDate,
    pub weight: String,
    /// 写真（Data URL形式のテキスト）
    #[serde(rename = "imageDataUrl", default)]
    pub photo: Option<String>,
}

impl Record {
    /// 新しい記録を作成
    pub fn new(date: impl Into<CalendarDate>, weight: impl Into<String>, photo: Option<String>) -> Self {
        Self {
            date: date.into(),
            weight: weight.into(),
            photo,
        }
    }

    /// 体重を数値として解釈する
    ///
    /// 有限かつ0以上の値のみを受け付ける
    pub fn weight_value(&self) -> Option<f64> {
        parse_weight(&self.weight)
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

/// 体重文字列を解釈する
pub fn parse_weight(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}
