//! # CalendarDate Value Object
//!
//! 記録の主キーとなる日付のバリューオブジェクト

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 受け付ける日付フォーマット
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// 記録日付
///
/// 入力された文字列をそのまま保持し、同一性は生の文字列で判定する。
/// 並び順はエポックからの日数（解釈できない日付は0日目）→ 生の文字列の順で決まる全順序。
#[derive(Debug, Clone)]
pub struct CalendarDate {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl CalendarDate {
    /// 文字列から日付を作成
    ///
    /// 解釈できない文字列でもエラーにはせず、そのまま保持する
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        let parsed = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok());
        Self { raw, parsed }
    }

    /// 入力された文字列
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 解釈済みの日付（解釈できなかった場合は `None`）
    pub fn parsed(&self) -> Option<NaiveDate> {
        self.parsed
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    /// 並び替えに使うエポックからの日数
    pub fn epoch_days(&self) -> i64 {
        match self.parsed {
            Some(date) => (date - NaiveDate::default()).num_days(),
            None => 0,
        }
    }

    /// グラフの横軸ラベル（`月/日`、年なし・ゼロ埋めなし）
    pub fn short_label(&self) -> String {
        match self.parsed {
            Some(date) => format!("{}/{}", date.month(), date.day()),
            None => self.raw.clone(),
        }
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for CalendarDate {}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch_days()
            .cmp(&other.epoch_days())
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for CalendarDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CalendarDate {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
