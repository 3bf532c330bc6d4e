//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Record**: 体重記録のビジネス表現
//! - **CalendarDate**: 記録の主キーとなる日付のバリューオブジェクト

pub mod calendar_date;
pub mod record;
