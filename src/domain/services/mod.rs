//! # Domain Services
//!
//! 記録から表示用の情報を導出するビジネスロジック
//!
//! ## サービス
//!
//! - **ChartLayoutEngine**: 折れ線グラフのレイアウト計算
//! - **ViewProjection**: 記録一覧・写真ギャラリーの並び替え

pub mod chart_layout;
pub mod view_projection;
