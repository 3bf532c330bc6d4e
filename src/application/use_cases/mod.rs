//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **SubmitRecordUseCase**: 記録の追加・編集
//! - **BrowseRecordsUseCase**: 記録一覧と写真ギャラリー
//! - **RenderChartUseCase**: 体重推移グラフの描画

pub mod browse_records;
pub mod render_chart;
pub mod submit_record;
