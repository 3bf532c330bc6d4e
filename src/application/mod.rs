//! # Application Layer
//!
//! 記録の追加・編集、閲覧、グラフ描画のユースケース
//!
//! ## 特徴
//!
//! - Domain層のリポジトリとサービスを組み合わせてフローを実現
//! - 写真の変換やグラフの描画は trait 越しに依存（実装には依存しない）
//! - 出力先（標準出力・ファイル）は知らない
//!
//! ## 構成要素
//!
//! - **dto**: 入力と表示設定（RecordSubmission, ChartConfig）
//! - **use_cases**: SubmitRecord / BrowseRecords / RenderChart

pub mod dto;
pub mod use_cases;
