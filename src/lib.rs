//! # Weightlog
//!
//! 日付ごとの体重（と写真）を記録し、一覧・写真ギャラリー・折れ線グラフで表示するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 記録のルール、グラフのレイアウト計算（外部システムに依存しない）
//! - **Application層**: 記録の追加・編集、閲覧、グラフ描画のユースケース
//! - **Adapter層**: 外部システムとの統合（JSONファイル、写真ファイル、SVG、タイマー）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
