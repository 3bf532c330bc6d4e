//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - フレームワークに依存しない
//! - 保存先のファイルや写真の読み込み方法について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Record, CalendarDate）
//! - **errors**: ドメインエラー
//! - **repositories**: 記録リポジトリと外部コラボレータの trait
//! - **services**: Domain Service（グラフレイアウト、ビュー射影）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
