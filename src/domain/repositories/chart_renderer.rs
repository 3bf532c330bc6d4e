//! # Chart Renderer Trait
//!
//! グラフの描画記述を具体的な描画形式に変換する描画先の抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::services::chart_layout::ChartLayout;

/// グラフレンダラー
///
/// 線・テキスト・折れ線・円マーカーを絶対座標で描画できること
#[cfg_attr(test, automock)]
pub trait ChartRenderer: Send + Sync {
    /// レイアウトを描画結果（SVG文書など）に変換する
    fn render(&self, layout: &ChartLayout) -> String;
}
