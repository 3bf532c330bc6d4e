//! # Render Chart Use Case
//!
//! 体重推移グラフの描画ユースケース

use log::debug;
use std::sync::Arc;

use crate::domain::entities::record::Record;
use crate::domain::repositories::chart_renderer::ChartRenderer;
use crate::domain::services::chart_layout::{ChartCanvas, ChartLayoutEngine, ChartOutcome};

/// 有効な記録が2件未満のときに表示するメッセージ
pub const INSUFFICIENT_DATA_MESSAGE: &str = "Add at least two records to see the chart.";

/// 描画結果
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedChart {
    /// グラフの代わりに表示するメッセージ
    Placeholder(&'static str),
    /// 描画済みのグラフ
    Drawn {
        /// レンダラーの出力（SVG文書など）
        document: String,
        /// グラフに含まれた点の数
        points: usize,
    },
}

/// グラフ描画ユースケース
///
/// 呼び出しのたびにレイアウトを最初から計算し直す
pub struct RenderChartUseCase<R: ChartRenderer> {
    renderer: Arc<R>,
}

impl<R: ChartRenderer> RenderChartUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `renderer` - グラフレンダラー
    pub fn new(renderer: Arc<R>) -> Self {
        Self { renderer }
    }

    /// 記録からグラフを描画する
    ///
    /// # Arguments
    ///
    /// * `records` - 全記録（順序は問わない）
    /// * `canvas` - 描画キャンバス
    pub fn execute(&self, records: &[Record], canvas: &ChartCanvas) -> RenderedChart {
        match ChartLayoutEngine::layout(records, canvas) {
            ChartOutcome::InsufficientData => {
                debug!("Not enough chartable records ({} total)", records.len());
                RenderedChart::Placeholder(INSUFFICIENT_DATA_MESSAGE)
            }
            ChartOutcome::Chart(layout) => {
                debug!(
                    "Chart layout: {} points, y range {}..{}",
                    layout.samples.len(),
                    layout.y_min,
                    layout.y_max
                );
                RenderedChart::Drawn {
                    document: self.renderer.render(&layout),
                    points: layout.samples.len(),
                }
            }
        }
    }
}
