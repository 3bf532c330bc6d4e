//! # Chart Configuration DTO
//!
//! グラフ表示設定のData Transfer Object

use std::time::Duration;

use crate::domain::services::chart_layout::{ChartCanvas, Padding};

/// グラフ表示設定
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// 描画幅（px）
    pub width: f64,
    /// 描画高さ（px）
    pub height: f64,
    pub padding: Padding,
    /// リサイズ後に再描画するまでの待ち時間
    pub resize_debounce: Duration,
}

impl ChartConfig {
    /// 新しいグラフ表示設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::time::Duration;
    /// use weightlog::application::dto::chart_config::ChartConfig;
    /// use weightlog::domain::services::chart_layout::Padding;
    ///
    /// let config = ChartConfig::new(800.0, 300.0, Padding::default(), Duration::from_millis(250));
    ///
    /// assert_eq!(config.canvas().chart_width(), 740.0);
    /// assert_eq!(config.canvas().chart_height(), 240.0);
    /// ```
    pub fn new(width: f64, height: f64, padding: Padding, resize_debounce: Duration) -> Self {
        Self {
            width,
            height,
            padding,
            resize_debounce,
        }
    }

    /// レイアウトエンジンに渡すキャンバス
    pub fn canvas(&self) -> ChartCanvas {
        ChartCanvas::new(self.width, self.height, self.padding)
    }

    /// 幅だけを変更した設定を返す
    pub fn with_width(&self, width: f64) -> Self {
        Self {
            width,
            ..self.clone()
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(600.0, 300.0, Padding::default(), Duration::from_millis(250))
    }
}
