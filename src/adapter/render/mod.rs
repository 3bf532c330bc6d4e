//! Chart Renderers
//!
//! Domain層のChartRendererトレイトの実装

pub mod svg_renderer;
