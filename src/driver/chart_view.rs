//! Chart View
//!
//! グラフ表示コンポーネント（即時描画とリサイズ時のデバウンス再描画）

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::adapter::scheduling::debouncer::Debouncer;
use crate::application::dto::chart_config::ChartConfig;
use crate::application::use_cases::render_chart::{RenderChartUseCase, RenderedChart};
use crate::domain::entities::record::Record;
use crate::domain::repositories::chart_renderer::ChartRenderer;

/// Where a rendered chart goes
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Stdout,
    File(PathBuf),
}

/// Chart view
///
/// Re-renders from scratch on every trigger: data mutation, view becoming visible, resize.
/// Resizes are debounced; the debounce timer lives and dies with the view.
pub struct ChartView<R: ChartRenderer + 'static> {
    use_case: Arc<RenderChartUseCase<R>>,
    config: ChartConfig,
    output: Arc<ChartOutput>,
    debouncer: Debouncer,
    renders: Arc<AtomicUsize>,
}

impl<R: ChartRenderer + 'static> ChartView<R> {
    pub fn new(use_case: Arc<RenderChartUseCase<R>>, config: ChartConfig, output: ChartOutput) -> Self {
        let debouncer = Debouncer::new(config.resize_debounce);
        Self {
            use_case,
            config,
            output: Arc::new(output),
            debouncer,
            renders: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Render immediately, superseding any pending resize render
    pub fn show(&mut self, records: &[Record]) -> Result<RenderedChart> {
        self.debouncer.cancel();
        present(&self.use_case, records, &self.config, &self.output, &self.renders)
    }

    /// Record the new container width and re-render after the quiet period
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_resize(&mut self, width: f64, records: &[Record]) {
        self.config = self.config.with_width(width);

        let use_case = self.use_case.clone();
        let config = self.config.clone();
        let output = self.output.clone();
        let renders = self.renders.clone();
        let records = records.to_vec();

        self.debouncer.schedule(move || {
            if let Err(e) = present(&use_case, &records, &config, &output, &renders) {
                warn!("Failed to re-render chart after resize: {:#}", e);
            }
        });
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Number of completed renders
    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

fn present<R: ChartRenderer>(
    use_case: &RenderChartUseCase<R>,
    records: &[Record],
    config: &ChartConfig,
    output: &ChartOutput,
    renders: &AtomicUsize,
) -> Result<RenderedChart> {
    let rendered = use_case.execute(records, &config.canvas());

    match (&rendered, output) {
        (RenderedChart::Placeholder(message), _) => {
            println!("{}", message);
        }
        (RenderedChart::Drawn { document, .. }, ChartOutput::Stdout) => {
            println!("{}", document);
        }
        (RenderedChart::Drawn { document, points }, ChartOutput::File(path)) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).context("Failed to create chart directory")?;
                }
            }
            fs::write(path, document)
                .with_context(|| format!("Failed to write chart: {}", path.display()))?;
            info!("Wrote chart with {} points to {}", points, path.display());
        }
    }

    renders.fetch_add(1, Ordering::SeqCst);
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::render::svg_renderer::SvgRenderer;
    use crate::application::use_cases::render_chart::INSUFFICIENT_DATA_MESSAGE;
    use std::time::Duration;
    use tempfile::TempDir;

    fn records() -> Vec<Record> {
        vec![
            Record::new("2024-01-01", "70", None),
            Record::new("2024-01-15", "68", None),
        ]
    }

    fn view(output: ChartOutput) -> ChartView<SvgRenderer> {
        let use_case = Arc::new(RenderChartUseCase::new(Arc::new(SvgRenderer::new())));
        ChartView::new(use_case, ChartConfig::default(), output)
    }

    #[test]
    fn test_show_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("charts/weight.svg");
        let mut view = view(ChartOutput::File(path.clone()));

        let rendered = view.show(&records()).unwrap();

        assert!(matches!(rendered, RenderedChart::Drawn { points: 2, .. }));
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains(r#"width="600""#));
        assert_eq!(view.render_count(), 1);
    }

    #[test]
    fn test_show_placeholder_does_not_write_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weight.svg");
        let mut view = view(ChartOutput::File(path.clone()));

        let rendered = view.show(&records()[..1]).unwrap();

        assert_eq!(rendered, RenderedChart::Placeholder(INSUFFICIENT_DATA_MESSAGE));
        assert!(!path.exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_burst_renders_once_with_last_width() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weight.svg");
        let mut view = view(ChartOutput::File(path.clone()));
        let records = records();

        view.on_resize(400.0, &records);
        tokio::time::sleep(Duration::from_millis(100)).await;
        view.on_resize(900.0, &records);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(view.render_count(), 0);

        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(view.render_count(), 1);
        assert_eq!(view.config().width, 900.0);
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains(r#"width="900""#));
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_supersedes_pending_resize() {
        let temp_dir = TempDir::new().unwrap();
        let mut view = view(ChartOutput::File(temp_dir.path().join("weight.svg")));
        let records = records();

        view.on_resize(800.0, &records);
        view.show(&records).unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(view.render_count(), 1);
    }
}
