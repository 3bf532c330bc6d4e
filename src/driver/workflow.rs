//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{bail, Context, Result};
use log::info;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::photo::data_url::{decode_data_url, extension_for_mime, DataUrlEncoder};
use crate::adapter::render::svg_renderer::SvgRenderer;
use crate::adapter::store::json_file_store::JsonFileStore;
use crate::application::dto::record_submission::RecordSubmission;
use crate::application::use_cases::browse_records::{BrowseRecordsUseCase, GalleryItem};
use crate::application::use_cases::render_chart::{RenderChartUseCase, RenderedChart};
use crate::application::use_cases::submit_record::SubmitRecordUseCase;
use crate::domain::entities::calendar_date::CalendarDate;
use crate::domain::repositories::record_repository::{RecordRepository, UpsertKind, UpsertOutcome};

use super::chart_view::{ChartOutput, ChartView};
use super::cli::{Args, Command};

/// Gallery dates as file-name stems
fn file_stem(date: &str) -> String {
    date.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

/// File names handed out during one photo export
///
/// Dates that sanitize to the same name get `-2`, `-3`, ... so no photo overwrites another.
#[derive(Debug, Default)]
pub struct ExportNames {
    taken: HashSet<String>,
}

impl ExportNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a file name for the photo of `date`
    pub fn claim(&mut self, date: &str, mime: &str) -> String {
        let stem = file_stem(date);
        let extension = extension_for_mime(mime);

        let mut name = format!("{}.{}", stem, extension);
        let mut suffix = 2;
        while !self.taken.insert(name.clone()) {
            name = format!("{}-{}.{}", stem, suffix, extension);
            suffix += 1;
        }
        name
    }
}

/// Weight Log Workflow
pub struct WeightLogWorkflow {
    config: Config,
    repository: RecordRepository<JsonFileStore>,
    submit_use_case: SubmitRecordUseCase<DataUrlEncoder>,
    render_use_case: Arc<RenderChartUseCase<SvgRenderer>>,
}

impl WeightLogWorkflow {
    /// Create a new workflow instance with dependency injection
    ///
    /// Loads the records once; they live in memory for the rest of the session.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(JsonFileStore::new(config.data_path()));
        let repository = RecordRepository::load(store, config.store_key.clone());

        let submit_use_case = SubmitRecordUseCase::new(Arc::new(DataUrlEncoder::new()));
        let renderer = SvgRenderer::new().with_line_color(config.line_color.clone());
        let render_use_case = Arc::new(RenderChartUseCase::new(Arc::new(renderer)));

        Self {
            config,
            repository,
            submit_use_case,
            render_use_case,
        }
    }

    /// Records currently held in memory
    pub fn repository(&self) -> &RecordRepository<JsonFileStore> {
        &self.repository
    }

    /// Execute the command
    pub async fn execute(&mut self, args: Args) -> Result<()> {
        info!("Running {:?}", args.command);
        info!("Data file: {}", self.config.data_path().display());

        match args.command {
            Command::Add {
                date,
                weight,
                photo,
            } => self.add(date, weight, photo).await,
            Command::Edit {
                original,
                date,
                weight,
                photo,
            } => self.edit(original, date, weight, photo).await,
            Command::List => {
                self.list();
                Ok(())
            }
            Command::Photos { export_dir } => self.photos(export_dir.as_deref()),
            Command::Chart {
                width,
                height,
                output,
            } => self.chart(width, height, output),
        }
    }

    async fn add(&mut self, date: String, weight: String, photo: Option<PathBuf>) -> Result<()> {
        let submission = RecordSubmission::new(date, weight, photo);
        let outcome = self
            .submit_use_case
            .execute(&mut self.repository, submission)
            .await?;

        self.report(&outcome)
    }

    async fn edit(
        &mut self,
        original: String,
        date: Option<String>,
        weight: Option<String>,
        photo: Option<PathBuf>,
    ) -> Result<()> {
        let original = CalendarDate::new(original);
        let Some(current) = self.submit_use_case.begin_edit(&self.repository, &original) else {
            bail!("No record found for {}", original);
        };

        let submission = RecordSubmission::new(
            date.unwrap_or_else(|| current.date.to_string()),
            weight.unwrap_or(current.weight),
            photo,
        );

        let result = self
            .submit_use_case
            .execute(&mut self.repository, submission)
            .await;

        match result {
            Ok(outcome) => self.report(&outcome),
            Err(e) => {
                self.submit_use_case.cancel_edit();
                Err(e.into())
            }
        }
    }

    /// Print the outcome; a failed write is escalated since memory is discarded on exit
    fn report(&self, outcome: &UpsertOutcome) -> Result<()> {
        match outcome.kind {
            UpsertKind::Inserted => println!("✓ Added record"),
            UpsertKind::Merged => println!("✓ Updated existing record for that date"),
            UpsertKind::Edited => println!("✓ Record updated"),
            UpsertKind::EditTargetMissing => println!("⚠ Record to edit no longer exists"),
        }

        if let Some(e) = &outcome.storage_warning {
            println!("⚠ {}", e);
            println!("  The storage may be out of space.");
            bail!("Records were not saved to {}", self.config.data_path().display());
        }

        println!("  {} records total", self.repository.len());
        Ok(())
    }

    fn list(&self) {
        let rows = BrowseRecordsUseCase::list(&self.repository);
        if rows.is_empty() {
            println!("No records yet.");
            return;
        }

        for row in rows {
            let mut line = row.display_text();
            if row.has_photo {
                line.push_str("  [photo]");
            }
            if !row.charted {
                line.push_str("  (not charted)");
            }
            println!("{}", line);
        }
    }

    fn photos(&self, export_dir: Option<&Path>) -> Result<()> {
        let gallery = BrowseRecordsUseCase::gallery(&self.repository);
        if gallery.is_empty() {
            println!("No photos yet.");
            return Ok(());
        }

        match export_dir {
            None => {
                for item in &gallery {
                    println!("{}  ({} chars)", item.date, item.photo.len());
                }
            }
            Some(dir) => {
                fs::create_dir_all(dir).context("Failed to create export directory")?;
                let mut names = ExportNames::new();
                for item in &gallery {
                    let path = export_photo(item, dir, &mut names)?;
                    println!("✓ {} → {}", item.date, path.display());
                }
            }
        }

        Ok(())
    }

    fn chart(
        &self,
        width: Option<f64>,
        height: Option<f64>,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let mut chart_config = self.config.chart_config();
        if let Some(width) = width {
            chart_config.width = width;
        }
        if let Some(height) = height {
            chart_config.height = height;
        }

        let output = match output {
            Some(path) => ChartOutput::File(path),
            None => ChartOutput::Stdout,
        };

        let mut view = ChartView::new(self.render_use_case.clone(), chart_config, output.clone());
        let rendered = view.show(self.repository.all())?;

        if let (RenderedChart::Drawn { points, .. }, ChartOutput::File(path)) = (&rendered, &output) {
            println!("✓ Chart with {} points written to {}", points, path.display());
        }

        Ok(())
    }
}

fn export_photo(item: &GalleryItem, dir: &Path, names: &mut ExportNames) -> Result<PathBuf> {
    let (mime, bytes) = decode_data_url(&item.photo)
        .with_context(|| format!("Photo for {} is not a valid data URL", item.date))?;

    let path = dir.join(names.claim(&item.date, &mime));
    fs::write(&path, bytes)
        .with_context(|| format!("Failed to write photo: {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_names() {
        let mut names = ExportNames::new();
        assert_eq!(names.claim("2024-01-15", "image/jpeg"), "2024-01-15.jpg");
        assert_eq!(names.claim("../x", "image/gif"), "___x.gif");
        assert_eq!(names.claim("2024-01-16", "application/octet-stream"), "2024-01-16.bin");
    }

    #[test]
    fn test_export_names_disambiguate_collisions() {
        let mut names = ExportNames::new();

        assert_eq!(names.claim("2024/01/15", "image/png"), "2024_01_15.png");
        assert_eq!(names.claim("2024_01_15", "image/png"), "2024_01_15-2.png");
        assert_eq!(names.claim("2024 01 15", "image/png"), "2024_01_15-3.png");
        // 別の拡張子は衝突しない
        assert_eq!(names.claim("2024_01_15", "image/jpeg"), "2024_01_15.jpg");
        // 連番と同じ名前の日付も上書きしない
        assert_eq!(names.claim("2024_01_15-2", "image/png"), "2024_01_15-2-2.png");
    }
}
