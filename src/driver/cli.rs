//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adapter::config::DEFAULT_CONFIG_PATH;

/// 日付ごとの体重を記録し、一覧・写真・グラフで表示するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "weightlog")]
#[command(about = "Record dated weight measurements and chart them", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a record (resubmitting an existing date overwrites its weight)
    Add {
        /// Date of the measurement (YYYY-MM-DD)
        date: String,
        /// Weight in kg
        weight: String,
        /// Photo to attach
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// Edit the record stored under a date
    Edit {
        /// Date of the record to edit
        #[arg(value_name = "DATE")]
        original: String,
        /// Move the record to a new date
        #[arg(long)]
        date: Option<String>,
        /// New weight
        #[arg(long)]
        weight: Option<String>,
        /// Replace the photo
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// List records, newest first
    List,

    /// List records that have a photo, newest first
    Photos {
        /// Write each photo into this directory
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },

    /// Draw the weight chart as SVG
    Chart {
        /// Chart width in px
        #[arg(long)]
        width: Option<f64>,
        /// Chart height in px
        #[arg(long)]
        height: Option<f64>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["weightlog", "list"]);
        assert_eq!(args.config, "~/.weightlog/config.json");
        assert_eq!(args.command, Command::List);
    }

    #[test]
    fn test_args_add() {
        let args = Args::parse_from(["weightlog", "add", "2024-01-01", "70.5"]);
        assert_eq!(
            args.command,
            Command::Add {
                date: "2024-01-01".to_string(),
                weight: "70.5".to_string(),
                photo: None,
            }
        );
    }

    #[test]
    fn test_args_add_with_photo() {
        let args = Args::parse_from(["weightlog", "add", "2024-01-01", "70", "--photo", "lamb.jpg"]);
        match args.command {
            Command::Add { photo, .. } => assert_eq!(photo, Some(PathBuf::from("lamb.jpg"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_args_edit() {
        let args = Args::parse_from([
            "weightlog",
            "edit",
            "2024-01-01",
            "--date",
            "2024-01-02",
            "--weight",
            "71",
        ]);
        assert_eq!(
            args.command,
            Command::Edit {
                original: "2024-01-01".to_string(),
                date: Some("2024-01-02".to_string()),
                weight: Some("71".to_string()),
                photo: None,
            }
        );
    }

    #[test]
    fn test_args_chart() {
        let args = Args::parse_from(["weightlog", "chart", "--width", "800", "-o", "out.svg"]);
        assert_eq!(
            args.command,
            Command::Chart {
                width: Some(800.0),
                height: None,
                output: Some(PathBuf::from("out.svg")),
            }
        );
    }

    #[test]
    fn test_args_custom_config_after_subcommand() {
        let args = Args::parse_from(["weightlog", "photos", "-c", "/custom/config.json"]);
        assert_eq!(args.config, "/custom/config.json");
        assert_eq!(args.command, Command::Photos { export_dir: None });
    }
}
