//! Weightlog - Weight Record Keeper
//!
//! 体重の記録・一覧・グラフ表示

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use weightlog::adapter::config::Config;
use weightlog::driver::{Args, WeightLogWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let mut workflow = WeightLogWorkflow::new(config);

    workflow.execute(args).await
}
