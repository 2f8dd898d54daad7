//! Export command implementation

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use super::CliError;
use crate::config::AppConfig;
use crate::export::{ExportFormat, ExportPipeline, ExportTarget};

/// Export monthly account statements to CSV or PDF
#[derive(Parser, Debug)]
#[command(name = "statement-exporter", version, about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the JSON configuration file
    #[arg(long, global = true, default_value = "config.json")]
    pub config: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export one monthly statement
    Export(ExportArgs),
}

/// Arguments for the export command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Statement month (1-12)
    #[arg(long)]
    pub month: u32,

    /// Statement year
    #[arg(long)]
    pub year: i32,

    /// Currency override (defaults to the configured currency)
    #[arg(long)]
    pub currency: Option<String>,

    /// Output format: csv or pdf
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Output path template (@c@ currency, @Y@/@y@ year, @m@ month, @t@ type)
    #[arg(long, default_value = "statement_@c@_@Y@-@m@.@t@")]
    pub output: String,

    /// PEM private key used to sign SCA challenges
    #[arg(long)]
    pub key: PathBuf,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &Path) -> Result<(), CliError> {
        let format = ExportFormat::from_str(&self.format).map_err(CliError::InvalidArgument)?;

        let config = AppConfig::load(config_path)?;
        info!(config = %config_path.display(), "configuration loaded");

        let target = ExportTarget {
            month: self.month,
            year: self.year,
            currency: self.currency.clone(),
            output_template: self.output.clone(),
            format,
        };

        let pipeline = ExportPipeline::new(config, &self.key);
        let path = pipeline.run(&target).await?;

        println!("Statement written to {}", path.display());
        Ok(())
    }
}
