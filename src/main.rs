use clap::Parser;
use log::{info, warn};
use promptbar::core::config::{self, CliOverrides, PromptbarConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptbar", about = "Terminal prompt composer with a slash action menu")]
struct Args {
    /// Config file to use instead of ~/.promptbar/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Placeholder shown while the text box is empty
    #[arg(long)]
    placeholder: Option<String>,

    /// Maximum composer width in columns
    #[arg(long)]
    max_width: Option<u16>,

    /// Where to write the log
    #[arg(long, default_value = "promptbar.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("promptbar starting up");

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .unwrap_or_else(|e| {
        warn!("Falling back to default config: {e}");
        PromptbarConfig::default()
    });

    let cli = CliOverrides {
        placeholder: args.placeholder,
        max_width: args.max_width,
    };
    let resolved = config::resolve(&file_config, &cli);
    info!(
        "Resolved config: {} actions, max width {}",
        resolved.actions.len(),
        resolved.max_width
    );

    promptbar::tui::run(resolved)
}
