use anyhow::Result;
use clap::Parser;
use iconpad::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Source image the icons are generated from
    #[clap(long)]
    icon: Option<PathBuf>,
    /// Directory the icon set is written into
    #[clap(long)]
    output: Option<PathBuf>,
    /// Fraction of each edge reserved as transparent margin
    #[clap(long)]
    padding: Option<f32>,
    /// Keep all progress lines on screen
    #[clap(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("ICONPAD_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    let mut config = Config::parse("iconpad.yaml")?;
    if let Some(icon) = args.icon {
        config.icon = icon;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }
    if let Some(padding) = args.padding {
        config.padding_fraction = padding;
    }
    iconpad::generate(&config, args.verbose)
}
