//! Autoshine CLI - load a page, replay a session, print the result

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use autoshine::adapters::gateways::{FilePreferenceGateway, MemoryPreferenceGateway};
use autoshine::adapters::presenters::render_html;
use autoshine::domain::repositories::{NullPreferenceRepository, PreferenceRepository};
use autoshine::shared::logging::{self, LogTarget};
use autoshine::{PageSpec, RuntimeOptions, SessionScript, SiteConfig, SiteRuntime};

#[derive(Parser)]
#[command(name = "autoshine")]
#[command(about = "Run the Autoshine page behaviors against a page description")]
struct Args {
    /// Page description (JSON)
    page: PathBuf,

    /// Session script to replay (TOML)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Site configuration; defaults to autoshine.toml in the standard locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preference file; overrides the configured location
    #[arg(long, conflicts_with = "no_persist")]
    prefs: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long)]
    no_persist: bool,

    /// Date used as "today" (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to a file instead of stderr; without a value the log goes
    /// to autoshine.log next to the executable
    #[arg(long, value_name = "PATH", require_equals = true)]
    log_file: Option<Option<PathBuf>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let target = match args.log_file.clone() {
        None => LogTarget::Stderr,
        Some(path) => LogTarget::File(path.unwrap_or_else(logging::default_log_path)),
    };
    logging::init(args.verbose, target).context("failed to initialize logging")?;

    let config = match &args.config {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SiteConfig::load(),
    };

    let preferences = open_preferences(&args, &config);

    let spec = PageSpec::load(&args.page)
        .with_context(|| format!("failed to load page {}", args.page.display()))?;
    let (document, window) = spec.build().context("failed to build page")?;

    let mut options = RuntimeOptions {
        config,
        ..Default::default()
    };
    if let Some(today) = args.today {
        options.today = today;
    }
    let mut runtime = SiteRuntime::load(document, window, preferences, options)
        .context("failed to attach page behaviors")?;

    if let Some(path) = &args.script {
        let script = SessionScript::load(path)
            .with_context(|| format!("failed to load script {}", path.display()))?;
        script
            .run(&mut runtime)
            .with_context(|| format!("session {} failed", path.display()))?;
    }

    print_report(&runtime);
    Ok(())
}

fn open_preferences(args: &Args, config: &SiteConfig) -> Box<dyn PreferenceRepository> {
    if args.no_persist {
        return Box::new(MemoryPreferenceGateway::new());
    }
    match args.prefs.clone().or_else(|| config.storage.preferences_path()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using preference file");
            Box::new(FilePreferenceGateway::new(path))
        }
        None => {
            tracing::warn!("no preference location available, preferences will not persist");
            Box::new(NullPreferenceRepository)
        }
    }
}

fn print_report(runtime: &SiteRuntime) {
    print!("{}", render_html(runtime.document()));
    println!();
    for alert in runtime.alerts() {
        println!("alert: {}", alert);
    }
    println!("scroll: {}", runtime.window().scroll_y());
    println!("theme: {}", runtime.theme());
    println!("notifications: {}", runtime.active_notifications());
    println!("time: {}ms", runtime.now());
}
