use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, ConfigError, NOTES_URL_ENV, NotesService, NotesSourceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNotesUrl(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNotesUrl(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidNotesUrl(err) => Some(err),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    notes: Arc<NotesService>,
}

impl UiApp for DesktopApp {
    fn notes_service(&self) -> Arc<NotesService> {
        Arc::clone(&self.notes)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--notes-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --notes-url {}", services::DEFAULT_NOTES_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {NOTES_URL_ENV}, RUST_LOG");
}

enum Parsed {
    Run { notes_url: Option<String> },
    Help,
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
    let mut notes_url = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--notes-url" => notes_url = Some(require_value(args, "--notes-url")?),
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Parsed::Run { notes_url })
}

/// The flag wins over `LEETBAT_NOTES_URL`, which is only read without it.
fn resolve_config(notes_url: Option<String>) -> Result<NotesSourceConfig, ArgsError> {
    match notes_url {
        Some(raw) => NotesSourceConfig::new(&raw),
        None => NotesSourceConfig::from_env(),
    }
    .map_err(ArgsError::InvalidNotesUrl)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let notes_url = match parse_args(&mut argv).inspect_err(|_| print_usage())? {
        Parsed::Run { notes_url } => notes_url,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };
    let config = resolve_config(notes_url)?;

    init_tracing();
    info!(notes_url = config.notes_url(), "starting dashboard");

    let services = AppServices::from_config(&config);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        notes: services.notes(),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("LeetBat")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
