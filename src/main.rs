use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use buscaya::App;
use buscaya::config::{self, Config, Overrides, Variant};
use buscaya::error::BuscaError;
use buscaya::suggest::client::resolve_endpoint;
use buscaya::suggest::worker::spawn_worker;
use buscaya::suggest::{HttpSuggestClient, RequestCoordinator};

/// Search box with live suggestions from the marketplace API
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Search box with live suggestions from the marketplace API"
)]
struct Args {
    /// Search scope sent to the suggest endpoint
    #[arg(long)]
    scope: Option<String>,

    /// Display name of the scope
    #[arg(long)]
    scope_name: Option<String>,

    /// Placeholder text of the empty box
    #[arg(long)]
    placeholder: Option<String>,

    /// Initial text of the box
    #[arg(long, short)]
    query: Option<String>,

    /// Suggest endpoint, absolute or relative to the API base
    #[arg(long)]
    suggest_url: Option<String>,

    /// Base URL of the marketplace API
    #[arg(long)]
    api_base: Option<String>,

    /// Maximum number of suggestions shown
    #[arg(long)]
    max_items: Option<usize>,

    /// Box style
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Quiet period before a lookup, in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Keep running after a search is committed
    #[arg(long)]
    keep_open: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            scope: self.scope.clone(),
            scope_name: self.scope_name.clone(),
            placeholder: self.placeholder.clone(),
            default_value: self.query.clone(),
            suggest_url: self.suggest_url.clone(),
            api_base: self.api_base.clone(),
            max_items: self.max_items,
            variant: self.variant,
            debounce_ms: self.debounce_ms,
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/buscaya-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/buscaya-debug.log")
            .expect("Failed to open /tmp/buscaya-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== BUSCAYA DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    let mut config = config_result.config.clone();
    config.apply(args.overrides());
    validate_config(&config)?;

    let client = build_suggest_client(&config)?;

    // The worker chains its panic hook onto the terminal-restoring one
    let terminal = init_terminal()?;
    let coordinator = start_suggest_worker(client);

    let mut app = App::new(&config, coordinator, args.keep_open);
    if let Some(warning) = &config_result.warning {
        app.notification.show_warning(warning);
    }

    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(committed) = app.last_committed() {
        println!("{}", committed);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== BUSCAYA DEBUG SESSION ENDED ===");

    Ok(())
}

fn validate_config(config: &Config) -> Result<(), BuscaError> {
    if config.search.max_items == 0 {
        return Err(BuscaError::NoItems);
    }
    Ok(())
}

/// Build the HTTP source for the configured endpoint
fn build_suggest_client(config: &Config) -> Result<HttpSuggestClient, BuscaError> {
    let endpoint = resolve_endpoint(&config.api.base_url, &config.api.suggest_url)
        .map_err(BuscaError::Endpoint)?;
    let timeout = config.api.request_timeout_ms.map(Duration::from_millis);
    let client = HttpSuggestClient::new(endpoint, timeout).map_err(BuscaError::Endpoint)?;

    log::debug!("Suggest endpoint: {}", client.endpoint());
    Ok(client)
}

/// Spawn the worker for `client` and connect a coordinator to it
fn start_suggest_worker(client: HttpSuggestClient) -> RequestCoordinator {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(client, request_rx, response_tx);

    RequestCoordinator::new(request_tx, response_rx)
}

/// Initialize terminal with raw mode, alternate screen, mouse capture and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
