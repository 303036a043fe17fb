use std::io;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

mod action;
mod app;
mod backend;
mod input;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;
use curate_api::ApiClient;

/// Curate IQ — a terminal client for discovering research papers through
/// multi-signal relevance curation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Researcher full name (prefills the form)
    #[arg(long)]
    author: Option<String>,

    /// arXiv subject area code, e.g. cs.AI (prefills the form)
    #[arg(long)]
    subject_area: Option<String>,

    /// Base URL of the curation service
    #[arg(long)]
    api_url: Option<String>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,
}

/// Log to a file so tracing output never fights the alternate screen.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|d| d.join("curate"))?;
    std::fs::create_dir_all(&log_dir).ok()?;

    let appender = tracing_appender::rolling::never(log_dir, "curate-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let _log_guard = init_logging();

    let config = curate_core::config_file::load_config();

    // Resolve settings from CLI flags > env vars > config file > defaults
    let base_url = args
        .api_url
        .clone()
        .or_else(|| std::env::var("CURATE_API_URL").ok())
        .or_else(|| config.api.as_ref().and_then(|a| a.base_url.clone()))
        .unwrap_or_else(|| curate_api::DEFAULT_BASE_URL.to_string());
    let timeout_secs = config
        .api
        .as_ref()
        .and_then(|a| a.timeout_secs)
        .unwrap_or(curate_api::DEFAULT_TIMEOUT_SECS);
    let theme_name = args
        .theme
        .clone()
        .or_else(|| config.display.as_ref().and_then(|d| d.theme.clone()))
        .unwrap_or_else(|| "hacker".to_string());
    let theme = match theme_name.as_str() {
        "modern" => theme::Theme::modern(),
        _ => theme::Theme::hacker(),
    };

    let api = ApiClient::new(&base_url, Duration::from_secs(timeout_secs))?;
    tracing::info!(base_url = %base_url, "starting curate tui");

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme);
    if let Some(author) = args.author {
        app.form.full_name = author;
    }
    if let Some(subject) = args.subject_area {
        app.form.subject_area = subject;
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    app.backend_cmd_tx = Some(cmd_tx);
    tokio::spawn(backend::run(api, cmd_rx, event_tx));

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            // Backend events (non-blocking drain)
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            _ = cancel.cancelled() => {
                app.should_quit = true;
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let action = input::map_event(&evt, &app.input_mode);
                        app.update(action);
                    }
                }
            } => {}
        }

        app.update(action::Action::Tick);

        if app.should_quit {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}
