use drawerdemo::app::App;
use drawerdemo::config::ShellConfig;
use drawerdemo::logging::init_logging;
use drawerdemo::terminal::{setup_panic_hook, TerminalManager};
use drawerdemo::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("drawerdemo {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let config = ShellConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }
    tracing::info!(version = VERSION, ?config, "starting");

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let mut manager = TerminalManager::new(config.mouse_capture)?;
    let mut app = App::new();
    let (width, height) = manager.size()?;
    app.update_terminal_dimensions(width, height);

    let result = runtime.block_on(run_app(manager.terminal(), &mut app, &config));

    manager.restore();
    tracing::info!(route = app.active_route_id(), "exiting");

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &ShellConfig,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(config.tick_rate());

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(e)) => return Err(e.into()),
                    // Input stream closed
                    None => app.quit(),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
