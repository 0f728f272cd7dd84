use tempwatch::app::App;
use tempwatch::cli::{parse_args, run_cli_command};
use tempwatch::notifications::Notifier;
use tempwatch::startup::{build_coordinator, init_logging, AppConfig};
use tempwatch::terminal::{setup_panic_hook, TerminalManager};
use tempwatch::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

/// UI tick driving the spinner and toast expiry
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env();

    if let Some(result) = run_cli_command(parse_args(std::env::args()), &config) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Err(e) = init_logging(&config.log_path(), &config.log_filter) {
        // Not fatal: the TUI works without a log
        eprintln!("Warning: {}", e);
    }
    tracing::info!(version = tempwatch::cli::VERSION, "Starting tempwatch");

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let (notifier, notification_rx) = Notifier::channel();
        let coordinator = build_coordinator(&config, notifier.clone())?;
        let mut app = App::new(coordinator, notifier, notification_rx, &config);

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;

        app.detach_lifecycle();
        tracing::info!("Exiting");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the receivers from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();
    let mut notification_rx = app.notification_rx.take();

    app.attach_lifecycle();

    // Initial mount
    app.request_reload().await;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => app.handle_event(event).await,
                    Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg).await;
                }
            }

            notification = async {
                match &mut notification_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(notification) = notification {
                    app.push_notification(notification);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
