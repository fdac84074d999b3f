mod app;
mod config;
mod error;
mod events;
mod groups;
mod handlers;
mod http;
mod log;
mod picker;
mod submit;
mod tui;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use reqwest::Client;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;

use app::App;
use config::{CliArgs, Config};
use error::GroupResult;
use events::EventHandler;
use groups::{GroupList, LoadTask};
use handlers::Effect;
use submit::SubmitOutcome;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Load config with precedence: CLI > env var > file > defaults
    let cli = CliArgs::parse(std::env::args().skip(1));
    let config = Config::load(cli.config.as_deref()).with_overrides(&cli);
    log::log(&format!("Config: {:?}", config));

    let client = http::build_client()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.source.describe(), config.submit.describe());

    // Run the app
    let result = run_app(&mut terminal, &mut app, &config, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(next) = app.navigation() {
        println!("Continue at {}", next);
    }

    result
}

fn start_load(
    app: &mut App,
    config: &Config,
    client: &Client,
    tx: &mpsc::Sender<GroupResult<GroupList>>,
) -> LoadTask {
    app.begin_load();
    groups::spawn_load(
        config.source.clone(),
        client.clone(),
        config.request_timeout(),
        tx.clone(),
    )
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &Config,
    client: Client,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let (load_tx, mut load_rx) = mpsc::channel::<GroupResult<GroupList>>(1);
    let (submit_tx, mut submit_rx) = mpsc::channel::<GroupResult<SubmitOutcome>>(1);

    // Event stream for keyboard
    let mut event_stream = EventStream::new();

    // Dropping the task on exit cancels a load that is still running
    let mut load_task = start_load(app, config, &client, &load_tx);

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                let Some(Ok(event)) = maybe_event else {
                    continue;
                };
                let action = EventHandler::handle_event(app, &event);
                match handlers::apply_action(app, action) {
                    Effect::None => {}
                    Effect::Quit => break,
                    Effect::Load => {
                        load_task = start_load(app, config, &client, &load_tx);
                    }
                    Effect::Submit(selection) => {
                        submit::spawn_submit(
                            config.submit.clone(),
                            client.clone(),
                            selection,
                            config.request_timeout(),
                            submit_tx.clone(),
                        );
                    }
                }
            }

            Some(result) = load_rx.recv() => {
                app.on_groups_loaded(result);
            }

            Some(result) = submit_rx.recv() => {
                app.on_submit_finished(result);
            }

            // Timeout to keep UI responsive and tick spinner
            _ = tokio::time::sleep(Duration::from_millis(80)) => {
                app.tick_spinner();
            }
        }
    }

    load_task.cancel();
    log::log_event("quit");
    Ok(())
}
