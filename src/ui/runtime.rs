use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::app::{ApiEvent, App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::{bail, Context};
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 32;
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Runs the interactive UI until the user quits.
pub fn run(config: Config) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("studyspark-api")
        .build()
        .context("Failed to start async runtime")?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(command_loop(client, command_rx, events.sender()));

    let mut app = App::new(&config, command_tx);
    let (cols, rows) = crossterm::terminal::size()?;
    app.on_resize(cols, rows);
    tracing::info!(base_url = %config.api.base_url, "UI started");

    let outcome = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err.into());
        }
        if app.should_quit() {
            break Ok(());
        }
        if let Err(err) = dispatch(&mut app, events.next(tick_rate)) {
            break Err(err);
        }
    };

    drop(guard);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    match &outcome {
        Ok(()) => tracing::info!("UI stopped"),
        Err(err) => tracing::error!(error = %err, "UI stopped"),
    }
    outcome
}

/// Applies one event to the app. Fails when terminal input is gone.
fn dispatch(app: &mut App, event: Result<AppEvent, RecvTimeoutError>) -> anyhow::Result<()> {
    match event {
        Ok(AppEvent::Key(key)) => handle_key(app, key),
        Ok(AppEvent::Paste(text)) => app.insert_text(&text),
        Ok(AppEvent::Tick) => app.on_tick(),
        Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
        Ok(AppEvent::Api(event)) => app.on_api(event),
        Ok(AppEvent::InputFailed(message)) => bail!("Terminal input failed: {}", message),
        Err(RecvTimeoutError::Timeout) => {}
        Err(RecvTimeoutError::Disconnected) => app.request_quit(),
    }
    Ok(())
}

/// Runs each queued command as its own task and posts the outcome back to
/// the UI thread.
async fn command_loop(
    client: ApiClient,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let client = client.clone();
        let events = events.clone();
        tokio::spawn(async move {
            let outcome = execute(&client, command).await;
            // The UI may already be gone.
            let _ = events.send(AppEvent::Api(outcome));
        });
    }
}

async fn execute(client: &ApiClient, command: UiCommand) -> ApiEvent {
    match command {
        UiCommand::Summarize { file } => {
            ApiEvent::Summary(client.summarize(&file).await.map_err(|err| err.to_string()))
        }
        UiCommand::Study { file } => {
            ApiEvent::Study(client.study(&file).await.map_err(|err| err.to_string()))
        }
        UiCommand::Feedback {
            session,
            question,
            request,
        } => ApiEvent::Feedback {
            session,
            question,
            result: client.feedback(&request).await.map_err(|err| err.to_string()),
        },
    }
}
