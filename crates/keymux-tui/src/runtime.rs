use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use keymux_core::ShortcutRegistry;

use crate::app::DemoApp;
use crate::render::render;
use crate::terminal::Tui;

pub async fn run_app(terminal: &mut Tui, app: &mut DemoApp) -> Result<()> {
    let registry = ShortcutRegistry::global();

    // Registry changes arrive on the notifier thread; bridge them into the
    // select loop through a channel so redraws happen on this task.
    let (notify_tx, mut notify_rx) = tokio::sync::mpsc::unbounded_channel::<()>();
    let subscriber = registry.subscribe(move |_snapshot| {
        let _ = notify_tx.send(());
    });
    app.refresh_snapshot();

    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(200));

    while app.shared.is_running() {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(&key);
                    }
                }
            }
            _ = notify_rx.recv() => {
                app.refresh_snapshot();
            }
            _ = tick.tick() => {
                // Periodic redraw keeps the activity timestamps honest.
            }
        }
    }

    registry.unsubscribe(subscriber);
    Ok(())
}
