use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use keymux_core::{get_all_shortcuts, install_global, RegistryConfig};
use keymux_tui::app::{register_demo_shortcuts, DemoApp, SharedState};
use keymux_tui::{logging, runtime, terminal};

#[derive(Parser)]
#[command(name = "keymux-tui", about = "Interactive demo for the keymux shortcut engine")]
struct Args {
    /// Print registered shortcuts as JSON and exit.
    #[arg(long)]
    list: bool,

    /// Write logs to this file instead of stderr (keeps the screen clean).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Override the subscriber-notification debounce, in milliseconds.
    #[arg(long)]
    debounce_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    // Must happen before anything touches the global registry.
    if let Some(ms) = args.debounce_ms {
        install_global(RegistryConfig::new().with_notify_debounce(Duration::from_millis(ms)));
    }

    let shared = SharedState::new();
    register_demo_shortcuts(&shared);

    if args.list {
        println!("{}", serde_json::to_string_pretty(&get_all_shortcuts())?);
        return Ok(());
    }

    // Restore the terminal before the panic reaches the user.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        eprintln!("{}", panic_info);
        original_hook(panic_info);
    }));

    let mut terminal = terminal::init()?;
    let mut app = DemoApp::new(shared);
    let result = runtime::run_app(&mut terminal, &mut app).await;
    terminal::restore()?;
    result
}
