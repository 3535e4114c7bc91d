//! oxedit entrypoint: CLI, logging bootstrap and the synchronous event loop.
use anyhow::Result;
use clap::Parser;
use core_actions::handle_key;
use core_actions::io_ops::load_or_empty;
use core_config::{Config, load_from};
use core_events::{Event, InputEvent};
use core_model::{EditorModel, View};
use core_render::{RenderEngine, project};
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use core_text::{Buffer, Position};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, trace};
use tracing_appender::non_blocking::WorkerGuard;

/// Screen rows below the viewport (the status line).
const STATUS_ROWS: u16 = 1;
/// Terminal size assumed when the real size cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);
const LOG_FILE: &str = "oxedit.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "oxedit", version, about = "Minimal modal text editor")]
struct Args {
    /// File to open. The path is bound for `:w` even when it cannot be read.
    pub path: Option<PathBuf>,
    /// Configuration file (overrides discovery of `oxedit.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Build the initial model: load the file (or an empty buffer), bind its
/// path, apply configuration, and size the viewport for `rows` terminal rows.
fn build_model(path: Option<&Path>, config: &Config, rows: u16) -> EditorModel {
    let buffer = match path {
        Some(p) => load_or_empty(p),
        None => Buffer::new(),
    };
    let mut state = EditorState::new(buffer);
    state.file_name = path.map(Path::to_path_buf);
    state.tab_size = config.effective_tab_size;
    state.default_save_path = config.default_save_path().clone();
    state.set_history_limit(config.max_snapshots());
    let view = View::new(Position::origin(), text_height(rows));
    EditorModel::with_view(view, state)
}

fn text_height(rows: u16) -> usize {
    rows.saturating_sub(STATUS_ROWS).max(1) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue { repaint: bool },
    Quit,
}

/// Apply one input event to the model. Never touches the terminal.
fn apply_event(model: &mut EditorModel, engine: &mut RenderEngine, event: &Event) -> Step {
    match event {
        Event::Input(InputEvent::Key(key)) => {
            let result = handle_key(model, key);
            if result.quit {
                Step::Quit
            } else {
                Step::Continue {
                    repaint: result.dirty,
                }
            }
        }
        Event::Input(InputEvent::Resize(w, h)) => {
            engine.set_width(*w);
            model.resize(text_height(*h));
            trace!(target: "runtime", w, h, "resize");
            Step::Continue { repaint: true }
        }
    }
}

fn run(model: &mut EditorModel, engine: &mut RenderEngine) -> Result<()> {
    engine.render(&project(model.state(), model.view()))?;
    loop {
        let event = core_input::read_event()?;
        match apply_event(model, engine, &event) {
            Step::Continue { repaint: true } => {
                engine.render(&project(model.state(), model.view()))?;
            }
            Step::Continue { repaint: false } => {}
            Step::Quit => return Ok(()),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let config = load_from(args.config.clone())?;
    let (cols, rows) = core_terminal::size().unwrap_or(FALLBACK_SIZE);
    let mut model = build_model(args.path.as_deref(), &config, rows);
    info!(
        target: "runtime.startup",
        path = args.path.as_ref().map(|p| p.display().to_string()).as_deref(),
        lines = model.state().buffer().line_count(),
        tab_size = model.state().tab_size,
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );

    startup.backend.set_title("oxedit")?;
    let outcome = {
        let _guard = startup.backend.enter_guard()?;
        let mut engine = RenderEngine::new(cols);
        run(&mut model, &mut engine)
    };
    match &outcome {
        Ok(()) => info!(target: "runtime.shutdown", modified = model.state().modified, "shutdown"),
        Err(e) => tracing::error!(target: "runtime.shutdown", ?e, "event_loop_error"),
    }
    outcome
}
