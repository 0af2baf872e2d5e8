//! Clima - two-tab weather lookup TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use clima::action::Action;
use clima::api::{DEFAULT_LANGUAGE, FORECAST_URL, GEOCODING_URL, OpenMeteoClient, WeatherApi};
use clima::components::{AppShell, AppShellProps, Component};
use clima::effect::Effect;
use clima::logging;
use clima::lookup;
use clima::reducer::reducer;
use clima::state::{AppState, SPINNER_TICK_MS};
use clima::theme::{Platform, Theme};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Clima - look up current weather for a city
#[derive(Parser, Debug)]
#[command(name = "clima")]
#[command(about = "A two-tab weather lookup TUI backed by Open-Meteo")]
struct Args {
    /// City to search for on startup
    #[arg(long, short)]
    city: Option<String>,

    /// Tab bar palette
    #[arg(long, value_enum, default_value = "light")]
    theme: Theme,

    /// Language place names are resolved in
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Geocoding endpoint
    #[arg(long, default_value = GEOCODING_URL)]
    geocoding_url: String,

    /// Forecast endpoint
    #[arg(long, default_value = FORECAST_URL)]
    forecast_url: String,

    /// Append logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

/// Settings the effect handler needs at runtime
struct LookupRuntime {
    api: Arc<dyn WeatherApi>,
    language: String,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum ClimaComponentId {
    Shell,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum ClimaContext {
    Main,
    Search,
}

impl EventRoutingState<ClimaComponentId, ClimaContext> for AppState {
    fn focused(&self) -> Option<ClimaComponentId> {
        if self.input_focused {
            Some(ClimaComponentId::Search)
        } else {
            Some(ClimaComponentId::Shell)
        }
    }

    fn modal(&self) -> Option<ClimaComponentId> {
        if self.input_focused {
            Some(ClimaComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: ClimaComponentId) -> ClimaContext {
        match id {
            ClimaComponentId::Shell => ClimaContext::Main,
            ClimaComponentId::Search => ClimaContext::Search,
        }
    }

    fn default_context(&self) -> ClimaContext {
        ClimaContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        theme,
        language,
        geocoding_url,
        forecast_url,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = log_file.as_deref() {
        logging::init(path)?;
    }
    tracing::info!(?theme, %language, "clima starting");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(theme, Platform::current()))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let runtime = LookupRuntime {
        api: Arc::new(OpenMeteoClient::new(geocoding_url, forecast_url)),
        language,
    };

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        runtime,
        city.map(Action::SearchSubmit),
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("clima exiting");
    Ok(())
}

struct ClimaUi {
    shell: AppShell,
}

impl ClimaUi {
    fn new() -> Self {
        Self {
            shell: AppShell::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<ClimaComponentId>,
    ) {
        event_ctx.set_component_area(ClimaComponentId::Shell, area);
        if state.input_focused {
            event_ctx.set_component_area(ClimaComponentId::Search, area);
        } else {
            event_ctx
                .component_areas
                .remove(&ClimaComponentId::Search);
        }

        let props = AppShellProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.shell.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = AppShellProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.shell.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    runtime: LookupRuntime,
    initial_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let lookup_runtime = Arc::new(runtime);
    let ui = Rc::new(RefCell::new(ClimaUi::new()));
    let mut bus: EventBus<AppState, Action, ClimaComponentId, ClimaContext> = EventBus::new();
    let keybindings: Keybindings<ClimaContext> = Keybindings::new();

    let ui_shell = Rc::clone(&ui);
    bus.register(ClimaComponentId::Shell, move |event, state| {
        ui_shell.borrow_mut().handle_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(ClimaComponentId::Search, move |event, state| {
        ui_search.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &lookup_runtime),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, runtime: &Arc<LookupRuntime>) {
    match effect {
        Effect::LookupWeather { generation, query } => {
            let runtime = Arc::clone(runtime);
            // Respawning under the same key replaces any lookup still in flight.
            ctx.tasks().spawn("lookup", async move {
                lookup::lookup_action(runtime.api.as_ref(), generation, query, &runtime.language)
                    .await
            });
        }
    }
}
