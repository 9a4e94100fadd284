//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here; the reducer only returns effects.
//!
//! ## Inbox Pattern
//!
//! Spawned work sends its result `UiEvent` to `inbox_tx`. The loop drains
//! `inbox_rx` every iteration alongside terminal input, so a finished page
//! fetch reaches the reducer like any other event.
//!
//! - `mod.rs`: `TuiRuntime`, event loop, effect dispatch
//! - `handlers.rs`: async effect handlers

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use platter_core::catalog::MockCatalog;
use platter_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame budget while something is moving (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll timeout when nothing is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen runtime. The terminal is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_render: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Enters the alternate screen. Must be called from within a tokio runtime.
    pub fn new(config: Config, source: Arc<MockCatalog>) -> Result<Self> {
        // Before entering the alternate screen, so a panic restores it.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config, source);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_render: now,
            last_terminal_event: now,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            // Frame goes first so the window is sized before input is applied.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Renders are batched to the tick cadence.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                let frame_ms = self.last_render.elapsed().as_millis() as u16;
                self.last_render = Instant::now();

                let started = Instant::now();
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                self.state.tui.status_line.on_render(started.elapsed());
                self.state.tui.status_line.on_frame(frame_ms);

                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.catalog.store.is_fetching() || recent_terminal_activity;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick unless there is already work queued.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Runs `f` on the tokio runtime and sends its event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            // The receiver is gone only after the loop exited.
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                debug!("quit requested");
                self.state.tui.should_quit = true;
            }
            UiEffect::FetchPage { request } => {
                let source = Arc::clone(&self.state.tui.source);
                let timeout = self.state.tui.config.fetch_timeout();
                self.spawn_effect(move || handlers::fetch_page(source, request, timeout));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
