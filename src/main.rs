//! Terminal SameGame runner (default binary).
//!
//! Uses crossterm for keyboard, mouse and terminal control and the
//! framebuffer-based renderer from the `term` crate.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_samegame::config::{ConfigError, GameConfig, USAGE};
use tui_samegame::core::GameState;
use tui_samegame::event_log::{EventLog, EventRecord};
use tui_samegame::input::{handle_key_event, handle_mouse_event, should_quit, PointerEvent};
use tui_samegame::term::{
    tile_color, ColorPulse, FrameBuffer, GameView, TerminalRenderer, Viewport,
};
use tui_samegame::types::{PULSE_FRAMES, PULSE_SPREAD, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match GameConfig::load(&args) {
        Ok(cfg) => cfg,
        Err(ConfigError::HelpRequested) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(e) => return Err(anyhow!("{e}\n{USAGE}")),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game_state = GameState::new(config.width, config.height, config.colors, config.seed);
    let mut log = EventLog::from_path(config.log_path.as_deref());
    log.record(&EventRecord::round_started(&game_state));

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pulse = ColorPulse::default();
    let mut pulse_for = game_state.selection_id();
    let mut finished_logged = false;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&game_state, &pulse, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let round = game_state.round_id();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        let (column, row) = pointer.position();
                        if let Some(p) = view.cell_at(game_state.grid(), viewport, column, row) {
                            match pointer {
                                PointerEvent::Hover { .. } => {
                                    game_state.hover(p);
                                }
                                PointerEvent::Press { .. } => {
                                    game_state.press(p);
                                }
                            }
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }

            if let Some(event) = game_state.take_last_event() {
                log.record(&EventRecord::matched(&event));
            }
            if game_state.round_id() != round {
                log.record(&EventRecord::round_started(&game_state));
                finished_logged = false;
            }
        }

        if !finished_logged && game_state.is_finished() {
            log.record(&EventRecord::round_finished(&game_state));
            finished_logged = true;
        }

        // Restart the highlight on every new selection.
        if game_state.selection_id() != pulse_for {
            pulse_for = game_state.selection_id();
            if let Some(color) = game_state.selected_color() {
                pulse = ColorPulse::around(tile_color(color), PULSE_SPREAD, PULSE_FRAMES);
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            pulse.update();
        }
    }
}
