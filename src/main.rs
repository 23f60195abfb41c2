//! Terminal Snake runner (default binary).
//!
//! A single control loop owns the engine, the screen state, and the
//! renderer; there are no process-wide singletons. Gameplay speed is a
//! fixed 100ms sleep per tick, not a delta-time scheduler.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_snake::core::{FlowSignal, Game, GameEvent, Screen};
use tui_snake::input::{self, InputEvent, IntentLatch};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::TICK_DELAY_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(seed_from_clock());
    let view = GameView::default();
    let mut screen = Screen::Start;

    loop {
        match screen {
            Screen::Start => {
                let mut fb = view.render_start(viewport());
                term.draw(&mut fb)?;

                match input::wait_event()? {
                    InputEvent::Quit => screen = screen.apply(FlowSignal::Quit),
                    InputEvent::Key(code) if input::is_confirm(code) => {
                        screen = screen.apply(FlowSignal::Confirm);
                    }
                    InputEvent::Resize => term.invalidate(),
                    InputEvent::Key(_) => {}
                }
            }

            Screen::Playing => {
                // Collision is checked against the previous tick's
                // movement, before this frame's input and draw.
                if game.check_self_collision() {
                    screen = screen.apply(FlowSignal::Collision);
                    continue;
                }

                let mut latch = IntentLatch::new(game.direction(), game.snake().len());
                for event in input::drain_events()? {
                    match event {
                        InputEvent::Quit => screen = screen.apply(FlowSignal::Quit),
                        InputEvent::Key(code) => {
                            if let Some(dir) = input::direction_for_key(code) {
                                latch.offer(dir);
                            }
                        }
                        InputEvent::Resize => term.invalidate(),
                    }
                }
                if screen.is_exited() {
                    continue;
                }

                if let Some(dir) = latch.take() {
                    game.set_direction(dir);
                }

                game.ensure_food();

                let mut fb = view.render(&game, viewport());
                term.draw(&mut fb)?;

                game.step();
                if game.take_last_event() == Some(GameEvent::FoodEaten) {
                    term.bell()?;
                }

                thread::sleep(Duration::from_millis(TICK_DELAY_MS));
            }

            Screen::GameOver => {
                let mut fb = view.render_game_over(game.score(), viewport());
                term.draw(&mut fb)?;

                match input::wait_event()? {
                    InputEvent::Quit => screen = screen.apply(FlowSignal::Quit),
                    InputEvent::Key(code) if input::is_restart(code) => {
                        game.reset();
                        screen = screen.apply(FlowSignal::Restart);
                    }
                    InputEvent::Resize => term.invalidate(),
                    InputEvent::Key(_) => {}
                }
            }

            Screen::Exited => return Ok(()),
        }
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
