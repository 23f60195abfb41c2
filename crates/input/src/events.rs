//! Event polling: a bounded non-blocking drain for the tick loop and a
//! blocking wait for the Start/GameOver screens.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::map::should_quit;

/// Maximum events consumed per tick; later arrivals wait for the next
/// drain.
pub const EVENT_BATCH_MAX: usize = 32;

/// An input observation, already classified for the flow controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A quit key (q, Q, Ctrl-C).
    Quit,
    /// Any other key press.
    Key(KeyCode),
    /// Terminal resize; the renderer should do a full redraw.
    Resize,
}

fn classify(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(key) {
                Some(InputEvent::Quit)
            } else {
                Some(InputEvent::Key(key.code))
            }
        }
        Event::Resize(..) => Some(InputEvent::Resize),
        _ => None,
    }
}

/// Drain all pending events without blocking, in arrival order.
///
/// Called once per Playing tick.
pub fn drain_events() -> io::Result<ArrayVec<InputEvent, EVENT_BATCH_MAX>> {
    let mut batch = ArrayVec::new();
    while !batch.is_full() && event::poll(Duration::ZERO)? {
        if let Some(ev) = classify(event::read()?) {
            let _ = batch.try_push(ev);
        }
    }
    Ok(batch)
}

/// Block until the next meaningful event.
///
/// This is the cooperative wait used by the Start and GameOver screens;
/// `event::read` parks the thread, so there is no busy spin.
pub fn wait_event() -> io::Result<InputEvent> {
    loop {
        if let Some(ev) = classify(event::read()?) {
            return Ok(ev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_classify_key_press() {
        assert_eq!(
            classify(press(KeyCode::Left)),
            Some(InputEvent::Key(KeyCode::Left))
        );
        assert_eq!(
            classify(press(KeyCode::Char(' '))),
            Some(InputEvent::Key(KeyCode::Char(' ')))
        );
    }

    #[test]
    fn test_classify_quit_keys() {
        assert_eq!(classify(press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        let ctrl_c = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
            KeyEventState::NONE,
        ));
        assert_eq!(classify(ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn test_classify_ignores_key_release() {
        let release = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert_eq!(classify(release), None);
    }

    #[test]
    fn test_classify_resize() {
        assert_eq!(classify(Event::Resize(80, 24)), Some(InputEvent::Resize));
    }
}
