//! Screen flow: the state machine the control loop drives.
//!
//! The screen is an explicit value owned by the control loop, not
//! module-level state. Blocking waits live in the binary; transitions
//! live here where they can be unit-tested.

/// The four screens of a session. `Exited` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title/instructions; waits for a confirm key.
    Start,
    /// The tick loop: poll, update, render, delay.
    Playing,
    /// Final score plus restart/quit prompt; waits for input.
    GameOver,
    /// Presentation resources released; process exits cleanly.
    Exited,
}

/// Observed events that can move the machine between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSignal {
    /// Confirm key on the start screen.
    Confirm,
    /// Restart key on the game-over screen.
    Restart,
    /// Quit key or terminal hangup; honored from any blocking state.
    Quit,
    /// Self-collision detected at the top of a Playing tick.
    Collision,
}

impl Screen {
    /// Apply a signal, returning the next screen. Signals that do not
    /// apply to the current screen leave it unchanged; `Exited`
    /// absorbs everything.
    #[must_use]
    pub fn apply(self, signal: FlowSignal) -> Screen {
        match (self, signal) {
            (Screen::Exited, _) => Screen::Exited,
            (_, FlowSignal::Quit) => Screen::Exited,
            (Screen::Start, FlowSignal::Confirm) => Screen::Playing,
            (Screen::Playing, FlowSignal::Collision) => Screen::GameOver,
            (Screen::GameOver, FlowSignal::Restart) => Screen::Playing,
            (screen, _) => screen,
        }
    }

    pub fn is_exited(&self) -> bool {
        matches!(self, Screen::Exited)
    }
}
