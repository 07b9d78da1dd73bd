//! Wizard flow state machine
//!
//! Screens run in a fixed order and end in [`FlowState::Done`]. `set_screen`
//! only announces and records the current screen; it never gates a
//! transition.

use std::fmt;

/// Wizard screens, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    ChooseYourAdventure,
    Payment,
}

impl Screen {
    pub const ORDER: [Screen; 2] = [Screen::ChooseYourAdventure, Screen::Payment];

    pub fn name(self) -> &'static str {
        match self {
            Self::ChooseYourAdventure => "choose-your-adventure",
            Self::Payment => "payment",
        }
    }

    /// Registry lookup by screen name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|s| s.name() == name)
    }

    /// The screen after this one, `None` for the last
    pub fn following(self) -> Option<Self> {
        let idx = Self::ORDER.iter().position(|s| *s == self)?;
        Self::ORDER.get(idx + 1).copied()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    At(Screen),
    Done,
}

impl FlowState {
    pub fn screen(self) -> Option<Screen> {
        match self {
            Self::At(screen) => Some(screen),
            Self::Done => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RsvpFlow {
    state: FlowState,
}

impl RsvpFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::At(Screen::ORDER[0]),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == FlowState::Done
    }

    /// Announce and record the screen the guest is on
    pub fn set_screen(&mut self, screen: Screen) {
        tracing::info!(screen = %screen, "Wizard screen entered");
        self.state = FlowState::At(screen);
    }

    /// Move one screen forward, or to `Done` after the last
    pub fn next(&mut self) -> FlowState {
        self.state = match self.state {
            FlowState::At(screen) => screen.following().map_or(FlowState::Done, FlowState::At),
            FlowState::Done => FlowState::Done,
        };
        if let FlowState::At(screen) = self.state {
            self.set_screen(screen);
        } else {
            tracing::info!("Wizard finished");
        }
        self.state
    }
}

impl Default for RsvpFlow {
    fn default() -> Self {
        Self::new()
    }
}
