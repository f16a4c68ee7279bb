use std::fmt;

/// Keyboard key identifier.
///
/// Covers the keys the widget set reacts to. Hosts should map platform
/// keycodes into these variants where possible and use `Key::Unknown(u32)`
/// with a stable platform code for everything else.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,
    Delete,
    Home,
    End,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters (named so shortcut chords like Ctrl+C can be matched).
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented above.
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Modifier keys held during a press.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// One committed key press.
///
/// `ch` carries the character this press produces, if any; editing widgets
/// insert from `ch` and navigate from `key`, so a host only has to fill
/// whichever side its platform reports.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub ch: Option<char>,
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key, ch: None, mods: Modifiers::default() }
    }

    /// Event for a printable character, with `key` left unknown.
    pub fn character(ch: char) -> Self {
        Self {
            key: Key::Unknown(ch as u32),
            ch: Some(ch),
            mods: Modifiers::default(),
        }
    }

    pub fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }
}
