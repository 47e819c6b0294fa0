use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal,
};

/// Puts the terminal into raw mode for the duration of a key read and
/// restores it on drop, so rendering keeps normal line discipline.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    pub fn deactivate(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Char(char),
    Unknown,
}

/// Blocks until the next key press and maps it onto the wizard's
/// navigation vocabulary. Release/repeat events are ignored so terminals
/// reporting both do not double-step.
pub fn read_nav_key() -> NavKey {
    let Ok(mut guard) = RawModeGuard::activate() else {
        return NavKey::Unknown;
    };
    let key = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                break map_key_code(key.code)
            }
            Ok(_) => continue,
            Err(_) => break NavKey::Unknown,
        }
    };
    guard.deactivate();
    key
}

pub fn map_key_code(code: KeyCode) -> NavKey {
    match code {
        KeyCode::Up => NavKey::Up,
        KeyCode::Down => NavKey::Down,
        KeyCode::Left => NavKey::Left,
        KeyCode::Right => NavKey::Right,
        KeyCode::Enter => NavKey::Enter,
        KeyCode::Esc => NavKey::Esc,
        KeyCode::Char(c) => NavKey::Char(c.to_ascii_lowercase()),
        _ => NavKey::Unknown,
    }
}
