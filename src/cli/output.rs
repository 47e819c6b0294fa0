//! Styled terminal output helpers with a plain-text fallback.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

pub fn set_color_enabled(enabled: bool) {
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

fn color_enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

pub fn section(title: impl fmt::Display) {
    let text = format!("=== {} ===", title);
    if color_enabled() {
        println!("\n{}", text.bold());
    } else {
        println!("\n{text}");
    }
}

pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn detail(message: impl fmt::Display) {
    let text = message.to_string();
    if color_enabled() {
        println!("{}", text.dimmed());
    } else {
        println!("{text}");
    }
}

pub fn success(message: impl fmt::Display) {
    let text = message.to_string();
    if color_enabled() {
        println!("{}", text.green());
    } else {
        println!("[ok] {text}");
    }
}

pub fn warning(message: impl fmt::Display) {
    let text = message.to_string();
    if color_enabled() {
        println!("{}", text.yellow());
    } else {
        println!("[warn] {text}");
    }
}

pub fn error(message: impl fmt::Display) {
    let text = message.to_string();
    if color_enabled() {
        eprintln!("{}", text.red());
    } else {
        eprintln!("[error] {text}");
    }
}

/// Clears the screen before re-rendering a step. Failures are ignored so a
/// non-TTY stdout degrades to scrolling output.
pub fn clear_screen() {
    let mut stdout = io::stdout();
    let _ = stdout.execute(Clear(ClearType::All));
    let _ = stdout.execute(cursor::MoveTo(0, 0));
    let _ = stdout.flush();
}
