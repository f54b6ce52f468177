//! Key probe: shows which menu input each key press maps to.
//!
//! Useful for checking a terminal's key reporting. Ctrl+C exits.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tui_pause::input::{handle_key_event, is_interrupt};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = probe();
    let _ = terminal::disable_raw_mode();
    result
}

fn probe() -> Result<()> {
    let mut out = io::stdout();
    write!(out, "press keys (ctrl+c to exit)\r\n")?;
    out.flush()?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if is_interrupt(key) {
            return Ok(());
        }
        let kind = match key.kind {
            KeyEventKind::Press => "press",
            KeyEventKind::Repeat => "repeat",
            KeyEventKind::Release => "release",
        };
        let mapped = handle_key_event(key)
            .map(|input| input.as_str())
            .unwrap_or("-");
        write!(out, "{:<7} {:?} -> {}\r\n", kind, key.code, mapped)?;
        out.flush()?;
    }
}
