//! Interactive terminal front end for the datapath emulator.
//!
//! Loads `microprog.rom` and the program image named on the command line,
//! then single-steps the machine one microcycle per keystroke, rendering
//! the operand stack, program window, and register file between cycles.

mod render;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use mic1_core::{loader, Machine};

/// Restores the terminal's cooked mode on drop, including on panic, so a
/// crash never leaves the operator's shell in raw mode.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Block until a keystroke arrives, returning `true` if it requests exit
/// (`q`, `Q`, or Ctrl-C).
fn wait_for_keystroke() -> std::io::Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            let is_ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            let is_quit = matches!(key.code, KeyCode::Char('q' | 'Q'));
            return Ok(is_ctrl_c || is_quit);
        }
    }
}

fn main() {
    let program_path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: mic1 <program-image>");
            std::process::exit(1);
        }
    };

    let mut machine = Machine::new();
    loader::load_control_store(&mut machine.control_store, Path::new("microprog.rom"));
    loader::load_program(&mut machine.memory, Path::new(&program_path));

    let _raw_mode = match RawModeGuard::new() {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("failed to enter raw terminal mode: {err}");
            std::process::exit(1);
        }
    };

    loop {
        render::render(&machine);

        match wait_for_keystroke() {
            Ok(true) => std::process::exit(0),
            Ok(false) => machine.cycle(),
            Err(err) => {
                eprintln!("failed to read a keystroke: {err}");
                std::process::exit(1);
            }
        }
    }
}
