//! A cycle-accurate emulator for a simple microprogrammed stack machine,
//! modeled on the classic two-bus (`Bus B`/`Bus C`) microarchitecture:
//! a register file, a microcode control store, an ALU with a shifter, and
//! a byte-addressed memory port, driven one microcycle at a time by a
//! sequencer that can jam the flags and the fetched opcode byte into the
//! next microprogram address.
//!
//! This crate is the pure datapath: no file I/O and no terminal rendering
//! live here (see the `cli` crate for both). [`machine::Machine`] is the
//! entry point; call [`machine::Machine::cycle`] once per clock tick.

#![forbid(missing_docs)]

pub mod alu;
pub mod bus_b;
pub mod bus_c;
pub mod control_store;
pub mod loader;
pub mod machine;
pub mod memory;
pub mod microinstruction;
pub mod registers;
pub mod sequencer;

pub use machine::Machine;
