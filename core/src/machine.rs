//! The `Machine` aggregate: owns every piece of datapath state and drives
//! one microcycle per call to [`Machine::cycle`].
//!
//! This collects what the reference implementation keeps as process-global
//! statics into a single struct so that components become plain functions
//! over a mutable borrow of it, per the single-writer discipline described
//! in the architecture notes.

use arbitrary_int::u9;

use crate::control_store::ControlStore;
use crate::memory::{Memory, MemoryPort};
use crate::registers::{Flags, Registers};
use crate::{alu, bus_b, bus_c, sequencer};

/// The full microarchitectural state: register file, flags, control store,
/// and main memory.
#[derive(Debug)]
pub struct Machine {
    /// The register file.
    pub regs: Registers,
    /// The ALU result flags, as of the most recently completed cycle.
    pub flags: Flags,
    /// The microprogram control store.
    pub control_store: ControlStore,
    /// Main memory.
    pub memory: Memory,
    /// The Bus-C value from the most recently completed cycle.
    ///
    /// Bus C is not an architectural register, but it is a persistent
    /// latch in the reference implementation (a global that keeps its
    /// value across calls): when `OP` is undefined, Bus C is left
    /// unchanged rather than reset to zero. This field reproduces that.
    last_bus_c: u32,
}

impl Machine {
    /// Build a machine with a zeroed register file, an all-zero control
    /// store, and zero-filled memory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            flags: Flags::default(),
            control_store: ControlStore::new(),
            memory: Memory::new(),
            last_bus_c: 0,
        }
    }

    /// Run a single microcycle: fetch, decode, Bus B, ALU + shifter, Bus C,
    /// memory, sequencer — in that order, per the architecture's phase
    /// contract.
    pub fn cycle(&mut self) {
        let mir = self.control_store.fetch(self.regs.mpc);
        self.regs.mir = mir.raw();
        self.regs.mpc = u9::new(mir.addr());

        let bus_b_value = bus_b::select(&self.regs, mir.b());
        let (bus_c_value, flags) = alu::evaluate(self.regs.h, bus_b_value, mir.op(), self.last_bus_c);
        let bus_c_value = alu::shift(bus_c_value, mir.sh());

        bus_c::distribute(&mut self.regs, mir.c(), bus_c_value);
        MemoryPort::operate(mir.mem(), &mut self.regs, &mut self.memory);

        self.regs.mpc = sequencer::next_mpc(self.regs.mpc, mir.jam(), flags, self.regs.mbr);
        self.flags = flags;
        self.last_bus_c = bus_c_value;
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
