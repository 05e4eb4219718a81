//! Decoding of the 36-bit microinstruction word.
//!
//! A microinstruction is stored in the low 36 bits of a `u64` (the control
//! store file format is a raw dump of 64-bit words of which only the low 36
//! bits are architecturally meaningful, see [`crate::control_store`]). This
//! module exposes those bits as seven named fields instead of the raw
//! shift-and-mask arithmetic the reference implementation repeats at every
//! call site.

use bitfield::bitfield;

bitfield! {
    /// The raw bit layout of a microinstruction, LSB to MSB: `B`, `MEM`,
    /// `C`, `OP`, `SH`, `JAM`, `ADDR`.
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct MicroInstruction(u64);
    impl Debug;
    u16;
    /// The 9-bit next-MPC base, loaded into MPC by the decoder ahead of any
    /// jump modification by the sequencer.
    pub addr, set_addr: 35, 27;
    u8;
    /// The 3-bit jump/modify-MPC mask consumed by the sequencer.
    pub jam, set_jam: 26, 24;
    /// The 2-bit shifter control consumed by the ALU.
    pub sh, set_sh: 23, 22;
    /// The 6-bit ALU function code.
    pub op, set_op: 21, 16;
    u16;
    /// The 9-bit Bus-C destination mask.
    pub c, set_c: 15, 7;
    u8;
    /// The 3-bit memory operations mask (fetch/read/write).
    pub mem, set_mem: 6, 4;
    /// The 4-bit Bus-B source selector.
    pub b, set_b: 3, 0;
}

impl MicroInstruction {
    /// Mask applied when storing into or loading from a control-store slot:
    /// only the low 36 bits of the 64-bit word are meaningful.
    pub const BIT_MASK: u64 = (1 << 36) - 1;

    /// Wrap a raw 64-bit control-store word, discarding any bits above bit
    /// 35 (the control store file format permits, but does not use, the
    /// high 28 bits of each stored word).
    #[must_use]
    pub fn from_raw(word: u64) -> Self {
        Self(word & Self::BIT_MASK)
    }

    /// Return the raw 36-bit encoding of this microinstruction.
    #[must_use]
    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_every_field_independently() {
        let mut mi = MicroInstruction(0);
        mi.set_b(0b1010);
        mi.set_mem(0b101);
        mi.set_c(0b1_0110_1100);
        mi.set_op(0b11_1100);
        mi.set_sh(0b10);
        mi.set_jam(0b110);
        mi.set_addr(0b1_1001_0110);

        assert_eq!(mi.b(), 0b1010);
        assert_eq!(mi.mem(), 0b101);
        assert_eq!(mi.c(), 0b1_0110_1100);
        assert_eq!(mi.op(), 0b11_1100);
        assert_eq!(mi.sh(), 0b10);
        assert_eq!(mi.jam(), 0b110);
        assert_eq!(mi.addr(), 0b1_1001_0110);
    }

    #[test]
    fn from_raw_discards_bits_above_35() {
        let mi = MicroInstruction::from_raw(0xF_0000_0000 | 0b1);
        assert_eq!(mi.b(), 0b1);
        assert_eq!(mi.raw() >> 36, 0);
    }
}
