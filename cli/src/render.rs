//! Textual rendering of machine state, reproducing the reference tool's
//! binary/hex register dump, operand stack table, and program window.

use mic1_core::memory::PROGRAM_BASE;
use mic1_core::Machine;

/// Render an 8-bit value as a string of `0`/`1` characters, MSB first.
fn binary_byte(value: u8) -> String {
    format!("{value:08b}")
}

/// Render a 32-bit value as four space-separated 8-bit groups, MSB first.
fn binary_word(value: u32) -> String {
    value
        .to_be_bytes()
        .iter()
        .map(|b| binary_byte(*b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the 9-bit MPC, MSB first.
fn binary_mpc(value: u16) -> String {
    format!("{:09b}", value & 0x1FF)
}

/// Render the 36-bit MIR, MSB first, with the reference tool's field-group
/// spacing: `ADDR | JAM | SH+OP | C | MEM+B`.
fn binary_mir(value: u64) -> String {
    let mut out = String::new();
    for j in 0..36 {
        if matches!(j, 9 | 12 | 20 | 29 | 32) {
            out.push(' ');
        }
        let bit = (value >> (35 - j)) & 1;
        out.push(if bit == 1 { '1' } else { '0' });
    }
    out
}

/// Print the operand stack between `LV` and `SP`, if both are nonzero.
pub fn render_stack(machine: &Machine) {
    let regs = &machine.regs;
    if regs.lv == 0 || regs.sp == 0 {
        return;
    }

    println!("\t\t  OPERAND STACK");
    println!("========================================");
    println!("     END\t   BINARY VALUE \t\tVALUE");

    let mut i = regs.sp;
    loop {
        let value = machine.memory.read_word(i);
        if i == regs.sp {
            print!("SP ->");
        } else if i == regs.lv {
            print!("LV ->");
        } else {
            print!("     ");
        }
        println!("{i:X} {} {value}", binary_word(value));

        if i == regs.lv {
            break;
        }
        i -= 1;
    }
    println!("========================================");
}

/// Print a five-instruction window of the program area around `PC`.
pub fn render_program_window(machine: &Machine) {
    let regs = &machine.regs;
    if (regs.pc as usize) < PROGRAM_BASE {
        return;
    }

    println!("\n\t\t\tProgram Area");
    println!("========================================");
    println!("\t\tBinary\t HEX  BYTE ADDRESS");

    let start = regs.pc.saturating_sub(2);
    for addr in start..=start + 4 {
        let byte = machine.memory.read_byte(addr);
        if addr == regs.pc {
            print!("Running >>  ");
        } else {
            print!("\t\t");
        }
        println!("{} 0x{byte:02X} \t{addr:X}", binary_byte(byte));
    }
    println!("========================================\n");
}

/// Print the full register file in binary and hex.
pub fn render_registers(machine: &Machine) {
    let regs = &machine.regs;
    let flags = &machine.flags;

    println!("\t\tREGISTERS");
    println!("\tBINARY\t\t\t\tHEX");
    println!("MAR: {}\t{:x}", binary_word(regs.mar), regs.mar);
    println!("MDR: {}\t{:x}", binary_word(regs.mdr), regs.mdr);
    println!("PC:  {}\t{:x}", binary_word(regs.pc), regs.pc);
    println!("MBR: \t\t{}\t\t{:x}", binary_byte(regs.mbr), regs.mbr);
    println!("SP:  {}\t{:x}", binary_word(regs.sp), regs.sp);
    println!("LV:  {}\t{:x}", binary_word(regs.lv), regs.lv);
    println!("CPP: {}\t{:x}", binary_word(regs.cpp), regs.cpp);
    println!("TOS: {}\t{:x}", binary_word(regs.tos), regs.tos);
    println!("OPC: {}\t{:x}", binary_word(regs.opc), regs.opc);
    println!("H:   {}\t{:x}", binary_word(regs.h), regs.h);
    println!("N: {}  Z: {}", u8::from(flags.n), u8::from(flags.z));
    println!("MPC: \t\t{}\t\t{:x}", binary_mpc(regs.mpc.value()), regs.mpc.value());
    print!("MIR: {}", binary_mir(regs.mir));
    println!();
}

/// Render the full per-cycle state dump: stack, program window, registers.
pub fn render(machine: &Machine) {
    render_stack(machine);
    render_program_window(machine);
    render_registers(machine);
}
