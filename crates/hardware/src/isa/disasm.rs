//! Instruction Disassembler.
//!
//! Converts encoded instruction words into assembler text for program listings,
//! debug logging and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0033_1002), "add $r3, $r3, $imm, 2");
//! ```

use crate::isa::instruction::Instruction;

/// Disassembles one instruction word. Undecodable words render as `.word 0x…`.
pub fn disassemble(word: u32) -> String {
    Instruction::decode(word).map_or_else(|_| format!(".word {word:#010x}"), |inst| inst.to_string())
}

/// Produces a program listing of `words` up to the last non-zero word.
///
/// Each line reads `\t<op> <rd>, <rs>, <rt>, <imm>\t\t# PC=<pc>`.
pub fn listing(words: &[u32]) -> String {
    let len = words.iter().rposition(|w| *w != 0).map_or(0, |last| last + 1);
    words[..len]
        .iter()
        .enumerate()
        .map(|(pc, word)| format!("\t{}\t\t# PC={pc}\n", disassemble(*word)))
        .collect()
}
