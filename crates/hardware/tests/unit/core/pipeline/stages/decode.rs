//! Decode Stage Unit Tests.
//!
//! Drives `decode_stage` directly on a hand-built core to check operand
//! capture, stall signalling and one-time branch resolution.

use pipesim_core::core::Core;
use pipesim_core::core::pipeline::latches::StageRegister;
use pipesim_core::core::pipeline::stages::decode_stage;
use pipesim_core::isa::{Instruction, Opcode};

use crate::common::builder::pipeline_state::{alu_writer, load_writer};

fn core_with_decode(inst: Instruction, pc: u16) -> Core {
    let mut core = Core::new(0, &[], false);
    core.decode = StageRegister::fetched(pc, inst.encode(), inst);
    core
}

#[test]
fn captures_register_file_operands() {
    let mut core = core_with_decode(Instruction::new(Opcode::Add, 4, 2, 3, 0), 0);
    core.regs.write(2, 10);
    core.regs.write(3, 20);

    decode_stage(&mut core).unwrap();

    assert_eq!(core.decode.rs_value, 10);
    assert_eq!(core.decode.rt_value, 20);
    assert!(!core.decode.stalled);
    assert_eq!(core.stats.forwards, 0);
}

#[test]
fn store_reads_data_register() {
    let mut core = core_with_decode(Instruction::new(Opcode::Sw, 5, 0, 1, 16), 0);
    core.pipeline.memory = alu_writer(5, 0xABCD);

    decode_stage(&mut core).unwrap();

    assert_eq!(core.decode.store_data, 0xABCD);
    assert_eq!(core.decode.rt_value, 16, "R1 supplies the immediate");
    assert_eq!(core.stats.forwards, 1);
}

#[test]
fn load_in_execute_stalls_decode() {
    let mut core = core_with_decode(Instruction::new(Opcode::Add, 4, 2, 3, 0), 1);
    core.pipeline.execute = load_writer(3, 0x10, 0);

    decode_stage(&mut core).unwrap();

    assert!(core.decode.stalled);
    assert_eq!(core.stats.decode_stall, 1);
}

#[test]
fn taken_branch_resolves_once() {
    let mut core = core_with_decode(Instruction::new(Opcode::Beq, 0, 0, 0, 0x30), 4);

    decode_stage(&mut core).unwrap();
    assert!(core.decode.branch_resolved);
    assert_eq!(core.pending_redirect.map(|r| r.next_pc), Some(0x30));
    assert_eq!(core.stats.branches_taken, 1);

    core.pending_redirect = None;
    decode_stage(&mut core).unwrap();
    assert_eq!(core.pending_redirect, None, "a resolved branch is not resolved again");
    assert_eq!(core.stats.branches_taken, 1);
}

#[test]
fn halt_stops_fetch() {
    let mut core = core_with_decode(Instruction::new(Opcode::Halt, 0, 0, 0, 0), 2);
    core.fetch = StageRegister::fetched(3, 0, Instruction::default());

    decode_stage(&mut core).unwrap();

    assert!(core.halt_fetch);
    assert!(!core.fetch.valid);
}
