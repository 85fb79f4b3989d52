//! Forwarding Properties.
//!
//! Randomized checks of the forwarding laws over consistent pipeline states.

use pipesim_core::core::pipeline::hazards::{ForwardResult, resolve};
use pipesim_core::core::pipeline::latches::{PipelineState, StageRegister};
use pipesim_core::isa::{Instruction, Opcode};
use proptest::prelude::*;

use crate::common::builder::pipeline_state::{
    PipelineStateBuilder, StageBuilder, alu_writer, load_writer,
};

fn arb_opcode() -> impl Strategy<Value = Opcode> {
    prop::sample::select(Opcode::ALL.to_vec())
}

fn arb_latch() -> impl Strategy<Value = StageRegister> {
    (any::<bool>(), arb_opcode(), 0..16_usize, any::<u32>(), any::<u32>()).prop_map(
        |(valid, op, rd, alu, mem)| {
            if valid {
                StageBuilder::new()
                    .inst(Instruction::new(op, rd, 2, 3, 0))
                    .alu(alu)
                    .mem_data(mem)
                    .build()
            } else {
                StageBuilder::new().build()
            }
        },
    )
}

fn arb_state() -> impl Strategy<Value = PipelineState> {
    (arb_latch(), arb_latch(), arb_latch()).prop_map(|(ex, mem, wb)| {
        PipelineStateBuilder::new()
            .execute(ex)
            .memory(mem)
            .writeback(wb)
            .build()
    })
}

fn non_load_writer() -> impl Strategy<Value = Opcode> {
    prop::sample::select(vec![
        Opcode::Add,
        Opcode::Sub,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Mul,
        Opcode::Sll,
        Opcode::Sra,
        Opcode::Srl,
    ])
}

proptest! {
    #[test]
    fn zero_register_always_reads_zero(state in arb_state()) {
        prop_assert_eq!(resolve(0, &state), Ok(ForwardResult::Value(0)));
    }

    #[test]
    fn single_writer_is_forwarded(
        reg in 2..16_usize,
        stage in 0..3_usize,
        op in non_load_writer(),
        value in any::<u32>(),
    ) {
        let writer = StageBuilder::new()
            .inst(Instruction::new(op, reg, 4, 5, 0))
            .alu(value)
            .build();
        let builder = PipelineStateBuilder::new();
        let state = match stage {
            0 => builder.execute(writer),
            1 => builder.memory(writer),
            _ => builder.writeback(writer),
        }
        .build();
        prop_assert_eq!(resolve(reg, &state), Ok(ForwardResult::Value(value)));
    }

    #[test]
    fn youngest_writer_wins(reg in 2..16_usize, values in any::<[u32; 3]>()) {
        let state = PipelineStateBuilder::new()
            .execute(alu_writer(reg, values[0]))
            .memory(alu_writer(reg, values[1]))
            .writeback(alu_writer(reg, values[2]))
            .build();
        prop_assert_eq!(resolve(reg, &state), Ok(ForwardResult::Value(values[0])));
    }

    #[test]
    fn execute_load_always_stalls(reg in 2..16_usize, mem in arb_latch(), wb in arb_latch()) {
        let state = PipelineStateBuilder::new()
            .execute(load_writer(reg, 0, 0))
            .memory(mem)
            .writeback(wb)
            .build();
        prop_assert_eq!(resolve(reg, &state), Ok(ForwardResult::StallRequired));
    }

    #[test]
    fn resolution_is_pure(reg in 0..16_usize, state in arb_state()) {
        let snapshot = state;
        let first = resolve(reg, &state);
        let second = resolve(reg, &state);
        prop_assert_eq!(first, second);
        prop_assert_eq!(state, snapshot);
    }

    #[test]
    fn consistent_states_never_error(reg in 0..16_usize, state in arb_state()) {
        prop_assert!(resolve(reg, &state).is_ok());
    }
}
