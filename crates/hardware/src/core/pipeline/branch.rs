//! Branch and Delay-Slot Resolution.
//!
//! Control flow is resolved in Decode once the operands are available. The
//! architecture has a single delay slot: the instruction after a branch is always
//! fetched and executed, and a taken branch only changes the fetch after it.
//!
//! 1. **Resolution:** [`resolve_branch`] evaluates the condition and picks the next fetch address.
//! 2. **Fetch Steering:** [`FetchState`] holds a pending redirect until the fetch that consumes it.

use crate::common::constants::PC_MASK;
use crate::common::error::BranchError;
use crate::isa::{Instruction, Opcode};

/// Resolved operand values of a control-flow instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// Value of `rs`.
    pub rs: u32,
    /// Value of `rt`.
    pub rt: u32,
}

/// Outcome of resolving a branch or jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRedirect {
    /// Whether fetch leaves the sequential path.
    pub taken: bool,
    /// Fetch address after the delay slot.
    pub next_pc: u16,
}

/// Evaluates the condition of a branch opcode on signed operands.
const fn condition_holds(op: Opcode, rs: i32, rt: i32) -> Option<bool> {
    let taken = match op {
        Opcode::Beq => rs == rt,
        Opcode::Bne => rs != rt,
        Opcode::Blt => rs < rt,
        Opcode::Bgt => rs > rt,
        Opcode::Ble => rs <= rt,
        Opcode::Bge => rs >= rt,
        Opcode::Jal => true,
        _ => return None,
    };
    Some(taken)
}

/// Resolves a control-flow instruction.
///
/// The target is the instruction's own immediate field, masked to the 10-bit PC.
/// When the branch is not taken, fetch continues at `pc + 2`, the successor of
/// the delay slot.
///
/// # Arguments
///
/// * `inst` - The branch or `JAL` being resolved.
/// * `operands` - Forwarded values of `rs` and `rt`.
/// * `pc` - Address of the branch itself.
///
/// # Errors
///
/// [`BranchError::NotControlFlow`] when `inst` is not a branch or `JAL`.
pub fn resolve_branch(
    inst: &Instruction,
    operands: Operands,
    pc: u16,
) -> Result<FetchRedirect, BranchError> {
    let taken = condition_holds(inst.opcode, operands.rs as i32, operands.rt as i32).ok_or(
        BranchError::NotControlFlow {
            mnemonic: inst.opcode.mnemonic(),
        },
    )?;

    let next_pc = if taken {
        inst.imm as u32 & PC_MASK
    } else {
        (u32::from(pc) + 2) & PC_MASK
    };
    let next_pc = next_pc as u16;
    Ok(FetchRedirect { taken, next_pc })
}

/// Fetch-address state of one core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Fetch the program counter.
    #[default]
    Sequential,
    /// The next fetch comes from the given target.
    Redirected(u16),
}

impl FetchState {
    /// Records a resolved branch. Not-taken outcomes leave the state unchanged.
    ///
    /// Must be called after the delay slot has been fetched, i.e. at the end of the
    /// cycle in which the branch resolved.
    pub const fn arm(&mut self, redirect: FetchRedirect) {
        if redirect.taken {
            *self = Self::Redirected(redirect.next_pc);
        }
    }

    /// Address the next fetch will read, given the sequential program counter.
    pub const fn next_fetch_pc(self, pc: u16) -> u16 {
        match self {
            Self::Sequential => pc,
            Self::Redirected(target) => target,
        }
    }

    /// Returns the fetch address and reverts to [`FetchState::Sequential`].
    pub const fn consume(&mut self, pc: u16) -> u16 {
        let addr = self.next_fetch_pc(pc);
        *self = Self::Sequential;
        addr
    }
}
