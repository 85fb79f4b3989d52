//! Fetch Stage Unit Tests.

use pipesim_core::core::Core;
use pipesim_core::core::pipeline::branch::FetchState;
use pipesim_core::core::pipeline::stages::fetch_stage;

use crate::common::builder::instruction::{addi, halt};

#[test]
fn fetches_sequentially() {
    let mut core = Core::new(0, &[addi(2, 0, 1), halt()], false);

    fetch_stage(&mut core, false).unwrap();

    assert!(core.fetch.valid);
    assert_eq!(core.fetch.pc, 0);
    assert_eq!(core.pc, 1);
}

#[test]
fn redirect_is_consumed() {
    let mut core = Core::new(0, &[addi(2, 0, 1); 8], false);
    core.pc = 3;
    core.fetch_state = FetchState::Redirected(6);

    fetch_stage(&mut core, false).unwrap();

    assert_eq!(core.fetch.pc, 6);
    assert_eq!(core.pc, 7);
    assert_eq!(core.fetch_state, FetchState::Sequential);
}

#[test]
fn stalled_decode_holds_fetch() {
    let mut core = Core::new(0, &[addi(2, 0, 1)], false);

    fetch_stage(&mut core, true).unwrap();

    assert!(!core.fetch.valid);
    assert_eq!(core.pc, 0);
}

#[test]
fn occupied_latch_is_not_overwritten() {
    let mut core = Core::new(0, &[addi(2, 0, 1), addi(3, 0, 1)], false);
    fetch_stage(&mut core, false).unwrap();
    fetch_stage(&mut core, false).unwrap();

    assert_eq!(core.fetch.pc, 0);
    assert_eq!(core.pc, 1);
}
