//! Statistics Tests.

use pipesim_core::stats::CoreStats;
use pretty_assertions::assert_eq;

#[test]
fn report_lists_counters() {
    let stats = CoreStats {
        cycles: 10,
        instructions: 6,
        decode_stall: 1,
        branches_taken: 2,
        forwards: 3,
        loads: 4,
        stores: 5,
    };
    assert_eq!(
        stats.report(),
        "cycles 10\ninstructions 6\ndecode_stall 1\nbranches_taken 2\nforwards 3\n"
    );
}

#[test]
fn ipc() {
    assert_eq!(CoreStats::default().ipc(), 0.0);

    let stats = CoreStats {
        cycles: 8,
        instructions: 4,
        ..CoreStats::default()
    };
    assert!((stats.ipc() - 0.5).abs() < f64::EPSILON);
}
