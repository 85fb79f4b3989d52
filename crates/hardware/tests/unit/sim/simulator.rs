//! Multi-Core Simulator Tests.

use pipesim_core::common::{ConfigError, SimError};
use pipesim_core::config::Config;
use pipesim_core::isa::Opcode;
use pipesim_core::sim::Simulator;
use pipesim_core::soc::traits::DataPort;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{addi, branch, halt, lw, sw};

fn config(num_cores: usize) -> Config {
    let mut config = Config::default();
    config.general.num_cores = num_cores;
    config.memory.main_mem_words = 4096;
    config
}

#[test]
fn program_count_must_match_cores() {
    let err = Simulator::new(&config(4), &[vec![halt()], vec![halt()]], &[]).unwrap_err();
    assert!(matches!(
        err,
        SimError::ProgramCount {
            expected: 4,
            found: 2
        }
    ));
}

#[test]
fn oversized_memory_is_a_config_error() {
    let mut config = config(1);
    config.memory.main_mem_words = usize::MAX;
    let err = Simulator::new(&config, &[vec![halt()]], &[]).unwrap_err();
    assert!(matches!(
        err,
        SimError::Config(ConfigError::MemorySize { words: usize::MAX, .. })
    ));
}

#[test]
fn memin_is_loaded() {
    let sim = Simulator::new(&config(1), &[vec![halt()]], &[7, 8, 9]).unwrap();
    assert_eq!(&sim.memory.words()[..4], &[7, 8, 9, 0]);
}

#[test]
fn run_stops_when_every_core_halts() {
    let programs = [
        vec![halt()],
        vec![addi(2, 0, 1), addi(3, 0, 2), halt()],
    ];
    let mut sim = Simulator::new(&config(2), &programs, &[]).unwrap();

    let cycles = sim.run().unwrap();

    assert!(sim.all_halted());
    assert_eq!(cycles, 7);
    assert_eq!(sim.cores[0].stats.cycles, 5);
    assert_eq!(sim.cores[1].stats.cycles, 7);
    assert_eq!(sim.cores[0].trace.len(), 5, "a halted core stops tracing");
}

#[test]
fn stores_are_visible_to_other_cores() {
    let filler = addi(4, 4, 1);
    let programs = [
        vec![addi(2, 0, 9), sw(2, 0, 100), halt()],
        vec![filler, filler, filler, filler, lw(3, 0, 100), halt()],
    ];
    let mut sim = Simulator::new(&config(2), &programs, &[]).unwrap();

    let cycles = sim.run().unwrap();

    assert_eq!(cycles, 10);
    assert_eq!(sim.cores[1].regs.read(3, 0), 9);
    assert_eq!(sim.memory.read_word(100), 9);
}

#[test]
fn cycle_limit_ends_run() {
    let mut cfg = config(1);
    cfg.general.max_cycles = 25;
    let spin = vec![branch(Opcode::Beq, 0, 0, 0), addi(2, 2, 1), halt()];
    let mut sim = Simulator::new(&cfg, &[spin], &[]).unwrap();

    let cycles = sim.run().unwrap();

    assert_eq!(cycles, 25);
    assert!(!sim.all_halted());
}

#[test]
fn core_errors_carry_the_core_index() {
    let programs = [vec![halt()], vec![0xFF00_0000]];
    let mut sim = Simulator::new(&config(2), &programs, &[]).unwrap();

    let err = sim.run().unwrap_err();

    assert!(matches!(err, SimError::Core { core: 1, .. }), "got {err:?}");
}
