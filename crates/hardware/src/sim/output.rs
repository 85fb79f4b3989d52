//! Result Files.
//!
//! Writers for everything a run produces:
//! 1. **regout:** `R2`..`R15`, one eight-digit hex word per line.
//! 2. **memout:** Main memory up to the last non-zero word, at least a configured minimum.
//! 3. **stats:** `name value` counter lines.
//! 4. **trace:** The per-cycle trace lines of a core.
//! 5. **listing:** Disassembly of a core's instruction memory.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::RegisterFile;
use crate::common::error::SimError;
use crate::isa::disasm::listing;
use crate::sim::Simulator;
use crate::soc::memory::MainMemory;
use crate::stats::CoreStats;

fn write_file(path: &Path, contents: &str) -> Result<(), SimError> {
    fs::write(path, contents).map_err(|source| SimError::Output {
        path: path.to_path_buf(),
        source,
    })
}

fn hex_lines(words: &[u32]) -> String {
    words.iter().map(|word| format!("{word:08X}\n")).collect()
}

/// Writes the traced registers `R2`..`R15`.
pub fn write_regout(path: &Path, regs: &RegisterFile) -> Result<(), SimError> {
    write_file(path, &hex_lines(regs.traced()))
}

/// Writes main memory up to its last non-zero word, padded to `min_words` lines.
pub fn write_memout(path: &Path, memory: &MainMemory, min_words: usize) -> Result<(), SimError> {
    write_file(path, &hex_lines(memory.dump(min_words)))
}

/// Writes a core's statistics.
pub fn write_stats(path: &Path, stats: &CoreStats) -> Result<(), SimError> {
    write_file(path, &stats.report())
}

/// Writes trace lines, one per line.
pub fn write_trace(path: &Path, lines: &[String]) -> Result<(), SimError> {
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    write_file(path, &out)
}

/// Writes the disassembly listing of an instruction memory image.
pub fn write_listing(path: &Path, imem: &[u32]) -> Result<(), SimError> {
    write_file(path, &listing(imem))
}

/// Writes every result file of a finished run into `dir`, creating it if needed.
///
/// Per core `N`: `core{N}trace.txt`, `regout{N}.txt`, `stats{N}.txt` and `imem{N}.asm`;
/// once: `memout.txt`.
///
/// # Arguments
///
/// * `sim` - The finished simulation.
/// * `dir` - Output directory.
/// * `memout_min_words` - Minimum `memout` length.
pub fn write_outputs(sim: &Simulator, dir: &Path, memout_min_words: usize) -> Result<(), SimError> {
    fs::create_dir_all(dir).map_err(|source| SimError::Output {
        path: dir.to_path_buf(),
        source,
    })?;

    for core in &sim.cores {
        let id = core.id;
        write_trace(&dir.join(format!("core{id}trace.txt")), &core.trace)?;
        write_regout(&dir.join(format!("regout{id}.txt")), &core.regs)?;
        write_stats(&dir.join(format!("stats{id}.txt")), &core.stats)?;
        write_listing(&dir.join(format!("imem{id}.asm")), &core.imem)?;
    }
    write_memout(&dir.join("memout.txt"), &sim.memory, memout_min_words)?;

    info!(dir = %dir.display(), "outputs written");
    Ok(())
}
