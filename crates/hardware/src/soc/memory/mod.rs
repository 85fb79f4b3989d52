//! Shared Main Memory.
//!
//! This module implements the flat data memory shared by every core. It provides:
//! 1. **Storage:** A word vector sized at construction (2^21 words by default).
//! 2. **Addressing:** Addresses are masked to the memory size, so every access is in range.
//! 3. **Image I/O:** Loading the initial image and dumping the final contents for `memout`.
//!
//! Accesses complete in a single cycle; there is no cache or bus modelling.

use crate::common::constants::MAIN_MEM_SIZE;
use crate::soc::traits::DataPort;

/// Flat word-addressed main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainMemory {
    words: Vec<u32>,
    mask: u32,
}

impl MainMemory {
    /// Creates a zeroed memory of `size` words.
    ///
    /// `size` is clamped to `1..=MAIN_MEM_SIZE` and rounded up to a power of two so
    /// addresses can be masked.
    pub fn new(size: usize) -> Self {
        let size = size.clamp(1, MAIN_MEM_SIZE).next_power_of_two();
        Self {
            words: vec![0; size],
            mask: (size - 1) as u32,
        }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; memory holds at least one word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Copies `image` into memory starting at address 0. Words beyond the end are dropped.
    pub fn load(&mut self, image: &[u32]) {
        let n = image.len().min(self.words.len());
        self.words[..n].copy_from_slice(&image[..n]);
    }

    /// Memory contents, lowest address first.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Words up to and including the last non-zero word, padded to at least `min_words`.
    pub fn dump(&self, min_words: usize) -> &[u32] {
        let used = self
            .words
            .iter()
            .rposition(|w| *w != 0)
            .map_or(0, |last| last + 1);
        &self.words[..used.max(min_words).min(self.words.len())]
    }

    const fn index(&self, addr: u32) -> usize {
        (addr & self.mask) as usize
    }
}

impl Default for MainMemory {
    fn default() -> Self {
        Self::new(MAIN_MEM_SIZE)
    }
}

impl DataPort for MainMemory {
    fn read_word(&mut self, addr: u32) -> u32 {
        self.words[self.index(addr)]
    }

    fn write_word(&mut self, addr: u32, val: u32) {
        let idx = self.index(addr);
        self.words[idx] = val;
    }
}
