//! The simulation backend.
//!
//! Cells beyond either edge of the row are permanently dead. Each cell's next
//! state is bit `4*left + 2*self + right` of the rule number.

use log::{debug, trace};
use std::convert::TryFrom;
use std::iter::{self, FusedIterator};

mod generation;

pub use generation::*;

use crate::ast::Input;
use crate::errors::{ErrorMsg, Result};

/// Builds the first generation from the initially live cells.
pub fn init_generation(input: &Input) -> Result<Generation> {
    let width = input.size.width;
    if width < 1 {
        return Err(ErrorMsg::WidthOutOfRange(width).without_span());
    }
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(width)
        .map_err(|_| ErrorMsg::WidthOutOfRange(width).without_span())?;
    cells.resize(width, false);
    for &cell in &input.init.cells {
        // Cell indices are 1-based.
        let idx = usize::try_from(cell)
            .ok()
            .filter(|idx| (1..=width).contains(idx))
            .ok_or_else(|| ErrorMsg::CellOutOfRange { cell, width }.without_span())?;
        cells[idx - 1] = true;
    }
    Ok(Generation::from(cells))
}

/// Computes the generation after `generation` using the given Wolfram rule
/// number.
pub fn next_generation(generation: &Generation, rule_number: u8) -> Generation {
    let cells = generation.cells();
    let first = match cells.first() {
        Some(&first) => first,
        None => return Generation::default(),
    };
    // 3-bit shift register holding (left, center, right). The cell left of
    // the first one is dead, so only the first cell needs to be fed in before
    // the loop.
    let mut window = first as u8;
    cells[1..]
        .iter()
        .copied()
        // The cell right of the last one is dead.
        .chain(iter::once(false))
        .map(|right| {
            window = (window << 1 | right as u8) & 0b111;
            (rule_number >> window) & 1 != 0
        })
        .collect::<Vec<bool>>()
        .into()
}

/// Builds the first generation and returns an iterator over all of them.
pub fn run(input: Input) -> Result<Generations> {
    Generations::new(input)
}

/// Iterator over the generations of an automaton, starting with the initial
/// one.
///
/// Each generation is computed only when it is requested, and only the most
/// recent one is kept.
#[derive(Debug, Clone)]
pub struct Generations {
    rule_number: u8,
    current: Generation,
    /// Number of generations produced so far.
    produced: usize,
    /// Total number of generations to produce.
    total: usize,
}
impl Generations {
    /// Builds the first generation of an automaton.
    pub fn new(input: Input) -> Result<Self> {
        let current = init_generation(&input)?;
        debug!(
            "Running rule {} on {} cells for {} generations",
            input.rule.number(),
            current.len(),
            input.size.generations,
        );
        Ok(Self {
            rule_number: input.rule.number(),
            current,
            produced: 0,
            total: input.size.generations,
        })
    }
    /// Returns the number of generations produced so far.
    pub fn produced(&self) -> usize {
        self.produced
    }
}
impl Iterator for Generations {
    type Item = Generation;

    fn next(&mut self) -> Option<Generation> {
        if self.produced >= self.total {
            return None;
        }
        if self.produced > 0 {
            self.current = next_generation(&self.current, self.rule_number);
        }
        trace!(
            "Generation {} has {} live cells",
            self.produced,
            self.current.population(),
        );
        self.produced += 1;
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.produced;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for Generations {}
impl FusedIterator for Generations {}
