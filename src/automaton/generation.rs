use std::fmt;

/// Character for a live cell.
pub const LIVE_CHAR: char = '*';
/// Character for a dead cell.
pub const DEAD_CHAR: char = ' ';

/// One row of cells, `true` = live.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Generation(Vec<bool>);
impl Generation {
    /// Returns a generation of `width` dead cells.
    pub fn dead(width: usize) -> Self {
        Self(vec![false; width])
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether there are no cells at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Returns the cells, left to right.
    pub fn cells(&self) -> &[bool] {
        &self.0
    }
    /// Returns the number of live cells.
    pub fn population(&self) -> usize {
        self.0.iter().filter(|&&cell| cell).count()
    }

    /// Renders the generation as one character per cell.
    pub fn render(&self, live: char, dead: char) -> String {
        self.0
            .iter()
            .map(|&cell| if cell { live } else { dead })
            .collect()
    }
}
impl From<Vec<bool>> for Generation {
    fn from(cells: Vec<bool>) -> Self {
        Self(cells)
    }
}
impl From<Generation> for Vec<bool> {
    fn from(generation: Generation) -> Self {
        generation.0
    }
}
impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(LIVE_CHAR, DEAD_CHAR))
    }
}
