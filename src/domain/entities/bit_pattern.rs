//! Bit pattern entity
//!
//! The 5x5 mosaic of an identicon. Only columns 0..=2 are read from the
//! hash; columns 3 and 4 mirror columns 1 and 0.

use super::ContentHash;
use std::fmt;

/// Width and height of the mosaic in cells
pub const PATTERN_SIZE: usize = 5;

/// Columns taken from the hash per row (left half plus the center)
const GENERATED_COLUMNS: usize = PATTERN_SIZE / 2 + 1;

/// Horizontally symmetric 5x5 grid of painted/unpainted cells
///
/// `true` means the cell is painted with the foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitPattern([[bool; PATTERN_SIZE]; PATTERN_SIZE]);

impl BitPattern {
    /// Derives the mosaic from a content hash
    ///
    /// Bits are consumed sequentially from bit 0 of byte 0, least-significant
    /// bit first, one per generated cell in row-major order: row 0 col 0,
    /// row 0 col 1, row 0 col 2, row 1 col 0, ... (15 bits in total).
    pub fn from_hash(hash: &ContentHash) -> Self {
        let mut cells = [[false; PATTERN_SIZE]; PATTERN_SIZE];
        let mut bit_index = 0;

        for row in cells.iter_mut() {
            for col in 0..GENERATED_COLUMNS {
                let painted = hash.bit(bit_index);
                row[col] = painted;
                row[PATTERN_SIZE - 1 - col] = painted;
                bit_index += 1;
            }
        }

        Self(cells)
    }

    /// Builds a pattern from explicit rows. No symmetry is enforced.
    pub const fn from_rows(rows: [[bool; PATTERN_SIZE]; PATTERN_SIZE]) -> Self {
        Self(rows)
    }

    /// Returns the rows of the mosaic
    pub fn rows(&self) -> &[[bool; PATTERN_SIZE]; PATTERN_SIZE] {
        &self.0
    }

    /// Returns whether a cell is painted; out-of-range cells are not
    pub fn is_painted(&self, row: usize, col: usize) -> bool {
        self.0
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Number of painted cells
    pub fn painted_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&cell| cell).count()
    }

    /// Checks the mirror invariant on every row
    pub fn is_symmetric(&self) -> bool {
        self.0
            .iter()
            .all(|row| (0..PATTERN_SIZE / 2).all(|col| row[col] == row[PATTERN_SIZE - 1 - col]))
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+{}+", "-".repeat(PATTERN_SIZE * 2))?;
        for row in &self.0 {
            write!(f, "|")?;
            for &cell in row {
                write!(f, "{}", if cell { "##" } else { "  " })?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "+{}+", "-".repeat(PATTERN_SIZE * 2))
    }
}
