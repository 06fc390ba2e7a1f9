use rand::seq::SliceRandom;
use rand::Rng;

use super::GameError;

/// One player's N×N word grid and the cells they have marked so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerCard {
    grid: Vec<Vec<String>>,
    marked: Vec<Vec<bool>>,
}

impl PlayerCard {
    /// Shuffles an owned copy of `words` and lays it out row-major.
    ///
    /// `words.len()` must equal `dimension * dimension`; the game checks this
    /// before any card is generated.
    pub fn generate<R: Rng + ?Sized>(words: &[String], dimension: usize, rng: &mut R) -> Self {
        debug_assert_eq!(words.len(), dimension * dimension);

        let mut shuffled = words.to_vec();
        shuffled.shuffle(rng);

        let grid: Vec<Vec<String>> = shuffled
            .chunks(dimension.max(1))
            .map(<[String]>::to_vec)
            .collect();
        let marked = vec![vec![false; dimension]; dimension];

        Self { grid, marked }
    }

    pub fn dimension(&self) -> usize {
        self.grid.len()
    }

    pub fn grid(&self) -> &[Vec<String>] {
        &self.grid
    }

    pub fn marked(&self) -> &[Vec<bool>] {
        &self.marked
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marked
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.iter().flatten().filter(|m| **m).count()
    }

    /// First row-major cell whose text equals `word` exactly.
    pub fn position_of(&self, word: &str) -> Option<(usize, usize)> {
        self.grid.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|cell| cell == word)
                .map(|c| (r, c))
        })
    }

    /// Marks `word` and reports whether a line through that cell is now complete.
    pub fn mark(&mut self, word: &str) -> Result<bool, GameError> {
        let (row, col) = self
            .position_of(word)
            .ok_or_else(|| GameError::WordNotFound(word.to_string()))?;

        if self.marked[row][col] {
            return Err(GameError::AlreadyMarked(word.to_string()));
        }

        self.marked[row][col] = true;
        Ok(self.completes_line(row, col))
    }

    fn completes_line(&self, row: usize, col: usize) -> bool {
        let n = self.dimension();
        let row_full = self.marked[row].iter().all(|m| *m);
        let col_full = (0..n).all(|r| self.marked[r][col]);
        let diag_full = row == col && (0..n).all(|i| self.marked[i][i]);
        let anti_full = row + col + 1 == n && (0..n).all(|i| self.marked[i][n - 1 - i]);
        row_full || col_full || diag_full || anti_full
    }

    /// Whether any row, column or diagonal is fully marked.
    pub fn has_bingo(&self) -> bool {
        let n = self.dimension();
        if n == 0 {
            return false;
        }
        let any_row = self.marked.iter().any(|row| row.iter().all(|m| *m));
        let any_col = (0..n).any(|c| (0..n).all(|r| self.marked[r][c]));
        let diag = (0..n).all(|i| self.marked[i][i]);
        let anti = (0..n).all(|i| self.marked[i][n - 1 - i]);
        any_row || any_col || diag || anti
    }

    /// All words on the card, row-major.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.grid.iter().flatten().map(String::as_str)
    }
}
