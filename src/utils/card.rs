use unicode_width::UnicodeWidthStr;

use crate::bingo::PlayerCard;

const MARKED: &str = "[x]";
const UNMARKED: &str = "[ ]";

/// Draws a card as a monospace grid wrapped in a code block.
///
/// Every column is padded to its widest word so rows line up. Marked cells
/// are prefixed with `[x]`, the rest with `[ ]`.
pub fn render(card: &PlayerCard) -> String {
    let n = card.dimension();
    let widths: Vec<usize> = (0..n)
        .map(|c| {
            card.grid()
                .iter()
                .map(|row| cell_width(&row[c]))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::from("```\n");
    for (r, row) in card.grid().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, word)| {
                let mark = if card.is_marked(r, c) { MARKED } else { UNMARKED };
                let pad = widths[c].saturating_sub(cell_width(word));
                format!("{mark} {word}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out.push_str("```");
    out
}

/// Monospace columns a word takes. Hangul and most emoji are two columns wide.
/// Never less than the char count, so padding can't grow past the column.
fn cell_width(word: &str) -> usize {
    word.width().max(word.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::bingo::game::{MAX_DIMENSION, MAX_WORD_CHARS};

    #[test]
    fn test_render_layout_and_marks() {
        let words: Vec<String> = ["a", "bbb", "cc", "d"].iter().map(|w| w.to_string()).collect();
        let mut card = PlayerCard::generate(&words, 2, &mut StdRng::seed_from_u64(3));
        let first = card.grid()[0][0].clone();
        card.mark(&first).unwrap();

        let out = render(&card);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "```");
        assert_eq!(lines[3], "```");
        assert!(lines[1].starts_with(&format!("[x] {first}")));
        assert_eq!(out.matches("[x]").count(), 1);
        assert_eq!(out.matches("[ ]").count(), 3);
        for w in &words {
            assert!(out.contains(w.as_str()));
        }
    }

    #[test]
    fn test_wide_words_line_up() {
        let words: Vec<String> = ["사과", "ab", "cd", "바나나"].iter().map(|w| w.to_string()).collect();
        let card = PlayerCard::generate(&words, 2, &mut StdRng::seed_from_u64(1));
        let out = render(&card);
        let second_cell_columns: Vec<usize> = out
            .lines()
            .skip(1)
            .take(2)
            .map(|row| {
                let at = row.rfind('[').unwrap();
                row[..at].width()
            })
            .collect();
        assert_eq!(second_cell_columns[0], second_cell_columns[1]);
    }

    #[test]
    fn test_largest_card_fits_embed_description() {
        let words: Vec<String> = (0..MAX_DIMENSION * MAX_DIMENSION)
            .map(|i| {
                if i % 2 == 0 {
                    "빙".repeat(MAX_WORD_CHARS)
                } else {
                    format!("{i:x>width$}", width = MAX_WORD_CHARS)
                }
            })
            .collect();
        let mut card = PlayerCard::generate(&words, MAX_DIMENSION, &mut StdRng::seed_from_u64(9));
        let word = card.grid()[4][4].clone();
        card.mark(&word).unwrap();

        let out = render(&card);
        assert!(out.chars().count() <= 4096, "{} chars", out.chars().count());
    }
}
