//! Edit-distance scoring and per-character alignment of an attempt against a
//! reference translation.
//!
//! All lengths are counted in `char`s. Comparison is exact: callers that want
//! case folding or whitespace cleanup must normalize before calling in.

/// Unit-cost edit distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    SuffixTable::build(&a_chars, &b_chars).get(0, 0)
}

/// Similarity in `[0.0, 1.0]`: one minus the edit distance relative to the
/// longer string. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count()).max(1);
    let distance = levenshtein_distance(a, b);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}

/// Mark which characters of `reference` the attempt got right.
///
/// The result has exactly one entry per reference character. An entry is
/// `true` when a minimum-cost alignment pairs that character with an equal
/// attempt character, and `false` when it was substituted or never typed.
/// Extra characters in the attempt do not show up in the mask.
///
/// Among equally cheap alignments the leftmost one is chosen: the walk runs
/// front to back and prefers a match, then a substitution, then skipping an
/// extra attempt character, then skipping a reference character. For
/// `"helo"` against `"hello"` the second `l` is the one reported missing.
pub fn diff_mask(attempt: &str, reference: &str) -> Vec<bool> {
    let typed: Vec<char> = attempt.chars().collect();
    let expected: Vec<char> = reference.chars().collect();
    let table = SuffixTable::build(&typed, &expected);

    let mut mask = vec![false; expected.len()];
    let (mut i, mut j) = (0, 0);

    while i < typed.len() && j < expected.len() {
        let here = table.get(i, j);
        let same = typed[i] == expected[j];

        if same && table.get(i + 1, j + 1) == here {
            mask[j] = true;
            i += 1;
            j += 1;
        } else if !same && table.get(i + 1, j + 1) + 1 == here {
            i += 1;
            j += 1;
        } else if table.get(i + 1, j) + 1 == here {
            i += 1;
        } else {
            j += 1;
        }
    }

    mask
}

/// Full edit-distance table over suffixes: cell `(i, j)` holds the distance
/// between `typed[i..]` and `expected[j..]`.
struct SuffixTable {
    cells: Vec<usize>,
    width: usize,
}

impl SuffixTable {
    fn build(typed: &[char], expected: &[char]) -> Self {
        let rows = typed.len() + 1;
        let width = expected.len() + 1;
        let mut cells = vec![0; rows * width];

        for j in 0..width {
            cells[typed.len() * width + j] = expected.len() - j;
        }
        for i in 0..rows {
            cells[i * width + expected.len()] = typed.len() - i;
        }

        for i in (0..typed.len()).rev() {
            for j in (0..expected.len()).rev() {
                let cost = usize::from(typed[i] != expected[j]);
                let diagonal = cells[(i + 1) * width + j + 1] + cost;
                let skip_typed = cells[(i + 1) * width + j] + 1;
                let skip_expected = cells[i * width + j + 1] + 1;
                cells[i * width + j] = diagonal.min(skip_typed).min(skip_expected);
            }
        }

        Self { cells, width }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }
}
