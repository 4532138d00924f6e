//! Myers' diff algorithm
//!
//! Computes the shortest edit script between two line sequences and groups
//! the changed regions into patch hunks with surrounding context.

use derive_new::new;
use std::fmt::Display;

/// Unchanged lines kept around each changed region
const HUNK_CONTEXT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T>
where
    T: Clone + Into<String>,
{
    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { value } => format!("-{}", value.clone().into()),
            Edit::Insert { value } => format!("+{}", value.clone().into()),
            Edit::Equal { value } => format!(" {}", value.clone().into()),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    /// The full edit script, oldest line first.
    pub fn edits(&self) -> Vec<Edit<T>> {
        let mut edits = Vec::new();

        for (prev_x, prev_y, x, y) in self.backtrack() {
            if x == prev_x {
                // Insert: only y increased
                if prev_y < self.b.len() as isize {
                    edits.push(Edit::Insert {
                        value: self.b[prev_y as usize].clone(),
                    });
                }
            } else if y == prev_y {
                // Delete: only x increased
                if prev_x < self.a.len() as isize {
                    edits.push(Edit::Delete {
                        value: self.a[prev_x as usize].clone(),
                    });
                }
            } else {
                // Equal: both increased (diagonal move)
                if prev_x < self.a.len() as isize {
                    edits.push(Edit::Equal {
                        value: self.a[prev_x as usize].clone(),
                    });
                }
            }
        }

        edits.reverse();
        edits
    }

    /// The edit script grouped into hunks with [`HUNK_CONTEXT`] unchanged
    /// lines on either side.
    pub fn hunks(&self) -> Vec<Hunk<T>> {
        Hunk::filter(self.edits())
    }

    fn shortest_edit_trace(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 1];
        v[offset] = 0; // v[0] = 0

        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // we could have only come from k+1, thus an insertion
                    v[idx + 1]
                } else if k == d {
                    // we could have only come from k-1, thus a deletion
                    v[idx - 1] + 1
                } else {
                    // we could have come from either k-1 (deletion) or k+1 (insertion)
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (x + y) as usize;
        let mut edit_path = Vec::new();

        let trace = self.shortest_edit_trace();

        for (d, v) in trace.iter().enumerate().rev() {
            let k = x - y;

            let prev_k = if k == -(d as isize) {
                k + 1
            } else if k == (d as isize) {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[(offset as isize + k_del) as usize] + 1 > v[(offset as isize + k_ins) as usize]
                {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }
}

/// A contiguous run of edits with its 1-based offsets into both sides.
///
/// A start of 0 with size 0 marks a side that contributes no lines (the
/// added/deleted file case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    a_start: usize,
    a_size: usize,
    b_start: usize,
    b_size: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    pub fn a_start(&self) -> usize {
        self.a_start
    }

    pub fn a_size(&self) -> usize {
        self.a_size
    }

    pub fn b_start(&self) -> usize {
        self.b_start
    }

    pub fn b_size(&self) -> usize {
        self.b_size
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    /// Group an edit script into hunks. Changed regions separated by at most
    /// `2 * HUNK_CONTEXT` unchanged lines share a hunk.
    pub fn filter(edits: Vec<Edit<T>>) -> Vec<Hunk<T>> {
        // cumulative a/b line counts after each edit
        let mut consumed = Vec::with_capacity(edits.len());
        let (mut a_lines, mut b_lines) = (0usize, 0usize);
        for edit in &edits {
            match edit {
                Edit::Delete { .. } => a_lines += 1,
                Edit::Insert { .. } => b_lines += 1,
                Edit::Equal { .. } => {
                    a_lines += 1;
                    b_lines += 1;
                }
            }
            consumed.push((a_lines, b_lines));
        }

        let changed: Vec<usize> = edits
            .iter()
            .enumerate()
            .filter(|(_, edit)| !matches!(edit, Edit::Equal { .. }))
            .map(|(index, _)| index)
            .collect();

        let mut hunks = Vec::new();
        let mut cluster: Option<(usize, usize)> = None;

        for index in changed {
            cluster = match cluster {
                Some((first, last)) if index - last <= 2 * HUNK_CONTEXT => Some((first, index)),
                Some(range) => {
                    hunks.push(Self::build(&edits, &consumed, range));
                    Some((index, index))
                }
                None => Some((index, index)),
            };
        }
        if let Some(range) = cluster {
            hunks.push(Self::build(&edits, &consumed, range));
        }

        hunks
    }

    fn build(
        edits: &[Edit<T>],
        consumed: &[(usize, usize)],
        (first, last): (usize, usize),
    ) -> Hunk<T> {
        let start = first.saturating_sub(HUNK_CONTEXT);
        let end = usize::min(edits.len() - 1, last + HUNK_CONTEXT);

        let (a_before, b_before) = if start == 0 {
            (0, 0)
        } else {
            consumed[start - 1]
        };
        let (a_after, b_after) = consumed[end];

        let a_size = a_after - a_before;
        let b_size = b_after - b_before;

        Hunk {
            a_start: if a_size == 0 { a_before } else { a_before + 1 },
            a_size,
            b_start: if b_size == 0 { b_before } else { b_before + 1 },
            b_size,
            edits: edits[start..=end].to_vec(),
        }
    }
}
