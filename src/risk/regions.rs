//! High-risk region segmentation.
//!
//! Collapses a per-position score vector into maximal contiguous runs at
//! or above a threshold.

/// A maximal contiguous run of positions whose scores all meet or exceed
/// the segmentation threshold. Both bounds are inclusive, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First position of the run.
    pub start: usize,
    /// Last position of the run (inclusive).
    pub end: usize,
}

impl Region {
    /// Number of positions covered by the region (always ≥ 1).
    #[must_use]
    pub fn span(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether the region covers position `i`.
    #[must_use]
    pub fn contains(&self, i: usize) -> bool {
        self.start <= i && i <= self.end
    }

    /// Whether this region shares any position with `[start, end]`.
    #[must_use]
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start <= end && start <= self.end
    }
}

/// Find maximal contiguous regions where every score ≥ `threshold`.
///
/// Single left-to-right scan: a region opens on the first index at or
/// above the threshold, closes (inclusive) on the index before the first
/// subsequent drop below it, and a region still open at scan end closes at
/// the last index. Regions come out ascending and non-overlapping. Any
/// threshold is valid; one outside the score distribution legitimately
/// yields zero regions.
#[must_use]
pub fn segment(scores: &[f64], threshold: f64) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut open: Option<usize> = None;

    for (i, &score) in scores.iter().enumerate() {
        match open {
            None if score >= threshold => open = Some(i),
            Some(start) if score < threshold => {
                regions.push(Region { start, end: i - 1 });
                open = None;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        regions.push(Region {
            start,
            end: scores.len() - 1,
        });
    }

    regions
}
