//! Hue grids and deterministic pixel traversal.
//!
//! A traversal is a lazy, finite iterator over hue samples. Each call to
//! [`traverse`] constructs a fresh iterator, so re-running the same grid
//! and config always yields the identical sequence.

use huetone_spec::{SonifySpec, TraversalMode};

use crate::error::{SonifyError, SonifyResult};

/// Row-major 2D array of hue values (half-range convention, 0..=180).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueGrid {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl HueGrid {
    /// Wraps row-major hue data; `None` unless `data.len() == width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == width.checked_mul(height)?).then_some(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a grid by evaluating `f(row, col)` for every position.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Hue at a position. Panics if out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.width + col]
    }

    /// Grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Strategy selector plus subsampling strides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Visiting order.
    pub mode: TraversalMode,
    /// Rows skipped between samples (>= 1).
    pub row_stride: usize,
    /// Columns skipped between samples (>= 1).
    pub col_stride: usize,
}

impl From<&SonifySpec> for TraversalConfig {
    fn from(spec: &SonifySpec) -> Self {
        Self {
            mode: spec.traversal,
            row_stride: spec.row_stride as usize,
            col_stride: spec.col_stride as usize,
        }
    }
}

/// Lazy hue-sample sequence over a grid.
///
/// Column-ordered modes visit one column at a time with the row varying
/// fastest; row-ordered modes are the symmetric analog. The descending
/// modes start at the last valid column/row index, never one past it.
#[derive(Debug, Clone)]
pub struct Traversal<'a> {
    grid: &'a HueGrid,
    config: TraversalConfig,
    outer_len: usize,
    inner_len: usize,
    outer: usize,
    inner: usize,
}

impl<'a> Traversal<'a> {
    fn position(&self) -> (usize, usize) {
        let (rs, cs) = (self.config.row_stride, self.config.col_stride);
        match self.config.mode {
            TraversalMode::LeftToRight => (self.inner * rs, self.outer * cs),
            TraversalMode::RightToLeft => {
                (self.inner * rs, self.grid.width() - 1 - self.outer * cs)
            }
            TraversalMode::TopToBottom => (self.outer * rs, self.inner * cs),
            TraversalMode::BottomToTop => {
                (self.grid.height() - 1 - self.outer * rs, self.inner * cs)
            }
            // Rejected at construction.
            TraversalMode::Radial | TraversalMode::Circular => unreachable!(),
        }
    }
}

impl Iterator for Traversal<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.outer >= self.outer_len {
            return None;
        }
        let (row, col) = Traversal::position(self);
        self.inner += 1;
        if self.inner >= self.inner_len {
            self.inner = 0;
            self.outer += 1;
        }
        Some(self.grid.get(row, col))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.outer_len - self.outer) * self.inner_len - self.inner;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Traversal<'_> {}

/// Number of positions visited along one axis of length `extent`.
fn steps(extent: usize, stride: usize) -> usize {
    extent.div_ceil(stride)
}

/// Starts a traversal of `grid` according to `config`.
///
/// # Errors
/// - `EmptyInput` for a zero-area grid.
/// - `NotImplemented` for the radial and circular modes.
pub fn traverse<'a>(grid: &'a HueGrid, config: &TraversalConfig) -> SonifyResult<Traversal<'a>> {
    if grid.is_empty() {
        return Err(SonifyError::empty_input("image grid"));
    }
    let (outer_len, inner_len) = match config.mode {
        TraversalMode::LeftToRight | TraversalMode::RightToLeft => (
            steps(grid.width(), config.col_stride),
            steps(grid.height(), config.row_stride),
        ),
        TraversalMode::TopToBottom | TraversalMode::BottomToTop => (
            steps(grid.height(), config.row_stride),
            steps(grid.width(), config.col_stride),
        ),
        TraversalMode::Radial | TraversalMode::Circular => {
            return Err(SonifyError::not_implemented(config.mode));
        }
    };
    Ok(Traversal {
        grid,
        config: *config,
        outer_len,
        inner_len,
        outer: 0,
        inner: 0,
    })
}
