//! Block-matrix assembly.
//!
//! ## Purpose
//!
//! This module assembles dense matrices from grids of blocks. Placeholder
//! blocks (zeros, identity) take their size from the explicitly sized blocks
//! that share their block-row and block-column, so callers never spell out
//! the shape of a padding block.
//!
//! ## Key concepts
//!
//! * **autostack**: vertically stack the horizontal concatenation of each block-row.
//! * **diagstack**: place matrices along the diagonal, zero elsewhere.
//!
//! ## Invariants
//!
//! * Every block-row has one height and every block-column one width.
//! * A placeholder whose row height or column width cannot be inferred is an error.
//!
//! ## Non-goals
//!
//! * This module has no knowledge of Gaussian semantics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use nalgebra::{DMatrix, RealField};

use crate::primitives::errors::MvarError;

// ============================================================================
// Block
// ============================================================================

/// One cell of an `autostack` grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<T> {
    /// An explicit matrix.
    Matrix(DMatrix<T>),

    /// A 1x1 block holding a scalar.
    Scalar(T),

    /// A zero block sized from its neighbours.
    Zeros,

    /// An identity block sized from its neighbours (must come out square).
    Identity,
}

impl<T: RealField + Copy> Block<T> {
    fn shape(&self) -> Option<(usize, usize)> {
        match self {
            Block::Matrix(m) => Some(m.shape()),
            Block::Scalar(_) => Some((1, 1)),
            Block::Zeros | Block::Identity => None,
        }
    }
}

impl<T> From<DMatrix<T>> for Block<T> {
    fn from(matrix: DMatrix<T>) -> Self {
        Block::Matrix(matrix)
    }
}

// ============================================================================
// Stacking
// ============================================================================

/// Assemble a matrix from a grid of blocks, inferring placeholder sizes.
pub fn autostack<T: RealField + Copy>(rows: &[Vec<Block<T>>]) -> Result<DMatrix<T>, MvarError> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    if let Some(row) = rows.iter().find(|row| row.len() != n_cols) {
        return Err(MvarError::DimensionMismatch {
            expected: n_cols,
            got: row.len(),
        });
    }

    let mut heights: Vec<Option<usize>> = vec![None; n_rows];
    let mut widths: Vec<Option<usize>> = vec![None; n_cols];

    for (i, row) in rows.iter().enumerate() {
        for (j, block) in row.iter().enumerate() {
            if let Some((h, w)) = block.shape() {
                settle(&mut heights[i], h)?;
                settle(&mut widths[j], w)?;
            }
        }
    }

    let heights = heights
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or(MvarError::SizeInference("block-row height"))?;
    let widths = widths
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or(MvarError::SizeInference("block-column width"))?;

    let mut out = DMatrix::zeros(heights.iter().sum(), widths.iter().sum());
    let mut r0 = 0;
    for (i, row) in rows.iter().enumerate() {
        let mut c0 = 0;
        for (j, block) in row.iter().enumerate() {
            let (h, w) = (heights[i], widths[j]);
            match block {
                Block::Matrix(m) => out.view_mut((r0, c0), (h, w)).copy_from(m),
                Block::Scalar(s) => out[(r0, c0)] = *s,
                Block::Zeros => {}
                Block::Identity => {
                    if h != w {
                        return Err(MvarError::DimensionMismatch {
                            expected: h,
                            got: w,
                        });
                    }
                    out.view_mut((r0, c0), (h, w)).fill_with_identity();
                }
            }
            c0 += w;
        }
        r0 += heights[i];
    }

    Ok(out)
}

/// Record a block extent, failing if it disagrees with one already seen.
fn settle(slot: &mut Option<usize>, extent: usize) -> Result<(), MvarError> {
    match *slot {
        Some(known) if known != extent => Err(MvarError::DimensionMismatch {
            expected: known,
            got: extent,
        }),
        _ => {
            *slot = Some(extent);
            Ok(())
        }
    }
}

/// Place matrices along the diagonal of a zero matrix.
pub fn diagstack<T: RealField + Copy>(blocks: &[&DMatrix<T>]) -> DMatrix<T> {
    let rows = blocks.iter().map(|b| b.nrows()).sum();
    let cols = blocks.iter().map(|b| b.ncols()).sum();

    let mut out = DMatrix::zeros(rows, cols);
    let (mut r0, mut c0) = (0, 0);
    for block in blocks {
        out.view_mut((r0, c0), block.shape()).copy_from(*block);
        r0 += block.nrows();
        c0 += block.ncols();
    }
    out
}

/// Concatenate matrices left to right. All must share a row count.
pub fn hstack<T: RealField + Copy>(blocks: &[&DMatrix<T>]) -> Result<DMatrix<T>, MvarError> {
    let grid = vec![blocks.iter().map(|&b| Block::Matrix(b.clone())).collect()];
    autostack(&grid)
}
