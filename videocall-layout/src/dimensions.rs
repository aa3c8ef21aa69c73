/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Tile size and per-page capacity for each constraint mode.

use crate::packer::{PackedRect, RectPacker};
use crate::types::{AspectRatio, ConstraintMode, GridShape, TileGeometry};
use crate::{LayoutError, Result};

/// Outcome of dimension resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDimensions {
    pub geometry: TileGeometry,
    pub grid: GridShape,
    /// How many tiles fit on one page. Always at least 1.
    pub effective_count: usize,
}

/// Container dimensions with negatives clamped to zero.
///
/// Non-finite sizes have no sensible layout and are rejected.
pub fn sanitize_container(width: f64, height: f64) -> Result<(f64, f64)> {
    if !width.is_finite() || !height.is_finite() {
        return Err(LayoutError::InvalidContainer { width, height });
    }
    Ok((width.max(0.0), height.max(0.0)))
}

/// Resolve geometry and capacity for `total` items.
///
/// `width`/`height` must already be sanitized and `aspect` validated.
pub fn resolve<P: RectPacker + ?Sized>(
    packer: &P,
    width: f64,
    height: f64,
    total: usize,
    aspect: AspectRatio,
    mode: ConstraintMode,
) -> Result<ResolvedDimensions> {
    if width <= 0.0 || height <= 0.0 {
        return Ok(empty_container(total, mode));
    }

    let pack = |w: f64, h: f64, count: usize| -> Result<PackedRect> {
        let packed = packer.pack(w, h, count, aspect.width, aspect.height)?;
        packed.validate()?;
        Ok(packed)
    };

    let resolved = match mode {
        ConstraintMode::TileCount(max) => {
            let count = total.min(max as usize).max(1);
            let packed = pack(width, height, count)?;
            ResolvedDimensions {
                geometry: geometry_of(&packed),
                grid: GridShape {
                    rows: packed.rows,
                    cols: packed.cols,
                },
                effective_count: count,
            }
        }
        ConstraintMode::RowCount(rows) => {
            let rows = rows as usize;
            let tile_height = height / rows as f64;
            let cols = clamp_count(width / tile_height);
            let cell_width = width / cols as f64;
            let packed = pack(cell_width, tile_height, 1)?;
            ResolvedDimensions {
                geometry: geometry_of(&packed),
                grid: GridShape { rows, cols },
                effective_count: rows.saturating_mul(cols),
            }
        }
        ConstraintMode::ColCount(cols) => {
            let cols = cols as usize;
            let cell_width = width / cols as f64;
            let rows = clamp_count(height / cell_width);
            let cell_height = height / rows as f64;
            let packed = pack(cell_width, cell_height, 1)?;
            ResolvedDimensions {
                geometry: geometry_of(&packed),
                grid: GridShape { rows, cols },
                effective_count: rows.saturating_mul(cols),
            }
        }
        ConstraintMode::Fit => {
            let count = total.max(1);
            let packed = pack(width, height, count)?;
            ResolvedDimensions {
                geometry: geometry_of(&packed),
                grid: GridShape {
                    rows: packed.rows,
                    cols: packed.cols,
                },
                effective_count: count,
            }
        }
    };

    log::debug!(
        "resolved {mode:?} for {total} tiles in {width}x{height}: {}x{} tiles, {}x{} grid, {} per page",
        resolved.geometry.width,
        resolved.geometry.height,
        resolved.grid.rows,
        resolved.grid.cols,
        resolved.effective_count
    );
    Ok(resolved)
}

/// Floor a derived row/column count and keep it at least 1.
fn clamp_count(ratio: f64) -> usize {
    if ratio.is_nan() {
        return 1;
    }
    // `as` saturates, so an infinite ratio stays finite.
    (ratio.floor() as usize).max(1)
}

fn geometry_of(packed: &PackedRect) -> TileGeometry {
    TileGeometry {
        width: packed.width,
        height: packed.height,
    }
}

fn empty_container(total: usize, mode: ConstraintMode) -> ResolvedDimensions {
    let grid = match mode {
        ConstraintMode::TileCount(max) => GridShape {
            rows: 1,
            cols: total.min(max as usize).max(1),
        },
        ConstraintMode::RowCount(rows) => GridShape {
            rows: rows as usize,
            cols: 1,
        },
        ConstraintMode::ColCount(cols) => GridShape {
            rows: 1,
            cols: cols as usize,
        },
        ConstraintMode::Fit => GridShape {
            rows: 1,
            cols: total.max(1),
        },
    };
    log::debug!("empty container, skipping packer for {mode:?}");
    ResolvedDimensions {
        geometry: TileGeometry::default(),
        grid,
        effective_count: grid.rows.saturating_mul(grid.cols),
    }
}
