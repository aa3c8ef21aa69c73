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

//! Uniform rectangle packing.
//!
//! A packer answers one question: what is the largest rectangle of a given aspect
//! ratio that can be replicated `count` times inside a box without overlap?

use serde::{Deserialize, Serialize};

use crate::{LayoutError, Result};

/// Result of packing `count` equal rectangles into a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackedRect {
    pub width: f64,
    pub height: f64,
    pub rows: usize,
    pub cols: usize,
}

impl PackedRect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Reject results that would leak NaN, infinities or empty grids into a layout.
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(LayoutError::InvalidGeometry(format!(
                "packer returned {}x{}",
                self.width, self.height
            )));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "packer returned a {}x{} grid",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

/// Geometry primitive used by the layout engine.
pub trait RectPacker {
    fn pack(
        &self,
        box_width: f64,
        box_height: f64,
        count: usize,
        aspect_width: f64,
        aspect_height: f64,
    ) -> Result<PackedRect>;
}

/// Exhaustive search over column counts for the largest tile.
///
/// For `cols` in `count..=1` the rows needed are `ceil(count / cols)`. The tile is
/// scaled to whichever of the width or height limit is tighter at the target ratio,
/// and the tallest tile wins. Every candidate shares the same ratio, so height orders
/// them like area does without overflowing or underflowing at extreme box sizes.
/// Ties keep the wider grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestRect;

impl RectPacker for LargestRect {
    fn pack(
        &self,
        box_width: f64,
        box_height: f64,
        count: usize,
        aspect_width: f64,
        aspect_height: f64,
    ) -> Result<PackedRect> {
        if !box_width.is_finite() || !box_height.is_finite() || box_width < 0.0 || box_height < 0.0
        {
            return Err(LayoutError::InvalidContainer {
                width: box_width,
                height: box_height,
            });
        }
        if count == 0 {
            return Err(LayoutError::InvalidTileCount(count));
        }
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(aspect_width) || !valid(aspect_height) {
            return Err(LayoutError::InvalidAspectRatio {
                width: aspect_width,
                height: aspect_height,
            });
        }

        let ratio = aspect_width / aspect_height;
        let mut best = PackedRect {
            width: 0.0,
            height: 0.0,
            rows: 0,
            cols: 0,
        };

        for cols in (1..=count).rev() {
            let rows = count.div_ceil(cols);
            // Height each tile could have if only the width constrained it.
            let width_limited = box_width / (cols as f64 * ratio);
            let height_limited = box_height / rows as f64;

            let (width, height) = if width_limited <= height_limited {
                let w = box_width / cols as f64;
                (w, w / ratio)
            } else {
                let h = height_limited;
                (h * ratio, h)
            };

            let candidate = PackedRect {
                width,
                height,
                rows,
                cols,
            };
            if candidate.height > best.height {
                best = candidate;
            }
        }

        Ok(best)
    }
}
