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

//! Re-ordering of a page so a fixed row or column grid reads in the requested direction.
//!
//! Pagination fills pages in input order. When a page is shown as a grid with a fixed
//! number of columns but tiles should run down the columns (or a fixed number of rows
//! with tiles running along the rows), the renderer still consumes tiles in its own
//! flow order. Reflow places tiles into the grid in the requested direction and then
//! reads the grid back in the renderer's order.
//!
//! Both cases reduce to filling `lanes` lanes (columns or rows) of at most `depth`
//! slots each. With `n` tiles, `depth = ceil(n / lanes)` and the first `n % lanes`
//! lanes are full, or all of them when the division is exact. The remaining lanes are
//! one slot shorter. Lane `k` starts at source index `k * depth - max(0, k - full)`.

use crate::types::{ArrangeDirection, ConstraintMode};

/// How a page is re-ordered before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowPlan {
    /// Keep pagination order.
    Identity,
    /// Tiles run top to bottom through `cols` columns; the renderer flows rows.
    ColumnMajor { cols: usize },
    /// Tiles run left to right through `rows` rows; the renderer flows columns.
    RowMajor { rows: usize },
}

impl ReflowPlan {
    /// Pick the plan for a resolved constraint mode and direction.
    pub fn select(mode: ConstraintMode, direction: ArrangeDirection) -> Self {
        match (mode, direction) {
            (ConstraintMode::ColCount(cols), ArrangeDirection::Col) => ReflowPlan::ColumnMajor {
                cols: cols as usize,
            },
            (ConstraintMode::RowCount(rows), ArrangeDirection::Row) => ReflowPlan::RowMajor {
                rows: rows as usize,
            },
            _ => ReflowPlan::Identity,
        }
    }

    /// Source index for every output position of a page of `len` tiles.
    pub fn order(&self, len: usize) -> Vec<usize> {
        match *self {
            ReflowPlan::Identity => (0..len).collect(),
            ReflowPlan::ColumnMajor { cols } => LaneFill::new(len, cols).order(),
            ReflowPlan::RowMajor { rows } => LaneFill::new(len, rows).order(),
        }
    }

    /// Which tile of a page of `len` sits at grid slot (`row`, `col`).
    ///
    /// Returns `None` for empty slots and for plans without a fixed grid.
    pub fn source_index(&self, len: usize, row: usize, col: usize) -> Option<usize> {
        match *self {
            ReflowPlan::Identity => None,
            ReflowPlan::ColumnMajor { cols } => LaneFill::new(len, cols).source(col, row),
            ReflowPlan::RowMajor { rows } => LaneFill::new(len, rows).source(row, col),
        }
    }
}

/// Apply `plan` to a page. The result is a permutation of the input.
pub fn reflow<T>(page: Vec<T>, plan: ReflowPlan) -> Vec<T> {
    if plan == ReflowPlan::Identity {
        return page;
    }
    let order = plan.order(page.len());
    log::trace!("reflow {plan:?} over {} tiles: {order:?}", page.len());

    let mut slots: Vec<Option<T>> = page.into_iter().map(Some).collect();
    let out: Vec<T> = order.into_iter().filter_map(|i| slots[i].take()).collect();
    debug_assert_eq!(out.len(), slots.len());
    out
}

/// Sequential fill of `len` tiles into `lanes` lanes, earlier lanes taking the surplus.
#[derive(Debug, Clone, Copy)]
struct LaneFill {
    len: usize,
    lanes: usize,
    depth: usize,
    full_lanes: usize,
}

impl LaneFill {
    fn new(len: usize, lanes: usize) -> Self {
        let lanes = lanes.max(1);
        let depth = len.div_ceil(lanes);
        let full_lanes = match len % lanes {
            0 => lanes,
            rem => rem,
        };
        Self {
            len,
            lanes,
            depth,
            full_lanes,
        }
    }

    fn lane_len(&self, lane: usize) -> usize {
        if lane >= self.lanes || self.depth == 0 {
            0
        } else if lane < self.full_lanes {
            self.depth
        } else {
            self.depth - 1
        }
    }

    fn lane_start(&self, lane: usize) -> usize {
        lane * self.depth - lane.saturating_sub(self.full_lanes)
    }

    fn source(&self, lane: usize, pos: usize) -> Option<usize> {
        if pos < self.lane_len(lane) {
            Some(self.lane_start(lane) + pos)
        } else {
            None
        }
    }

    /// Read the lanes across: position 0 of every lane, then position 1, ...
    fn order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len);
        // Only the first `len` lanes can hold a tile.
        let used_lanes = self.lanes.min(self.len);
        for pos in 0..self.depth {
            for lane in 0..used_lanes {
                if let Some(i) = self.source(lane, pos) {
                    order.push(i);
                }
            }
        }
        order
    }
}
