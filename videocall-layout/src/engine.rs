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

use serde::{Deserialize, Serialize};

use crate::dimensions::{self, ResolvedDimensions};
use crate::packer::{LargestRect, RectPacker};
use crate::pagination::paginate;
use crate::reflow::{reflow, ReflowPlan};
use crate::types::{
    ArrangeDirection, AspectRatio, ConstraintMode, DisplayShape, GridShape, LayoutConstraints,
    OverflowPolicy, Page, ScrollAxis, TileDescriptor, TileGeometry,
};
use crate::Result;

/// Size of the element the video list is rendered into, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything a layout pass depends on besides the tiles themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutRequest {
    pub container: ContainerSize,
    #[serde(flatten)]
    pub constraints: LayoutConstraints,
    /// Ignored for circular tiles.
    pub aspect_ratio: AspectRatio,
    pub display_shape: DisplayShape,
    pub direction: ArrangeDirection,
    pub overflow: OverflowPolicy,
}

impl LayoutRequest {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            container: ContainerSize::new(width, height),
            ..Default::default()
        }
    }

    pub fn with_constraints(mut self, constraints: LayoutConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_display_shape(mut self, display_shape: DisplayShape) -> Self {
        self.display_shape = display_shape;
        self
    }

    pub fn with_direction(mut self, direction: ArrangeDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Aspect ratio actually used: circles are always square.
    pub fn effective_aspect_ratio(&self) -> AspectRatio {
        match self.display_shape {
            DisplayShape::Circle => AspectRatio::SQUARE,
            DisplayShape::Rectangle => self.aspect_ratio,
        }
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Size of every tile.
    pub geometry: TileGeometry,
    /// Grid of a full page.
    pub grid: GridShape,
    /// Tiles per page.
    pub effective_count: usize,
    /// Pages in carousel order, tiles in render order.
    pub pages: Vec<Page>,
    /// `None` when overflowing tiles are hidden.
    pub scroll_axis: Option<ScrollAxis>,
}

impl Layout {
    /// Every tile across all pages, in render order.
    pub fn tiles(&self) -> impl Iterator<Item = &TileDescriptor> {
        self.pages.iter().flat_map(|page| page.tiles.iter())
    }
}

/// Computes tile geometry and pages for a video list.
///
/// The engine holds no state between calls; the same inputs always produce the same
/// layout, so callers simply re-run it whenever the container, the tiles or the
/// constraints change.
#[derive(Debug, Clone, Default)]
pub struct TileLayoutEngine<P = LargestRect> {
    packer: P,
}

impl TileLayoutEngine<LargestRect> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: RectPacker> TileLayoutEngine<P> {
    pub fn with_packer(packer: P) -> Self {
        Self { packer }
    }

    pub fn packer(&self) -> &P {
        &self.packer
    }

    pub fn layout(&self, request: &LayoutRequest, items: &[TileDescriptor]) -> Result<Layout> {
        let aspect = request.effective_aspect_ratio();
        aspect.validate()?;
        let (width, height) =
            dimensions::sanitize_container(request.container.width, request.container.height)?;

        if request.constraints.is_conflicting() {
            log::warn!(
                "multiple layout caps set ({:?}), using {:?}",
                request.constraints,
                request.constraints.mode()
            );
        }
        let mode = request.constraints.mode();

        let ResolvedDimensions {
            geometry,
            grid,
            effective_count,
        } = dimensions::resolve(&self.packer, width, height, items.len(), aspect, mode)?;

        let plan = ReflowPlan::select(mode, request.direction);
        let flow = page_flow(mode, request.direction);
        let pages = paginate(items, effective_count, request.overflow)
            .into_iter()
            .map(|tiles| Page {
                tiles: reflow(tiles, plan),
                flow,
            })
            .collect::<Vec<_>>();

        log::debug!(
            "laid out {} tiles on {} pages ({effective_count} per page)",
            items.len(),
            pages.len()
        );

        Ok(Layout {
            geometry,
            grid,
            effective_count,
            pages,
            scroll_axis: request.overflow.scroll_axis(),
        })
    }
}

/// Lay out `items` with the default largest-rectangle packer.
pub fn layout(request: &LayoutRequest, items: &[TileDescriptor]) -> Result<Layout> {
    TileLayoutEngine::new().layout(request, items)
}

/// Fixed rows flow down columns and fixed columns flow across rows.
fn page_flow(mode: ConstraintMode, direction: ArrangeDirection) -> ArrangeDirection {
    match mode {
        ConstraintMode::RowCount(_) => ArrangeDirection::Col,
        ConstraintMode::ColCount(_) => ArrangeDirection::Row,
        ConstraintMode::TileCount(_) | ConstraintMode::Fit => direction,
    }
}
