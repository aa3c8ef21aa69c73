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

//! Tile layout for videocall.rs peer video lists.
//!
//! Given the size of the container, the tiles to show and an optional cap on tiles,
//! rows or columns, the engine works out a uniform tile size, splits the tiles into
//! carousel pages and re-orders each page so fixed row or column grids read in the
//! requested direction. Rendering is left to the UI layer.
//!
//! ```
//! use videocall_layout::{layout, LayoutConstraints, LayoutRequest, TileDescriptor};
//!
//! let tiles: Vec<_> = (0..7)
//!     .map(|i| TileDescriptor::placeholder(format!("peer-{i}")))
//!     .collect();
//! let request = LayoutRequest::new(1280.0, 720.0)
//!     .with_constraints(LayoutConstraints::tile_count(3));
//!
//! let result = layout(&request, &tiles).unwrap();
//! let sizes: Vec<_> = result.pages.iter().map(|p| p.len()).collect();
//! assert_eq!(sizes, vec![3, 3, 1]);
//! ```

pub mod dimensions;
pub mod engine;
pub mod error;
pub mod packer;
pub mod pagination;
pub mod reflow;
pub mod tiles;
pub mod types;

pub use engine::{layout, ContainerSize, Layout, LayoutRequest, TileLayoutEngine};
pub use error::{LayoutError, Result};
pub use packer::{LargestRect, PackedRect, RectPacker};
pub use reflow::ReflowPlan;
pub use tiles::{tiles_from_peers, PeerMedia, TrackInfo, TrackKind, TrackSource};
pub use types::{
    ArrangeDirection, AspectRatio, ConstraintMode, DisplayShape, GridShape, LayoutConstraints,
    OverflowPolicy, Page, ScrollAxis, TileDescriptor, TileGeometry,
};
