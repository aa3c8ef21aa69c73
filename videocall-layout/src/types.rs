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

//! Plain data shared by every layout stage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{LayoutError, Result};

/// One tile in the video list: a peer, optionally backed by a live track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileDescriptor {
    /// Opaque identity of the tile (usually the peer id).
    pub id: String,
    /// Track rendered by the tile. `None` renders a placeholder avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
}

impl TileDescriptor {
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            track_id: None,
        }
    }

    pub fn with_track(id: impl Into<String>, track_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            track_id: Some(track_id.into()),
        }
    }

    /// Whether the tile renders live media rather than a placeholder.
    pub fn has_track(&self) -> bool {
        self.track_id.is_some()
    }
}

/// Caller supplied caps on how tiles are arranged.
///
/// At most one cap is expected. When several are set, `max_tile_count` wins over
/// `max_row_count`, which wins over `max_col_count`. A value of `0` counts as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConstraints {
    pub max_tile_count: Option<u32>,
    pub max_row_count: Option<u32>,
    pub max_col_count: Option<u32>,
}

/// The single constraint that is in effect after precedence is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintMode {
    /// Cap the number of tiles per page.
    TileCount(u32),
    /// Fixed number of rows, columns derived from the container.
    RowCount(u32),
    /// Fixed number of columns, rows derived from the container.
    ColCount(u32),
    /// Everything on one page.
    Fit,
}

impl LayoutConstraints {
    pub fn tile_count(max_tile_count: u32) -> Self {
        Self {
            max_tile_count: Some(max_tile_count),
            ..Default::default()
        }
    }

    pub fn rows(max_row_count: u32) -> Self {
        Self {
            max_row_count: Some(max_row_count),
            ..Default::default()
        }
    }

    pub fn cols(max_col_count: u32) -> Self {
        Self {
            max_col_count: Some(max_col_count),
            ..Default::default()
        }
    }

    /// Resolve the active mode using the documented precedence.
    pub fn mode(&self) -> ConstraintMode {
        let set = |v: Option<u32>| v.filter(|&n| n > 0);
        if let Some(n) = set(self.max_tile_count) {
            ConstraintMode::TileCount(n)
        } else if let Some(r) = set(self.max_row_count) {
            ConstraintMode::RowCount(r)
        } else if let Some(c) = set(self.max_col_count) {
            ConstraintMode::ColCount(c)
        } else {
            ConstraintMode::Fit
        }
    }

    /// True when more than one cap is set and precedence had to decide.
    pub fn is_conflicting(&self) -> bool {
        [self.max_tile_count, self.max_row_count, self.max_col_count]
            .iter()
            .filter(|v| matches!(v, Some(n) if *n > 0))
            .count()
            > 1
    }
}

/// Target tile aspect ratio as `width:height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: f64,
    pub height: f64,
}

impl AspectRatio {
    pub const SQUARE: AspectRatio = AspectRatio {
        width: 1.0,
        height: 1.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidAspectRatio {
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = LayoutError;

    /// Parses `"16:9"` style ratios.
    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| LayoutError::Parse(format!("expected W:H, got '{s}'")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| LayoutError::Parse(format!("invalid ratio component '{v}': {e}")))
        };
        let ratio = AspectRatio::new(parse(w)?, parse(h)?);
        ratio.validate()?;
        Ok(ratio)
    }
}

/// Shape tiles are painted in. Circles always use a square aspect ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayShape {
    Circle,
    #[default]
    Rectangle,
}

/// Direction tiles are meant to flow in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrangeDirection {
    #[default]
    Row,
    Col,
}

/// What happens to tiles that do not fit on the first page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    /// Extra pages scroll horizontally.
    #[default]
    ScrollX,
    /// Extra pages scroll vertically.
    ScrollY,
    /// Only the first page is kept.
    Hidden,
}

/// Axis the page carousel scrolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

impl OverflowPolicy {
    pub fn scroll_axis(&self) -> Option<ScrollAxis> {
        match self {
            OverflowPolicy::ScrollX => Some(ScrollAxis::Horizontal),
            OverflowPolicy::ScrollY => Some(ScrollAxis::Vertical),
            OverflowPolicy::Hidden => None,
        }
    }
}

macro_rules! impl_keyword_enum {
    ($ty:ty, $($text:literal => $variant:path),+ $(,)?) => {
        impl FromStr for $ty {
            type Err = LayoutError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($variant),)+
                    other => Err(LayoutError::Parse(format!(
                        concat!("unknown ", stringify!($ty), " '{}'"),
                        other
                    ))),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let text = match self {
                    $($variant => $text,)+
                };
                f.write_str(text)
            }
        }
    };
}

impl_keyword_enum!(DisplayShape, "circle" => DisplayShape::Circle, "rectangle" => DisplayShape::Rectangle);
impl_keyword_enum!(ArrangeDirection, "row" => ArrangeDirection::Row, "col" => ArrangeDirection::Col);
impl_keyword_enum!(
    OverflowPolicy,
    "scroll-x" => OverflowPolicy::ScrollX,
    "scroll-y" => OverflowPolicy::ScrollY,
    "hidden" => OverflowPolicy::Hidden,
);

/// Uniform size applied to every tile of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TileGeometry {
    pub width: f64,
    pub height: f64,
}

/// Rows and columns of one page's grid. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

/// Tiles shown together, in final render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub tiles: Vec<TileDescriptor>,
    /// Direction the renderer should flow this page in.
    pub flow: ArrangeDirection,
}

impl Page {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
