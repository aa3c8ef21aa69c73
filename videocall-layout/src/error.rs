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

use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur while laying out tiles
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid container size: {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },

    #[error("Invalid aspect ratio: {width}:{height}")]
    InvalidAspectRatio { width: f64, height: f64 },

    #[error("Invalid tile count: {0}")]
    InvalidTileCount(usize),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
