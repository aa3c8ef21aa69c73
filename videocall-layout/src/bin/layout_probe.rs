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

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use videocall_layout::{
    layout, ArrangeDirection, AspectRatio, DisplayShape, LayoutRequest, OverflowPolicy,
    TileDescriptor,
};

/// Layout Probe
///
/// Runs the video list layout for a container and prints the result as JSON.
///
/// Flags override values loaded from `--config`.
#[derive(Parser, Debug)]
#[clap(name = "layout-probe", version)]
struct Args {
    /// JSON file holding a layout request.
    #[clap(long)]
    config: Option<PathBuf>,

    /// JSON file holding an array of tiles (`{"id": ..., "track_id": ...}`).
    #[clap(long, conflicts_with = "count")]
    tiles: Option<PathBuf>,

    /// Number of placeholder tiles to lay out.
    #[clap(short = 'n', long, default_value_t = 0)]
    count: usize,

    #[clap(long)]
    width: Option<f64>,

    #[clap(long)]
    height: Option<f64>,

    #[clap(long)]
    max_tile_count: Option<u32>,

    #[clap(long)]
    max_row_count: Option<u32>,

    #[clap(long)]
    max_col_count: Option<u32>,

    /// Tile aspect ratio in W:H form, e.g. 16:9.
    #[clap(long)]
    aspect_ratio: Option<AspectRatio>,

    /// circle or rectangle
    #[clap(long)]
    shape: Option<DisplayShape>,

    /// row or col
    #[clap(long)]
    direction: Option<ArrangeDirection>,

    /// scroll-x, scroll-y or hidden
    #[clap(long)]
    overflow: Option<OverflowPolicy>,

    /// Print the layout on a single line.
    #[clap(long)]
    compact: bool,
}

impl Args {
    fn request(&self) -> anyhow::Result<LayoutRequest> {
        let mut request = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => LayoutRequest::default(),
        };

        if let Some(width) = self.width {
            request.container.width = width;
        }
        if let Some(height) = self.height {
            request.container.height = height;
        }
        if self.max_tile_count.is_some() {
            request.constraints.max_tile_count = self.max_tile_count;
        }
        if self.max_row_count.is_some() {
            request.constraints.max_row_count = self.max_row_count;
        }
        if self.max_col_count.is_some() {
            request.constraints.max_col_count = self.max_col_count;
        }
        if let Some(aspect_ratio) = self.aspect_ratio {
            request.aspect_ratio = aspect_ratio;
        }
        if let Some(shape) = self.shape {
            request.display_shape = shape;
        }
        if let Some(direction) = self.direction {
            request.direction = direction;
        }
        if let Some(overflow) = self.overflow {
            request.overflow = overflow;
        }
        Ok(request)
    }

    fn tiles(&self) -> anyhow::Result<Vec<TileDescriptor>> {
        match &self.tiles {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading tiles {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing tiles {}", path.display()))
            }
            None => Ok((0..self.count)
                .map(|i| TileDescriptor::placeholder(format!("peer-{i}")))
                .collect()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let request = args.request()?;
    let tiles = args.tiles()?;
    log::info!("laying out {} tiles with {request:?}", tiles.len());

    let result = layout(&request, &tiles).context("layout failed")?;
    let json = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");
    Ok(())
}
