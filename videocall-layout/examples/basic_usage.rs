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

use std::collections::HashMap;

use videocall_layout::{
    tiles_from_peers, ArrangeDirection, AspectRatio, LayoutConstraints, LayoutRequest, PeerMedia,
    TileLayoutEngine, TrackInfo, TrackKind, TrackSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Video List Layout Example");
    println!("=========================");

    let mut tracks = HashMap::new();
    let mut peers = Vec::new();
    for i in 0..10 {
        let cam = format!("cam-{i}");
        // Every third peer has its camera off.
        if i % 3 != 0 {
            tracks.insert(
                cam.clone(),
                TrackInfo {
                    kind: TrackKind::Video,
                    source: TrackSource::Regular,
                },
            );
        }
        peers.push(PeerMedia {
            peer_id: format!("peer-{i}"),
            video_track: (i % 3 != 0).then_some(cam),
            ..Default::default()
        });
    }

    let tiles = tiles_from_peers(&peers, &tracks, |_| true, true);
    println!("{} peers -> {} tiles", peers.len(), tiles.len());

    let engine = TileLayoutEngine::new();
    for (label, constraints, direction) in [
        ("fit", LayoutConstraints::default(), ArrangeDirection::Row),
        ("4 per page", LayoutConstraints::tile_count(4), ArrangeDirection::Row),
        ("2 rows", LayoutConstraints::rows(2), ArrangeDirection::Row),
        ("3 columns", LayoutConstraints::cols(3), ArrangeDirection::Col),
    ] {
        let request = LayoutRequest::new(1280.0, 720.0)
            .with_constraints(constraints)
            .with_direction(direction)
            .with_aspect_ratio(AspectRatio::new(16.0, 9.0));
        let result = engine.layout(&request, &tiles)?;

        println!(
            "\n{label}: {:.1}x{:.1} tiles, {}x{} grid, {} pages",
            result.geometry.width,
            result.geometry.height,
            result.grid.rows,
            result.grid.cols,
            result.pages.len()
        );
        for (i, page) in result.pages.iter().enumerate() {
            let names: Vec<_> = page
                .tiles
                .iter()
                .map(|t| {
                    if t.has_track() {
                        t.id.clone()
                    } else {
                        format!("({})", t.id)
                    }
                })
                .collect();
            println!("  page {i} [{:?}]: {}", page.flow, names.join(" "));
        }
    }

    Ok(())
}
