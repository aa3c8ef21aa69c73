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

use approx::assert_relative_eq;
use videocall_layout::{
    layout, ArrangeDirection, AspectRatio, DisplayShape, GridShape, LayoutConstraints,
    LayoutError, LayoutRequest, OverflowPolicy, PackedRect, RectPacker, ScrollAxis,
    TileDescriptor, TileLayoutEngine,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn peers(n: usize) -> Vec<TileDescriptor> {
    (0..n)
        .map(|i| TileDescriptor::placeholder(format!("peer-{i}")))
        .collect()
}

fn ids(tiles: &[TileDescriptor]) -> Vec<usize> {
    tiles
        .iter()
        .map(|t| t.id.trim_start_matches("peer-").parse().unwrap())
        .collect()
}

fn all_constraints() -> Vec<LayoutConstraints> {
    vec![
        LayoutConstraints::default(),
        LayoutConstraints::tile_count(1),
        LayoutConstraints::tile_count(3),
        LayoutConstraints::tile_count(9),
        LayoutConstraints::rows(1),
        LayoutConstraints::rows(2),
        LayoutConstraints::rows(5),
        LayoutConstraints::cols(1),
        LayoutConstraints::cols(3),
        LayoutConstraints::cols(4),
    ]
}

#[test]
fn test_fixed_columns_with_row_direction() {
    init_logging();
    let request = LayoutRequest::new(1200.0, 600.0)
        .with_constraints(LayoutConstraints::cols(4))
        .with_direction(ArrangeDirection::Row);
    let result = layout(&request, &peers(8)).unwrap();

    assert_eq!(result.grid, GridShape { rows: 2, cols: 4 });
    assert_eq!(result.effective_count, 8);
    assert_eq!(result.pages.len(), 1);
    assert_eq!(ids(&result.pages[0].tiles), (0..8).collect::<Vec<_>>());
    assert_eq!(result.pages[0].flow, ArrangeDirection::Row);
    assert_relative_eq!(result.geometry.width, 300.0);
    assert_relative_eq!(result.geometry.height, 300.0);
}

#[test]
fn test_fixed_columns_with_col_direction_reflows() {
    let request = LayoutRequest::new(1200.0, 600.0)
        .with_constraints(LayoutConstraints::cols(4))
        .with_direction(ArrangeDirection::Col);
    let result = layout(&request, &peers(8)).unwrap();

    assert_eq!(result.pages.len(), 1);
    assert_eq!(ids(&result.pages[0].tiles), vec![0, 2, 4, 6, 1, 3, 5, 7]);
}

#[test]
fn test_fixed_rows_single_short_page() {
    let request = LayoutRequest::new(800.0, 400.0)
        .with_constraints(LayoutConstraints::rows(2))
        .with_aspect_ratio(AspectRatio::SQUARE)
        .with_direction(ArrangeDirection::Col);
    let result = layout(&request, &peers(5)).unwrap();

    assert_eq!(result.grid, GridShape { rows: 2, cols: 4 });
    assert_eq!(result.effective_count, 8);
    assert_eq!(result.pages.len(), 1);
    assert_eq!(ids(&result.pages[0].tiles), vec![0, 1, 2, 3, 4]);
    assert_eq!(result.pages[0].flow, ArrangeDirection::Col);
}

#[test]
fn test_fixed_rows_with_row_direction_reflows() {
    let request = LayoutRequest::new(800.0, 400.0).with_constraints(LayoutConstraints::rows(2));
    let result = layout(&request, &peers(5)).unwrap();
    assert_eq!(ids(&result.pages[0].tiles), vec![0, 3, 1, 4, 2]);
}

#[test]
fn test_tile_cap_pages_in_order() {
    let request = LayoutRequest::new(900.0, 300.0).with_constraints(LayoutConstraints::tile_count(3));
    let result = layout(&request, &peers(7)).unwrap();

    let sizes: Vec<_> = result.pages.iter().map(|p| p.len()).collect();
    assert_eq!(sizes, vec![3, 3, 1]);
    assert_eq!(ids(&result.pages[2].tiles), vec![6]);
    assert_eq!(result.scroll_axis, Some(ScrollAxis::Horizontal));
}

#[test]
fn test_hidden_overflow_keeps_one_page() {
    for constraints in all_constraints() {
        for n in 1..=20 {
            let request = LayoutRequest::new(1000.0, 500.0)
                .with_constraints(constraints)
                .with_overflow(OverflowPolicy::Hidden);
            let result = layout(&request, &peers(n)).unwrap();
            assert_eq!(result.pages.len(), 1, "{constraints:?} n={n}");
            assert_eq!(
                result.pages[0].len(),
                n.min(result.effective_count),
                "{constraints:?} n={n}"
            );
            assert_eq!(result.scroll_axis, None);
        }
    }
}

#[test]
fn test_pagination_without_reflow_reproduces_input() {
    // Column caps reflow under the col direction and row caps under row, so only
    // row caps and uncapped modes can be checked with col here.
    for constraints in all_constraints() {
        if constraints.max_col_count.is_some() {
            continue;
        }
        for n in 0..=25 {
            let request = LayoutRequest::new(1280.0, 720.0)
                .with_constraints(constraints)
                .with_direction(ArrangeDirection::Col)
                .with_overflow(OverflowPolicy::ScrollY);
            let result = layout(&request, &peers(n)).unwrap();
            let flat: Vec<_> = result.tiles().cloned().collect();
            assert_eq!(flat, peers(n), "{constraints:?} n={n}");
        }
    }
}

#[test]
fn test_every_page_is_a_permutation_of_its_chunk() {
    for direction in [ArrangeDirection::Row, ArrangeDirection::Col] {
        for constraints in all_constraints() {
            for n in 0..=25 {
                let request = LayoutRequest::new(1280.0, 720.0)
                    .with_constraints(constraints)
                    .with_direction(direction);
                let result = layout(&request, &peers(n)).unwrap();
                let per_page = result.effective_count;
                for (p, page) in result.pages.iter().enumerate() {
                    assert!(page.len() <= per_page);
                    let mut got = ids(&page.tiles);
                    got.sort_unstable();
                    let start = p * per_page;
                    let expected: Vec<_> = (start..(start + per_page).min(n)).collect();
                    assert_eq!(got, expected, "{direction:?} {constraints:?} n={n} page {p}");
                }
            }
        }
    }
}

#[test]
fn test_geometry_is_always_finite() {
    let sizes = [0.0, 1.0, 37.5, 320.0, 1920.0, 5000.0];
    for &width in &sizes {
        for &height in &sizes {
            for constraints in all_constraints() {
                for n in [0, 1, 2, 7, 16] {
                    let request = LayoutRequest::new(width, height)
                        .with_constraints(constraints)
                        .with_aspect_ratio(AspectRatio::new(16.0, 9.0));
                    let result = layout(&request, &peers(n))
                        .unwrap_or_else(|e| panic!("{width}x{height} {constraints:?}: {e}"));
                    assert!(result.geometry.width.is_finite());
                    assert!(result.geometry.height.is_finite());
                    assert!(result.geometry.width >= 0.0 && result.geometry.height >= 0.0);
                    assert!(result.effective_count >= 1);
                    assert!(result.grid.rows >= 1 && result.grid.cols >= 1);
                    if n == 0 {
                        assert!(result.pages.is_empty());
                    }
                }
            }
        }
    }
}

#[test]
fn test_negative_container_treated_as_empty() {
    let request = LayoutRequest::new(-10.0, 400.0).with_constraints(LayoutConstraints::rows(2));
    let result = layout(&request, &peers(3)).unwrap();
    assert_eq!(result.geometry.width, 0.0);
    assert_eq!(result.geometry.height, 0.0);
    assert_eq!(result.effective_count, 2);
}

#[test]
fn test_non_finite_input_is_rejected() {
    let request = LayoutRequest::new(f64::NAN, 400.0);
    assert!(matches!(
        layout(&request, &peers(3)),
        Err(LayoutError::InvalidContainer { .. })
    ));

    let request = LayoutRequest::new(400.0, 400.0).with_aspect_ratio(AspectRatio::new(0.0, 1.0));
    assert!(matches!(
        layout(&request, &peers(3)),
        Err(LayoutError::InvalidAspectRatio { .. })
    ));
}

#[test]
fn test_layout_is_idempotent() {
    let request = LayoutRequest::new(1366.0, 768.0)
        .with_constraints(LayoutConstraints::cols(3))
        .with_direction(ArrangeDirection::Col)
        .with_aspect_ratio(AspectRatio::new(4.0, 3.0));
    let items = peers(17);
    assert_eq!(layout(&request, &items).unwrap(), layout(&request, &items).unwrap());
}

#[test]
fn test_circle_forces_square_tiles() {
    let base = LayoutRequest::new(1280.0, 720.0).with_constraints(LayoutConstraints::tile_count(4));
    let circle_wide = base
        .clone()
        .with_aspect_ratio(AspectRatio::new(16.0, 9.0))
        .with_display_shape(DisplayShape::Circle);
    let circle_tall = base
        .clone()
        .with_aspect_ratio(AspectRatio::new(3.0, 4.0))
        .with_display_shape(DisplayShape::Circle);
    let square = base.with_aspect_ratio(AspectRatio::SQUARE);

    let items = peers(6);
    let a = layout(&circle_wide, &items).unwrap();
    let b = layout(&circle_tall, &items).unwrap();
    let c = layout(&square, &items).unwrap();
    assert_eq!(a.geometry, c.geometry);
    assert_eq!(b.geometry, c.geometry);
    assert_relative_eq!(a.geometry.width, a.geometry.height);
}

#[test]
fn test_conflicting_caps_follow_precedence() {
    let request = LayoutRequest::new(900.0, 300.0).with_constraints(LayoutConstraints {
        max_tile_count: Some(3),
        max_row_count: Some(1),
        max_col_count: Some(5),
    });
    let result = layout(&request, &peers(7)).unwrap();
    assert_eq!(result.effective_count, 3);

    let request = LayoutRequest::new(800.0, 400.0).with_constraints(LayoutConstraints {
        max_tile_count: None,
        max_row_count: Some(2),
        max_col_count: Some(1),
    });
    let result = layout(&request, &peers(7)).unwrap();
    assert_eq!(result.grid, GridShape { rows: 2, cols: 4 });
}

struct BrokenPacker;

impl RectPacker for BrokenPacker {
    fn pack(&self, _: f64, _: f64, _: usize, _: f64, _: f64) -> videocall_layout::Result<PackedRect> {
        Ok(PackedRect {
            width: f64::NAN,
            height: 10.0,
            rows: 1,
            cols: 1,
        })
    }
}

#[test]
fn test_bad_packer_output_is_reported() {
    let engine = TileLayoutEngine::with_packer(BrokenPacker);
    let request = LayoutRequest::new(640.0, 480.0);
    assert!(matches!(
        engine.layout(&request, &peers(2)),
        Err(LayoutError::InvalidGeometry(_))
    ));
}

#[test]
fn test_tiles_keep_track_references() {
    let items = vec![
        TileDescriptor::with_track("alice", "cam-1"),
        TileDescriptor::placeholder("bob"),
    ];
    let result = layout(&LayoutRequest::new(640.0, 480.0), &items).unwrap();
    assert_eq!(result.pages[0].tiles, items);
    assert!(result.pages[0].tiles[0].has_track());
    assert!(!result.pages[0].tiles[1].has_track());
}

#[test]
fn test_extreme_container_sizes_still_lay_out() {
    for side in [1e-200, 1e-170, 1e200] {
        for constraints in all_constraints() {
            let request = LayoutRequest::new(side, side).with_constraints(constraints);
            let result = layout(&request, &peers(4))
                .unwrap_or_else(|e| panic!("{side} {constraints:?}: {e}"));
            assert!(result.geometry.width.is_finite() && result.geometry.width > 0.0);
            assert!(result.geometry.height.is_finite() && result.geometry.height > 0.0);
        }
    }

    let request = LayoutRequest::new(1e200, 1e200);
    let result = layout(&request, &peers(4)).unwrap();
    assert_eq!(result.grid, GridShape { rows: 2, cols: 2 });
}

#[test]
fn test_huge_row_cap_with_short_page() {
    let request = LayoutRequest::new(800.0, 400.0)
        .with_constraints(LayoutConstraints::rows(u32::MAX))
        .with_direction(ArrangeDirection::Row);
    let result = layout(&request, &peers(5)).unwrap();
    assert_eq!(result.pages.len(), 1);
    assert_eq!(ids(&result.pages[0].tiles), vec![0, 1, 2, 3, 4]);
}
