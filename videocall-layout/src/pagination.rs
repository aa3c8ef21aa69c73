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

use crate::types::OverflowPolicy;

/// Split `items` into consecutive pages of `per_page` items.
///
/// Item `i` lands on page `i / per_page`. With [`OverflowPolicy::Hidden`] everything
/// past the first page is dropped. A zero `per_page` is treated as 1.
pub fn paginate<T: Clone>(items: &[T], per_page: usize, overflow: OverflowPolicy) -> Vec<Vec<T>> {
    let per_page = per_page.max(1);
    let pages = items.chunks(per_page).map(<[T]>::to_vec);
    match overflow {
        OverflowPolicy::Hidden => pages.take(1).collect(),
        OverflowPolicy::ScrollX | OverflowPolicy::ScrollY => pages.collect(),
    }
}
