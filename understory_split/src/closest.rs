// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-value lookup used for double-click snapping.

/// Return the candidate closest to `target`.
///
/// Non-finite candidates (NaN, ±∞) are skipped. Returns `None` when no finite
/// candidate remains.
///
/// Ties on absolute distance:
/// - finite `target`: the smaller candidate wins;
/// - `target == +∞`: the larger candidate wins;
/// - `target == -∞`: the smaller candidate wins.
///
/// ```
/// use understory_split::closest::closest_number;
/// assert_eq!(closest_number(&[8.0, 10.0], 9.0), Some(8.0));
/// assert_eq!(closest_number(&[-100.0, 0.0, 100.0], f64::INFINITY), Some(100.0));
/// assert_eq!(closest_number(&[], 3.0), None);
/// ```
pub fn closest_number(candidates: &[f64], target: f64) -> Option<f64> {
    let mut closest: Option<f64> = None;
    let mut smallest = f64::INFINITY;

    for &n in candidates {
        if !n.is_finite() {
            continue;
        }
        let diff = (n - target).abs();

        let Some(current) = closest else {
            // First finite candidate. With an infinite target every distance is
            // infinite, so this is the only way to seed the search.
            closest = Some(n);
            smallest = diff;
            continue;
        };

        if diff < smallest {
            smallest = diff;
            closest = Some(n);
        } else if diff == smallest {
            let prefer_larger = target == f64::INFINITY;
            if (prefer_larger && n > current) || (!prefer_larger && n < current) {
                closest = Some(n);
            }
        }
    }

    closest
}
