//! Von Neumann (diamond) neighborhoods

use glam::IVec2;

use super::dedup::dedup_if_overlapping;
use super::{
    BoundaryMode, check_center, check_distance, checked_span, covering_reach, remove_origin,
};
use crate::error::Result;
use crate::grid::GridExtent;

pub(super) fn collect(
    extent: &GridExtent,
    center: IVec2,
    dist: i32,
    mode: BoundaryMode,
    include_origin: bool,
    out: &mut Vec<IVec2>,
) -> Result<()> {
    check_distance(dist)?;
    check_center(extent, center, mode)?;
    out.clear();

    match mode {
        BoundaryMode::Toroidal => {
            let walk = covering_reach(extent, dist);
            let (xmin, xmax) = checked_span(center, center.x, walk)?;
            checked_span(center, center.y, walk)?;
            for x0 in xmin..=xmax {
                let x = extent.wrap_x(x0);
                let reach = walk - (x0 - center.x).abs();
                for y0 in (center.y - reach)..=(center.y + reach) {
                    out.push(IVec2::new(x, extent.wrap_y(y0)));
                }
            }
            dedup_if_overlapping(extent, dist, out);
            if !include_origin {
                remove_origin(out, extent.wrap(center));
            }
        }
        BoundaryMode::Bounded => {
            let (cx, cy, d) = (center.x as i64, center.y as i64, dist as i64);
            let xmin = (cx - d).max(0);
            let xmax = (cx + d).min(extent.width() as i64 - 1);
            for x0 in xmin..=xmax {
                let reach = d - (x0 - cx).abs();
                let ymin = (cy - reach).max(0);
                let ymax = (cy + reach).min(extent.height() as i64 - 1);
                for y0 in ymin..=ymax {
                    out.push(IVec2::new(x0 as i32, y0 as i32));
                }
            }
            if !include_origin {
                remove_origin(out, center);
            }
        }
        BoundaryMode::Unbounded => {
            let (xmin, xmax) = checked_span(center, center.x, dist)?;
            checked_span(center, center.y, dist)?;
            for x0 in xmin..=xmax {
                let reach = dist - (x0 - center.x).abs();
                for y0 in (center.y - reach)..=(center.y + reach) {
                    out.push(IVec2::new(x0, y0));
                }
            }
            if !include_origin {
                remove_origin(out, center);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    fn run(w: i32, h: i32, c: (i32, i32), dist: i32, mode: BoundaryMode, origin: bool) -> Vec<IVec2> {
        let extent = GridExtent::new(w, h).unwrap();
        let mut out = Vec::new();
        collect(&extent, IVec2::new(c.0, c.1), dist, mode, origin, &mut out).unwrap();
        out
    }

    #[test]
    fn test_diamond_cardinality() {
        for dist in 0..6 {
            let cells = run(50, 50, (25, 25), dist, BoundaryMode::Bounded, true);
            assert_eq!(cells.len() as i32, 2 * dist * dist + 2 * dist + 1);
        }
    }

    #[test]
    fn test_diamond_shape_is_l1_ball() {
        let cells = run(20, 20, (10, 10), 3, BoundaryMode::Unbounded, true);
        for p in &cells {
            assert!((p.x - 10).abs() + (p.y - 10).abs() <= 3);
        }
        assert!(cells.contains(&IVec2::new(13, 10)));
        assert!(cells.contains(&IVec2::new(10, 7)));
        assert!(!cells.contains(&IVec2::new(12, 12)));
    }

    #[test]
    fn test_bounded_edge_clips() {
        let cells = run(10, 10, (0, 5), 2, BoundaryMode::Bounded, true);
        // Right half of a radius-2 diamond: columns of 5, 3, 1
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|p| p.x >= 0));
    }

    #[test]
    fn test_toroidal_wraps_without_duplicates() {
        let cells = run(5, 5, (0, 0), 4, BoundaryMode::Toroidal, true);
        let unique: AHashSet<_> = cells.iter().copied().collect();
        assert_eq!(unique.len(), cells.len());
        // Radius 4 on a 5x5 torus reaches every cell
        assert_eq!(cells.len(), 25);
    }

    #[test]
    fn test_toroidal_small_radius_wraps() {
        let cells = run(10, 10, (0, 0), 1, BoundaryMode::Toroidal, true);
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(&IVec2::new(9, 0)));
        assert!(cells.contains(&IVec2::new(0, 9)));
    }

    #[test]
    fn test_toroidal_huge_distance_covers_grid_once() {
        let cells = run(6, 4, (2, 3), i32::MAX, BoundaryMode::Toroidal, true);
        assert_eq!(cells.len(), 24);
    }

    #[test]
    fn test_exclude_origin() {
        // The antipodal cell (3, 3) is 4 steps away on a 4x4 torus
        let cells = run(4, 4, (1, 1), 3, BoundaryMode::Toroidal, false);
        assert_eq!(cells.len(), 14);
        assert!(!cells.contains(&IVec2::new(3, 3)));
        assert!(!cells.contains(&IVec2::new(1, 1)));
    }
}
