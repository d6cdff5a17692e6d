//! Radial (circular) neighborhoods
//!
//! Takes a Moore block reaching half a cell past the radius, then keeps the
//! cells the measurement rule accepts. Cells are unit squares centered on
//! their integer coordinates; the circle is centered on the query cell.

use glam::{DVec2, IVec2};

use super::{BoundaryMode, MeasurementRule, moore};
use crate::error::{NeighborhoodError, Result};
use crate::grid::GridExtent;
use crate::grid::wrap::within;

#[allow(clippy::too_many_arguments)]
pub(super) fn collect(
    extent: &GridExtent,
    center: IVec2,
    dist: f64,
    mode: BoundaryMode,
    include_origin: bool,
    rule: MeasurementRule,
    closed: bool,
    out: &mut Vec<IVec2>,
) -> Result<()> {
    if !(dist.is_finite() && dist >= 0.0) {
        log::debug!("Rejected radial query: distance {}", dist);
        return Err(NeighborhoodError::InvalidDistance(dist));
    }

    let reach = (dist + 0.5).ceil() as i32;
    moore::collect(extent, center, reach, mode, include_origin, out)?;

    let toroidal = mode == BoundaryMode::Toroidal;
    let origin = if toroidal { extent.wrap(center) } else { center };
    // No cell on a torus is farther than half the extent along an axis
    let limit = if toroidal {
        DVec2::new(extent.width() as f64, extent.height() as f64) / 2.0
    } else {
        DVec2::splat(f64::INFINITY)
    };
    let radius_squared = dist * dist;

    out.retain(|&cell| {
        // The cell holding the circle's center always belongs to it
        if cell == origin {
            return true;
        }
        let offset = if toroidal {
            extent.toroidal_delta(cell.as_dvec2(), center.as_dvec2())
        } else {
            (cell - center).as_dvec2()
        };
        within(
            probe(rule, offset, limit).length_squared(),
            radius_squared,
            closed,
        )
    });

    Ok(())
}

/// The point of the cell at `offset` (relative to the circle center) that
/// `rule` measures, folded into the positive quadrant.
fn probe(rule: MeasurementRule, offset: DVec2, limit: DVec2) -> DVec2 {
    match rule {
        MeasurementRule::Center => offset.abs(),
        MeasurementRule::Any => DVec2::new(near_side(offset.x), near_side(offset.y)),
        MeasurementRule::All => DVec2::new(
            far_side(offset.x, limit.x),
            far_side(offset.y, limit.y),
        ),
    }
}

/// Near face of the cell along one axis. A cell on the axis through the
/// center straddles it, so only the other axis contributes and the near
/// corner degenerates to the facing edge.
fn near_side(d: f64) -> f64 {
    (d.abs() - 0.5).max(0.0)
}

/// Far face of the cell along one axis; either face works on the axis itself
fn far_side(d: f64, limit: f64) -> f64 {
    (d.abs() + 0.5).min(limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;

    fn run(
        size: i32,
        c: (i32, i32),
        dist: f64,
        mode: BoundaryMode,
        rule: MeasurementRule,
        closed: bool,
    ) -> Result<Vec<IVec2>> {
        let extent = GridExtent::new(size, size)?;
        let mut out = Vec::new();
        collect(&extent, IVec2::new(c.0, c.1), dist, mode, true, rule, closed, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_center_rule_closed_boundary() {
        let cells = run(10, (5, 5), 2.0, BoundaryMode::Bounded, MeasurementRule::Center, true)
            .unwrap();
        assert!(cells.contains(&IVec2::new(5, 7)));
        assert!(cells.contains(&IVec2::new(5, 3)));
        assert!(!cells.contains(&IVec2::new(5, 8)));
        assert!(!cells.contains(&IVec2::new(7, 7)));
        // r = 2 disc of cell centers: 13 cells
        assert_eq!(cells.len(), 13);
    }

    #[test]
    fn test_center_rule_open_boundary() {
        let cells = run(10, (5, 5), 2.0, BoundaryMode::Bounded, MeasurementRule::Center, false)
            .unwrap();
        assert!(!cells.contains(&IVec2::new(5, 7)));
        assert!(cells.contains(&IVec2::new(6, 6)));
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn test_any_rule_uses_near_edge_on_axis() {
        let cells = run(10, (5, 5), 1.0, BoundaryMode::Bounded, MeasurementRule::Any, true)
            .unwrap();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&IVec2::new(5, 6)));
        assert!(cells.contains(&IVec2::new(6, 6)));
        assert!(!cells.contains(&IVec2::new(7, 5)));

        // Axis cell two over: its near edge sits at 1.5
        let cells = run(10, (5, 5), 1.5, BoundaryMode::Bounded, MeasurementRule::Any, false)
            .unwrap();
        assert!(!cells.contains(&IVec2::new(7, 5)));
        let cells = run(10, (5, 5), 1.5, BoundaryMode::Bounded, MeasurementRule::Any, true)
            .unwrap();
        assert!(cells.contains(&IVec2::new(7, 5)));
    }

    #[test]
    fn test_all_rule_uses_far_corner() {
        let cells = run(10, (5, 5), 1.6, BoundaryMode::Bounded, MeasurementRule::All, true)
            .unwrap();
        // Plus sign: far corners of the axis cells are at sqrt(2.5)
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(&IVec2::new(5, 4)));
        assert!(!cells.contains(&IVec2::new(6, 6)));
    }

    #[test]
    fn test_origin_survives_tiny_radius() {
        for rule in MeasurementRule::ALL {
            let cells = run(10, (5, 5), 0.0, BoundaryMode::Bounded, rule, false).unwrap();
            assert_eq!(cells, vec![IVec2::new(5, 5)]);
        }
    }

    #[test]
    fn test_exclude_origin() {
        let extent = GridExtent::new(10, 10).unwrap();
        let mut out = Vec::new();
        collect(
            &extent,
            IVec2::new(5, 5),
            0.0,
            BoundaryMode::Bounded,
            false,
            MeasurementRule::Any,
            true,
            &mut out,
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_toroidal_measures_across_the_seam() {
        let cells = run(10, (0, 0), 1.0, BoundaryMode::Toroidal, MeasurementRule::Center, true)
            .unwrap();
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(&IVec2::new(9, 0)));
        assert!(cells.contains(&IVec2::new(0, 9)));

        let cells = run(10, (0, 0), 1.0, BoundaryMode::Toroidal, MeasurementRule::Any, true)
            .unwrap();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&IVec2::new(9, 9)));
    }

    #[test]
    fn test_bounded_clips_at_edges() {
        let cells = run(10, (0, 0), 1.0, BoundaryMode::Bounded, MeasurementRule::Center, true)
            .unwrap();
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn test_rejects_bad_distance() {
        for dist in [-0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                run(10, (5, 5), dist, BoundaryMode::Bounded, MeasurementRule::Center, true),
                Err(NeighborhoodError::InvalidDistance(_))
            ));
        }
    }

    #[test]
    fn test_rules_are_nested() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);

        for _ in 0..200 {
            let dist: f64 = rng.gen_range(0.0..6.0);
            let c = (rng.gen_range(0..12), rng.gen_range(0..12));
            for mode in [BoundaryMode::Bounded, BoundaryMode::Toroidal] {
                let all = run(12, c, dist, mode, MeasurementRule::All, true).unwrap();
                let center = run(12, c, dist, mode, MeasurementRule::Center, true).unwrap();
                let any = run(12, c, dist, mode, MeasurementRule::Any, true).unwrap();
                assert!(all.iter().all(|p| center.contains(p)));
                assert!(center.iter().all(|p| any.contains(p)));
            }
        }
    }

    #[test]
    fn test_probe_folds_quadrants() {
        let limit = DVec2::splat(f64::INFINITY);
        for offset in [
            DVec2::new(2.0, 3.0),
            DVec2::new(-2.0, 3.0),
            DVec2::new(2.0, -3.0),
            DVec2::new(-2.0, -3.0),
        ] {
            assert_eq!(probe(MeasurementRule::Any, offset, limit), DVec2::new(1.5, 2.5));
            assert_eq!(probe(MeasurementRule::All, offset, limit), DVec2::new(2.5, 3.5));
            assert_eq!(probe(MeasurementRule::Center, offset, limit), DVec2::new(2.0, 3.0));
        }
        assert_eq!(
            probe(MeasurementRule::Any, DVec2::new(0.0, -4.0), limit),
            DVec2::new(0.0, 3.5)
        );
        assert_eq!(
            probe(MeasurementRule::All, DVec2::new(4.0, 1.0), DVec2::splat(4.0)),
            DVec2::new(4.0, 1.5)
        );
    }
}
