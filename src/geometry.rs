//! Per-phase guide geometry. Pure and deterministic given the base dimension
//! `d` and corner radius `r`; all coordinates live in the base container's
//! local space `[0, d] × [0, d]`.

use std::f64::consts::FRAC_PI_4;

use crate::core::{Circle, LineSegment};

/// Distance from a container edge to the point where a corner arc of radius
/// `r` meets the 45° diagonal: `r · (1 − sin(π/4))`.
pub fn inset_delta(corner_radius: f64) -> f64 {
    corner_radius * (1.0 - FRAC_PI_4.sin())
}

/// Thirds grid: horizontal pair at y = d/3 and y = 2d/3, vertical pair at
/// x = d/3 and x = 2d/3. Every line appears twice, once per direction, so
/// the two stroke reveals converge at the middle.
pub fn thirds_grid(d: f64) -> Vec<LineSegment> {
    let d3 = d / 3.0;
    let mut lines = Vec::with_capacity(8);
    for y in [d3, d3 * 2.0] {
        let seg = LineSegment::new((0.0, y), (d, y));
        lines.push(seg);
        lines.push(seg.reversed());
    }
    for x in [d3, d3 * 2.0] {
        let seg = LineSegment::new((x, 0.0), (x, d));
        lines.push(seg);
        lines.push(seg.reversed());
    }
    lines
}

/// Four diagonals from the center to each corner.
pub fn center_diagonals(d: f64) -> Vec<LineSegment> {
    let d2 = d / 2.0;
    let center = (d2, d2);
    vec![
        LineSegment::new(center, (0.0, 0.0)),
        LineSegment::new(center, (d, 0.0)),
        LineSegment::new(center, (0.0, d)),
        LineSegment::new(center, (d, d)),
    ]
}

/// Square inset by [`inset_delta`] from each edge, duplicated per direction.
pub fn inset_square(d: f64, corner_radius: f64) -> Vec<LineSegment> {
    let delta = inset_delta(corner_radius);
    let far = d - delta;
    let mut lines = Vec::with_capacity(8);
    for seg in [
        LineSegment::new((0.0, delta), (d, delta)),
        LineSegment::new((delta, 0.0), (delta, d)),
        LineSegment::new((far, 0.0), (far, d)),
        LineSegment::new((0.0, far), (d, far)),
    ] {
        lines.push(seg);
        lines.push(seg.reversed());
    }
    lines
}

/// Cross from the center to each edge midpoint.
pub fn center_cross(d: f64) -> Vec<LineSegment> {
    let d2 = d / 2.0;
    let center = (d2, d2);
    vec![
        LineSegment::new(center, (d2, 0.0)),
        LineSegment::new(center, (0.0, d2)),
        LineSegment::new(center, (d, d2)),
        LineSegment::new(center, (d2, d)),
    ]
}

/// Three concentric rings centered in the container, largest first:
/// the corner-arc tangent circle, the thirds circle scaled onto the
/// diagonal, and the thirds circle itself.
pub fn concentric_rings(d: f64, corner_radius: f64) -> Vec<Circle> {
    let d2 = d / 2.0;
    let d6 = d / 6.0;
    let center = (d2, d2);
    vec![
        Circle::new(center, d2 - inset_delta(corner_radius)),
        Circle::new(center, d6 / FRAC_PI_4.sin()),
        Circle::new(center, d6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;

    const D: f64 = 240.0;
    const R: f64 = 50.0;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn contains(lines: &[LineSegment], from: (f64, f64), to: (f64, f64)) -> bool {
        lines
            .iter()
            .any(|seg| seg.from == Point::from(from) && seg.to == Point::from(to))
    }

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(thirds_grid(D), thirds_grid(D));
        assert_eq!(center_diagonals(D), center_diagonals(D));
        assert_eq!(inset_square(D, R), inset_square(D, R));
        assert_eq!(center_cross(D), center_cross(D));
        assert_eq!(concentric_rings(D, R), concentric_rings(D, R));
    }

    #[test]
    fn thirds_grid_contains_both_directions_of_each_line() {
        let lines = thirds_grid(D);
        assert_eq!(lines.len(), 8);
        for v in [80.0, 160.0] {
            assert!(contains(&lines, (0.0, v), (240.0, v)));
            assert!(contains(&lines, (240.0, v), (0.0, v)));
            assert!(contains(&lines, (v, 0.0), (v, 240.0)));
            assert!(contains(&lines, (v, 240.0), (v, 0.0)));
        }
    }

    #[test]
    fn diagonals_run_from_center_to_corners() {
        let lines = center_diagonals(D);
        assert_eq!(lines.len(), 4);
        for seg in &lines {
            assert_eq!(seg.from, Point::new(120.0, 120.0));
            assert!(seg.to.x == 0.0 || seg.to.x == D);
            assert!(seg.to.y == 0.0 || seg.to.y == D);
        }
    }

    #[test]
    fn inset_delta_matches_corner_arc_tangent() {
        assert!(approx(inset_delta(R), 14.6446609407, 1e-9));
    }

    #[test]
    fn inset_square_endpoints_lie_on_inset_lines() {
        let lines = inset_square(D, R);
        assert_eq!(lines.len(), 8);
        let delta = inset_delta(R);
        let far = D - delta;
        for seg in &lines {
            let horizontal = seg.from.y == seg.to.y;
            let vertical = seg.from.x == seg.to.x;
            assert!(horizontal ^ vertical);
            let fixed = if horizontal { seg.from.y } else { seg.from.x };
            assert!(fixed == delta || fixed == far);
            let (a, b) = if horizontal {
                (seg.from.x, seg.to.x)
            } else {
                (seg.from.y, seg.to.y)
            };
            assert_eq!(a.min(b), 0.0);
            assert_eq!(a.max(b), D);
        }
    }

    #[test]
    fn cross_reaches_edge_midpoints() {
        let lines = center_cross(D);
        assert_eq!(lines.len(), 4);
        let targets = [(120.0, 0.0), (0.0, 120.0), (240.0, 120.0), (120.0, 240.0)];
        for (seg, target) in lines.iter().zip(targets) {
            assert_eq!(seg.from, Point::new(120.0, 120.0));
            assert_eq!(seg.to, Point::from(target));
        }
    }

    #[test]
    fn ring_radii_follow_corner_and_thirds_construction() {
        let rings = concentric_rings(D, R);
        assert_eq!(rings.len(), 3);
        assert!(approx(rings[0].radius, 105.3553390593, 1e-2));
        assert!(approx(rings[1].radius, 56.5685424949, 1e-2));
        assert!(approx(rings[2].radius, 40.0, 1e-2));
        for ring in &rings {
            assert_eq!(ring.center, Point::new(120.0, 120.0));
        }
    }
}
