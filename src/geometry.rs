//! Stateless layout math for the decorative components.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Screen-space box of an element, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }
}

/// Rotation in degrees around the X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Position of node `index` of `total` on a ring of `radius`, relative to the
/// ring's center. Node 0 sits at the top and nodes go clockwise.
pub fn orbit_position(index: usize, total: usize, radius: f64) -> Point {
    if total == 0 {
        return Point { x: 0.0, y: -radius };
    }
    let angle = ((index as f64 / total as f64) * 360.0 - 90.0) * (PI / 180.0);
    Point {
        x: angle.cos() * radius,
        y: angle.sin() * radius,
    }
}

/// Converts a ring-relative point into `left`/`top` percentages of a square
/// viewbox whose center is the ring's center.
pub fn to_viewbox_percent(point: Point, viewbox: f64) -> Point {
    let half = viewbox / 2.0;
    Point {
        x: (half + point.x) / viewbox * 100.0,
        y: (half + point.y) / viewbox * 100.0,
    }
}

/// Card tilt toward the pointer, `max_deg` at the card's edges.
pub fn tilt_for_pointer(pointer: Point, rect: Rect, max_deg: f64) -> Tilt {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Tilt::default();
    }
    let c = rect.center();
    let dx = (pointer.x - c.x) / (rect.width / 2.0);
    let dy = (pointer.y - c.y) / (rect.height / 2.0);
    Tilt {
        rotate_x: (dy * -max_deg).clamp(-max_deg, max_deg),
        rotate_y: (dx * max_deg).clamp(-max_deg, max_deg),
    }
}

/// Offset that pulls a button toward the pointer.
pub fn magnetic_offset(pointer: Point, rect: Rect, strength: f64) -> Point {
    let c = rect.center();
    Point {
        x: (pointer.x - c.x) * strength,
        y: (pointer.y - c.y) * strength,
    }
}

/// Linear map of `value` from `input` onto `output`, clamped at both ends.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (i0, i1) = input;
    let (o0, o1) = output;
    if (i1 - i0).abs() < f64::EPSILON {
        return o0;
    }
    let t = ((value - i0) / (i1 - i0)).clamp(0.0, 1.0);
    o0 + (o1 - o0) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_orbit_starts_at_top_and_goes_clockwise() {
        let top = orbit_position(0, 4, 200.0);
        assert!(close(top.x, 0.0) && close(top.y, -200.0));
        let right = orbit_position(1, 4, 200.0);
        assert!(close(right.x, 200.0) && close(right.y, 0.0));
        let bottom = orbit_position(2, 4, 200.0);
        assert!(close(bottom.x, 0.0) && close(bottom.y, 200.0));
    }

    #[test]
    fn test_orbit_nodes_on_ring() {
        for i in 0..12 {
            let p = orbit_position(i, 12, 200.0);
            assert!(close((p.x * p.x + p.y * p.y).sqrt(), 200.0));
        }
        assert_eq!(orbit_position(0, 0, 10.0), Point { x: 0.0, y: -10.0 });
    }

    #[test]
    fn test_viewbox_percent() {
        let p = to_viewbox_percent(Point { x: 0.0, y: -200.0 }, 500.0);
        assert!(close(p.x, 50.0));
        assert!(close(p.y, 10.0));
    }

    #[test]
    fn test_tilt_for_pointer() {
        let rect = Rect {
            left: 100.0,
            top: 100.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(
            tilt_for_pointer(rect.center(), rect, 10.0),
            Tilt {
                rotate_x: 0.0,
                rotate_y: 0.0
            }
        );
        let corner = tilt_for_pointer(Point { x: 300.0, y: 100.0 }, rect, 10.0);
        assert!(close(corner.rotate_y, 10.0));
        assert!(close(corner.rotate_x, 10.0));
        let far = tilt_for_pointer(Point { x: 900.0, y: 150.0 }, rect, 10.0);
        assert!(close(far.rotate_y, 10.0));
    }

    #[test]
    fn test_magnetic_offset() {
        let rect = Rect {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 40.0,
        };
        let p = magnetic_offset(Point { x: 70.0, y: 10.0 }, rect, 0.3);
        assert!(close(p.x, 6.0));
        assert!(close(p.y, -3.0));
    }

    #[test]
    fn test_interpolate_clamps() {
        assert!(close(interpolate(0.25, (0.0, 0.5), (1.0, 0.0)), 0.5));
        assert!(close(interpolate(0.9, (0.0, 0.5), (1.0, 0.0)), 0.0));
        assert!(close(interpolate(-1.0, (0.0, 1.0), (0.0, 200.0)), 0.0));
        assert!(close(interpolate(3.0, (1.0, 1.0), (7.0, 9.0)), 7.0));
    }
}
