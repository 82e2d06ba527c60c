//! Collision resolution against static rectangles
//!
//! Movement is resolved one axis at a time: horizontal first, then vertical,
//! each pass checked against every platform. This keeps bodies from tunneling
//! through platform corners at the cost of sometimes catching on them.

use super::anim::GravityDir;
use super::rect::Rect;

/// Index of the first rect in `rects` overlapping `rect`
pub fn first_overlap(rect: &Rect, rects: &[Rect]) -> Option<usize> {
    rects.iter().position(|other| rect.intersects(other))
}

/// Push `rect` out of any platform it ran into while moving horizontally.
///
/// The leading edge is clamped to the platform's near edge. Velocity is left
/// alone: horizontal hits stop the body, they don't bounce it.
pub fn resolve_horizontal(rect: &mut Rect, vx: f32, platforms: &[Rect]) {
    for platform in platforms {
        if !rect.intersects(platform) {
            continue;
        }
        if vx > 0.0 {
            rect.set_right(platform.left());
        } else if vx < 0.0 {
            rect.set_left(platform.right());
        }
    }
}

/// Snap `rect` onto any platform it fell into along the current gravity.
///
/// Only motion toward "down" (per `gravity`) lands, and only once per pass;
/// moving against gravity passes through. Returns true when the body landed, in which case the
/// caller should zero its vertical velocity.
pub fn resolve_vertical(rect: &mut Rect, vy: f32, gravity: GravityDir, platforms: &[Rect]) -> bool {
    let mut landed = false;
    for platform in platforms {
        if !rect.intersects(platform) {
            continue;
        }
        match gravity {
            GravityDir::Down if vy > 0.0 && !landed => {
                rect.set_bottom(platform.top());
                landed = true;
            }
            GravityDir::Up if vy < 0.0 && !landed => {
                rect.set_top(platform.bottom());
                landed = true;
            }
            _ => {}
        }
    }
    landed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 20.0)
    }

    #[test]
    fn test_first_overlap() {
        let rects = [Rect::new(0.0, 0.0, 5.0, 5.0), platform()];
        assert_eq!(first_overlap(&Rect::new(150.0, 105.0, 10.0, 10.0), &rects), Some(1));
        assert_eq!(first_overlap(&Rect::new(500.0, 500.0, 10.0, 10.0), &rects), None);
    }

    #[test]
    fn test_horizontal_moving_right_stops_at_left_edge() {
        let mut body = Rect::new(95.0, 105.0, 10.0, 10.0);
        resolve_horizontal(&mut body, 50.0, &[platform()]);
        assert_eq!(body.right(), 100.0);
        assert!(!body.intersects(&platform()));
    }

    #[test]
    fn test_horizontal_moving_left_stops_at_right_edge() {
        let mut body = Rect::new(295.0, 105.0, 10.0, 10.0);
        resolve_horizontal(&mut body, -50.0, &[platform()]);
        assert_eq!(body.left(), 300.0);
    }

    #[test]
    fn test_horizontal_without_motion_is_untouched() {
        let mut body = Rect::new(150.0, 105.0, 10.0, 10.0);
        resolve_horizontal(&mut body, 0.0, &[platform()]);
        assert_eq!(body.x, 150.0);
    }

    #[test]
    fn test_vertical_lands_on_top_with_gravity_down() {
        let mut body = Rect::new(150.0, 95.0, 10.0, 10.0);
        assert!(resolve_vertical(&mut body, 100.0, GravityDir::Down, &[platform()]));
        assert_eq!(body.bottom(), 100.0);
    }

    #[test]
    fn test_vertical_lands_on_bottom_with_gravity_up() {
        let mut body = Rect::new(150.0, 115.0, 10.0, 10.0);
        assert!(resolve_vertical(&mut body, -100.0, GravityDir::Up, &[platform()]));
        assert_eq!(body.top(), 120.0);
    }

    #[test]
    fn test_vertical_against_gravity_passes_through() {
        let mut body = Rect::new(150.0, 115.0, 10.0, 10.0);
        assert!(!resolve_vertical(&mut body, -100.0, GravityDir::Down, &[platform()]));
        assert_eq!(body.y, 115.0);
    }
}
