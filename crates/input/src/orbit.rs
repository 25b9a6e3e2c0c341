use std::f32::consts::{PI, TAU};

use glam::Vec3;
use mazen_common::ViewportContext;
use serde::{Deserialize, Serialize};

/// Tuning for pointer-driven turning. Turn amounts are in units of
/// `π / half_width`, i.e. a full drag across half the viewport is half a turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Width in pixels of the band along each vertical viewport edge.
    pub edge_band: f32,
    /// Extra turn applied by a drag that ends inside an edge band.
    pub drag_nudge: f32,
    /// Turn applied each frame while the pointer rests inside an edge band.
    pub hover_turn: f32,
    /// Orbit radius as a multiple of the viewport half-width.
    pub radius_factor: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            edge_band: 100.0,
            drag_nudge: 5.0,
            hover_turn: 10.0,
            radius_factor: 32.0,
        }
    }
}

/// Last known horizontal pointer position, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub last_x: f32,
}

/// Which edge band a pointer x lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
}

/// Turns the viewer from pointer drags and edge hover, and derives the
/// look-at point on the horizontal plane from the resulting yaw.
#[derive(Debug, Clone)]
pub struct OrbitLookController {
    config: OrbitConfig,
    yaw: f32,
    pointer: PointerState,
}

impl OrbitLookController {
    /// Start facing yaw 0 with the pointer at the horizontal centre.
    pub fn new(config: OrbitConfig, viewport: &ViewportContext) -> Self {
        Self {
            config,
            yaw: 0.0,
            pointer: PointerState {
                last_x: viewport.half_width(),
            },
        }
    }

    /// Accumulated, unbounded yaw in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Yaw wrapped into `[0, 2π)`.
    pub fn heading(&self) -> f32 {
        let h = self.yaw.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if h >= TAU { 0.0 } else { h }
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Apply a pointer move to x-coordinate `x`. Returns the new yaw.
    pub fn on_pointer_move(&mut self, x: f32, viewport: &ViewportContext) -> f32 {
        let Some(increment) = turn_increment(viewport) else {
            self.pointer.last_x = x;
            return self.yaw;
        };

        let delta = self.pointer.last_x - x;
        self.yaw -= increment * delta;
        self.pointer.last_x = x;

        match self.edge_of(x, viewport) {
            Some(Edge::Left) if delta > 0.0 => {
                self.yaw -= increment * self.config.drag_nudge;
            }
            Some(Edge::Right) if delta < 0.0 => {
                self.yaw += increment * self.config.drag_nudge;
            }
            _ => {}
        }

        self.yaw
    }

    /// Per-frame edge-hover auto-turn from the last pointer position.
    /// Returns the new yaw.
    pub fn on_frame_tick(&mut self, viewport: &ViewportContext) -> f32 {
        let Some(increment) = turn_increment(viewport) else {
            return self.yaw;
        };

        let x = self.pointer.last_x;
        let turn = increment * self.config.hover_turn;
        // Both bands can overlap on a very narrow viewport; each applies.
        if x <= self.config.edge_band {
            self.yaw -= turn;
        }
        if x >= viewport.width - self.config.edge_band {
            self.yaw += turn;
        }

        self.yaw
    }

    /// Look-at point at radius `radius_factor * half_width` along the
    /// current heading, always at `y = 0`.
    pub fn orbit_target(&self, viewport: &ViewportContext) -> Vec3 {
        let radius = viewport.half_width() * self.config.radius_factor;
        let heading = self.heading();
        Vec3::new(radius * heading.cos(), 0.0, radius * heading.sin())
    }

    fn edge_of(&self, x: f32, viewport: &ViewportContext) -> Option<Edge> {
        if x <= self.config.edge_band {
            Some(Edge::Left)
        } else if x >= viewport.width - self.config.edge_band {
            Some(Edge::Right)
        } else {
            None
        }
    }
}

/// `π / half_width`, or `None` for a collapsed viewport.
fn turn_increment(viewport: &ViewportContext) -> Option<f32> {
    let half = viewport.half_width();
    if half > 0.0 && half.is_finite() {
        Some(PI / half)
    } else {
        tracing::trace!(width = viewport.width, "viewport has no width; turn skipped");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn viewport() -> ViewportContext {
        ViewportContext::new(1280.0, 720.0)
    }

    fn controller() -> OrbitLookController {
        OrbitLookController::new(OrbitConfig::default(), &viewport())
    }

    #[test]
    fn starts_centered_facing_zero() {
        let c = controller();
        assert_eq!(c.yaw(), 0.0);
        assert_eq!(c.pointer().last_x, 640.0);
    }

    #[test]
    fn drag_turns_by_delta() {
        let vp = viewport();
        let mut c = controller();
        let inc = PI / 640.0;

        // delta = 640 - 600 = 40
        let yaw = c.on_pointer_move(600.0, &vp);
        assert!((yaw - (-inc * 40.0)).abs() < EPS);

        // delta = 600 - 700 = -100
        let yaw = c.on_pointer_move(700.0, &vp);
        assert!((yaw - (-inc * 40.0 + inc * 100.0)).abs() < EPS);
        assert_eq!(c.pointer().last_x, 700.0);
    }

    #[test]
    fn drag_into_left_band_adds_nudge() {
        let vp = viewport();
        let mut c = controller();
        let inc = PI / 640.0;

        // delta = 640 - 80 = 560, moving left into the band
        let yaw = c.on_pointer_move(80.0, &vp);
        assert!((yaw - (-inc * 560.0 - inc * 5.0)).abs() < EPS);
    }

    #[test]
    fn drag_into_right_band_adds_nudge() {
        let vp = viewport();
        let mut c = controller();
        let inc = PI / 640.0;

        // delta = 640 - 1200 = -560, moving right into the band
        let yaw = c.on_pointer_move(1200.0, &vp);
        assert!((yaw - (inc * 560.0 + inc * 5.0)).abs() < EPS);
    }

    #[test]
    fn drag_out_of_band_has_no_nudge() {
        let vp = viewport();
        let mut c = controller();
        let inc = PI / 640.0;

        c.on_pointer_move(50.0, &vp);
        let before = c.yaw();
        // still inside the left band but moving right (delta < 0)
        let after = c.on_pointer_move(90.0, &vp);
        assert!((after - before - inc * 40.0).abs() < EPS);
    }

    #[test]
    fn hover_left_turns_negative_each_frame() {
        let vp = viewport();
        let mut c = controller();
        let inc = PI / 640.0;

        c.on_pointer_move(30.0, &vp);
        let start = c.yaw();
        let frames = 12;
        let mut previous = start;
        for _ in 0..frames {
            let yaw = c.on_frame_tick(&vp);
            assert!(yaw < previous);
            previous = yaw;
        }
        let expected = start - frames as f32 * 10.0 * inc;
        assert!((c.yaw() - expected).abs() < 1e-4);
    }

    #[test]
    fn hover_right_turns_positive_each_frame() {
        let vp = viewport();
        let mut c = controller();
        let inc = PI / 640.0;

        c.on_pointer_move(1250.0, &vp);
        let start = c.yaw();
        for _ in 0..7 {
            c.on_frame_tick(&vp);
        }
        assert!((c.yaw() - (start + 70.0 * inc)).abs() < 1e-4);
    }

    #[test]
    fn hover_in_middle_does_nothing() {
        let vp = viewport();
        let mut c = controller();
        c.on_pointer_move(500.0, &vp);
        let start = c.yaw();
        for _ in 0..100 {
            c.on_frame_tick(&vp);
        }
        assert_eq!(c.yaw(), start);
    }

    #[test]
    fn band_edges_are_inclusive() {
        let vp = viewport();
        let mut c = controller();
        let inc = PI / 640.0;

        c.on_pointer_move(100.0, &vp);
        let start = c.yaw();
        c.on_frame_tick(&vp);
        assert!((c.yaw() - (start - 10.0 * inc)).abs() < EPS);

        c.on_pointer_move(1180.0, &vp);
        let start = c.yaw();
        c.on_frame_tick(&vp);
        assert!((c.yaw() - (start + 10.0 * inc)).abs() < EPS);
    }

    #[test]
    fn orbit_target_starts_on_positive_x() {
        let c = controller();
        let t = c.orbit_target(&viewport());
        assert!((t.x - 32.0 * 640.0).abs() < 1e-2);
        assert_eq!(t.y, 0.0);
        assert!(t.z.abs() < 1e-2);
    }

    #[test]
    fn orbit_target_stays_on_circle() {
        let vp = viewport();
        let mut c = controller();
        let radius = 32.0 * 640.0;
        for x in [0.0, 1280.0, 3.0, 900.0, 10.0, 640.0, 1279.0] {
            c.on_pointer_move(x, &vp);
            for _ in 0..50 {
                c.on_frame_tick(&vp);
            }
            let t = c.orbit_target(&vp);
            assert_eq!(t.y, 0.0);
            let r = (t.x * t.x + t.z * t.z).sqrt();
            assert!((r - radius).abs() / radius < 1e-5);
        }
    }

    #[test]
    fn yaw_accumulates_but_heading_wraps() {
        let vp = viewport();
        let mut c = controller();
        c.on_pointer_move(1270.0, &vp);
        for _ in 0..10_000 {
            c.on_frame_tick(&vp);
        }
        assert!(c.yaw() > TAU);
        let h = c.heading();
        assert!((0.0..TAU).contains(&h));
    }

    #[test]
    fn heading_of_negative_yaw_is_positive() {
        let vp = viewport();
        let mut c = controller();
        c.on_pointer_move(700.0, &vp);
        c.on_pointer_move(800.0, &vp);
        c.on_pointer_move(600.0, &vp);
        assert!(c.yaw() < 0.0);
        assert!(c.heading() > 0.0);
    }

    #[test]
    fn collapsed_viewport_does_not_turn() {
        let vp = ViewportContext::new(0.0, 0.0);
        let mut c = controller();
        assert_eq!(c.on_pointer_move(10.0, &vp), 0.0);
        assert_eq!(c.on_frame_tick(&vp), 0.0);
        assert_eq!(c.pointer().last_x, 10.0);
    }
}
