//! Beam Geometry
//!
//! Builds the two crossed quads used to draw a point-to-point energy beam.
//!
//! # Layout
//!
//! Each quad is four vertices in triangle-fan order:
//!
//! ```text
//! head+off ---- tail+off      u = tile_u ... 0
//!    |              |
//! head-off ---- tail-off
//! ```
//!
//! Quad Y is offset along world up, quad X along world right. Seen from any
//! angle at least one of them has visible area, which reads as a round beam
//! without cylinder geometry.
//!
//! The texture repeats every `width` world units, so `tile_u` grows with beam
//! length instead of stretching one copy of the texture.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Half-width used when no tracer material is bound
pub const DEFAULT_HALF_WIDTH: f32 = 0.05;
/// Texture repeat length used when no tracer material is bound
pub const DEFAULT_TILE_WIDTH: f32 = 10.0;

pub const HEAD_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const TAIL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 32.0 / 255.0];

/// Triangle list equivalent of one four-vertex fan
pub const FAN_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Dimensions declared by a tracer material
#[derive(Clone, Component, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct BeamMaterial {
    /// Half-width of each quad
    pub height: f32,
    /// World length covered by one repeat of the texture
    pub width: f32,
}

impl BeamMaterial {
    pub fn new(height: f32, width: f32) -> Self {
        Self { height, width }
    }
}

impl Default for BeamMaterial {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_WIDTH, DEFAULT_TILE_WIDTH)
    }
}

/// Head/tail pair for one frame of one beam
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamSpan {
    pub head: Vec3,
    pub tail: Vec3,
}

impl BeamSpan {
    pub fn new(head: Vec3, tail: Vec3) -> Self {
        Self { head, tail }
    }

    pub fn length(&self) -> f32 {
        self.head.distance(self.tail)
    }

    /// Offsets for quad Y and quad X
    pub fn half_widths(h: f32) -> (Vec3, Vec3) {
        (Vec3::new(0.0, h, 0.0), Vec3::new(h, 0.0, 0.0))
    }

    /// Texture repeats along the span; a non-positive width falls back to
    /// [`DEFAULT_TILE_WIDTH`]
    pub fn tile_u(&self, width: f32) -> f32 {
        let width = if width > 0.0 { width } else { DEFAULT_TILE_WIDTH };
        self.length() / width
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamVertex {
    pub position: Vec3,
    pub color: [f32; 4],
    pub uv: Vec2,
}

pub type BeamQuad = [BeamVertex; 4];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamGeometry {
    pub quad_y: BeamQuad,
    pub quad_x: BeamQuad,
    pub tile_u: f32,
}

impl BeamGeometry {
    pub fn quads(&self) -> [&BeamQuad; 2] {
        [&self.quad_y, &self.quad_x]
    }

    /// All eight vertices, quad Y first
    pub fn vertices(&self) -> impl Iterator<Item = &BeamVertex> {
        self.quads().into_iter().flatten()
    }

    /// Triangle list indices for both fans
    pub fn indices(&self) -> Vec<u32> {
        (0..2u32)
            .flat_map(|quad| FAN_INDICES.iter().map(move |i| quad * 4 + i))
            .collect()
    }
}

/// Build beam geometry from `head` to `tail`
///
/// Without a material the beam uses [`DEFAULT_HALF_WIDTH`] and
/// [`DEFAULT_TILE_WIDTH`]. A zero-length span yields zero-area quads.
pub fn build(head: Vec3, tail: Vec3, material: Option<&BeamMaterial>) -> BeamGeometry {
    let BeamMaterial { height: h, width: w } = material.copied().unwrap_or_default();
    let span = BeamSpan::new(head, tail);
    let tile_u = span.tile_u(w);
    let (y, x) = BeamSpan::half_widths(h);

    BeamGeometry {
        quad_y: quad(&span, y, tile_u),
        quad_x: quad(&span, x, tile_u),
        tile_u,
    }
}

fn quad(span: &BeamSpan, offset: Vec3, u: f32) -> BeamQuad {
    [
        BeamVertex { position: span.head + offset, color: HEAD_COLOR, uv: Vec2::new(u, 0.0) },
        BeamVertex { position: span.tail + offset, color: TAIL_COLOR, uv: Vec2::new(0.0, 0.0) },
        BeamVertex { position: span.tail - offset, color: TAIL_COLOR, uv: Vec2::new(0.0, 1.0) },
        BeamVertex { position: span.head - offset, color: HEAD_COLOR, uv: Vec2::new(u, 1.0) },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_near(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-5),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_default_material_along_x() {
        let geometry = build(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), None);

        assert!((geometry.tile_u - 10.0).abs() < 1e-5);

        let [head_top, tail_top, tail_bottom, head_bottom] = geometry.quad_y;
        assert_vec3_near(head_top.position, Vec3::new(0.0, 0.05, 0.0));
        assert_vec3_near(head_bottom.position, Vec3::new(0.0, -0.05, 0.0));
        assert_vec3_near(tail_top.position, Vec3::new(100.0, 0.05, 0.0));
        assert_vec3_near(tail_bottom.position, Vec3::new(100.0, -0.05, 0.0));

        assert!((head_top.uv.x - 10.0).abs() < 1e-5);
        assert!((head_bottom.uv.x - 10.0).abs() < 1e-5);
        assert_eq!(tail_top.uv.x, 0.0);
        assert_eq!(tail_bottom.uv.x, 0.0);
    }

    #[test]
    fn test_quad_x_offsets_along_x() {
        let geometry = build(Vec3::ZERO, Vec3::new(0.0, 0.0, -20.0), None);

        let [head_right, tail_right, tail_left, head_left] = geometry.quad_x;
        assert_vec3_near(head_right.position, Vec3::new(0.05, 0.0, 0.0));
        assert_vec3_near(tail_right.position, Vec3::new(0.05, 0.0, -20.0));
        assert_vec3_near(tail_left.position, Vec3::new(-0.05, 0.0, -20.0));
        assert_vec3_near(head_left.position, Vec3::new(-0.05, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_span_is_zero_area() {
        let p = Vec3::new(3.0, -2.0, 7.5);
        let geometry = build(p, p, Some(&BeamMaterial::new(0.2, 5.0)));

        assert_eq!(geometry.tile_u, 0.0);
        for quad in geometry.quads() {
            assert_eq!(quad[0].position, quad[1].position);
            assert_eq!(quad[2].position, quad[3].position);
        }
    }

    #[test]
    fn test_zero_tile_width_uses_default() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        let degenerate = build(p, p, Some(&BeamMaterial::new(0.2, 0.0)));
        assert_eq!(degenerate.tile_u, 0.0);
        assert!(degenerate.vertices().all(|v| v.uv.is_finite()));

        let geometry = build(Vec3::ZERO, Vec3::new(0.0, 0.0, -40.0), Some(&BeamMaterial::new(0.2, 0.0)));
        assert!((geometry.tile_u - 40.0 / DEFAULT_TILE_WIDTH).abs() < 1e-5);
    }

    #[test]
    fn test_material_sets_tiling_and_thickness() {
        let material = BeamMaterial::new(0.2, 5.0);
        let head = Vec3::new(1.0, 2.0, 3.0);
        let tail = head + Vec3::new(30.0, 0.0, 40.0); // length 50
        let geometry = build(head, tail, Some(&material));

        assert!((geometry.tile_u - 10.0).abs() < 1e-5);
        for quad in geometry.quads() {
            let offset = quad[0].position - head;
            assert!((offset.length() - 0.2).abs() < 1e-5);
            assert_vec3_near(quad[3].position - head, -offset);
        }
    }

    #[test]
    fn test_tiling_scales_with_length() {
        let short = build(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0), None);
        let long = build(Vec3::ZERO, Vec3::new(0.0, 0.0, 50.0), None);

        // Same density of repeats per world unit
        assert!((short.tile_u / 5.0 - long.tile_u / 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_head_opaque_tail_faded() {
        let geometry = build(Vec3::ZERO, Vec3::X, None);
        for quad in geometry.quads() {
            assert_eq!(quad[0].color, HEAD_COLOR);
            assert_eq!(quad[3].color, HEAD_COLOR);
            assert_eq!(quad[1].color, TAIL_COLOR);
            assert_eq!(quad[2].color, TAIL_COLOR);
            assert_eq!(quad[1].uv, Vec2::new(0.0, 0.0));
            assert_eq!(quad[2].uv, Vec2::new(0.0, 1.0));
            assert_eq!(quad[3].uv.y, 1.0);
        }
        assert!((TAIL_COLOR[3] - 0.125).abs() < 0.01);
    }

    #[test]
    fn test_indices_cover_both_fans() {
        let geometry = build(Vec3::ZERO, Vec3::X, None);
        assert_eq!(geometry.indices(), vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        assert_eq!(geometry.vertices().count(), 8);
    }
}
