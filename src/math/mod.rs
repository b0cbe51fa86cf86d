//! Geometry primitives exercised by the bundled test suites.

mod aabb2;
mod int_vec2;
mod int_vec3;
mod vec2;
mod vec3;
mod vec4;

use thiserror::Error;

pub use aabb2::Aabb2;
pub use int_vec2::IntVec2;
pub use int_vec3::IntVec3;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

pub const DEFAULT_EPSILON: f32 = 0.001;

/// Failure to read a vector from comma-separated text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVecError {
    #[error("expected {expected} comma-separated components, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("invalid vector component \"{0}\"")]
    Component(String),
}

/// Inclusive closeness check used by every float assertion.
pub fn is_mostly_equal(a: f32, b: f32, epsilon: f32) -> bool {
    a >= b - epsilon && a <= b + epsilon
}

pub fn approx(a: f32, b: f32) -> bool {
    is_mostly_equal(a, b, DEFAULT_EPSILON)
}

pub fn approx_vec2(v: Vec2, x: f32, y: f32) -> bool {
    approx(v.x, x) && approx(v.y, y)
}

pub fn approx_vec3(v: Vec3, x: f32, y: f32, z: f32) -> bool {
    approx(v.x, x) && approx(v.y, y) && approx(v.z, z)
}

pub fn approx_vec4(v: Vec4, x: f32, y: f32, z: f32, w: f32) -> bool {
    approx_vec3(Vec3::new(v.x, v.y, v.z), x, y, z) && approx(v.w, w)
}

pub fn approx_box(b: &Aabb2, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> bool {
    approx_vec2(b.mins, min_x, min_y) && approx_vec2(b.maxs, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mostly_equal_is_inclusive() {
        assert!(is_mostly_equal(1.0, 1.0005, 0.001));
        assert!(is_mostly_equal(1.001, 1.0, 0.01));
        assert!(!is_mostly_equal(1.0, 1.1, 0.001));
    }

    #[test]
    fn approx_helpers() {
        assert!(approx_vec2(Vec2::new(0.3, 0.4), 0.3, 0.4));
        assert!(approx_box(&Aabb2::new(0.0, 0.0, 1.0, 1.0), 0.0, 0.0, 1.0, 1.0));
        assert!(!approx_box(&Aabb2::new(0.0, 0.0, 1.0, 2.0), 0.0, 0.0, 1.0, 1.0));
        assert!(approx_vec3(Vec3::new(1.0, 2.0, 3.0004), 1.0, 2.0, 3.0));
        assert!(!approx_vec4(Vec4::new(1.0, 2.0, 3.0, 4.1), 1.0, 2.0, 3.0, 4.0));
    }
}
