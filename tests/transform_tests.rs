//! ObjectTransform tests
//!
//! Tests for:
//! - Model matrix composition order (translate, rotate X/Y/Z, scale)
//! - Animation offset applied to translation only
//! - Conversion from scene descriptions

use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

use viewer3d::scene::{ObjectDescription, ObjectTransform};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

// ============================================================================
// Model Matrix
// ============================================================================

#[test]
fn default_transform_is_identity() {
    let t = ObjectTransform::default();
    assert_eq!(t.model_matrix(Vec3::ZERO), Mat4::IDENTITY);
}

#[test]
fn offset_adds_to_translation() {
    let t = ObjectTransform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 1.0);
    let m = t.model_matrix(Vec3::new(0.5, -2.0, 1.0));
    assert!(vec3_approx(m.w_axis.truncate(), Vec3::new(1.5, 0.0, 4.0)));
}

#[test]
fn offset_is_not_rotated_or_scaled() {
    let t = ObjectTransform::new(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0), 3.0);
    let m = t.model_matrix(Vec3::X);
    assert!(vec3_approx(m.w_axis.truncate(), Vec3::X));
}

#[test]
fn rotation_is_in_degrees_about_each_axis() {
    let t = ObjectTransform::new(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0), 1.0);
    let p = t.model_matrix(Vec3::ZERO).transform_point3(Vec3::X);
    assert!(vec3_approx(p, Vec3::new(0.0, 0.0, -1.0)), "got {p:?}");

    let t = ObjectTransform::new(Vec3::ZERO, Vec3::new(90.0, 0.0, 0.0), 1.0);
    let p = t.model_matrix(Vec3::ZERO).transform_point3(Vec3::Y);
    assert!(vec3_approx(p, Vec3::Z), "got {p:?}");
}

#[test]
fn composition_order_matches_x_then_y_then_z() {
    let t = ObjectTransform::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(90.0, 90.0, 0.0), 2.0);
    let expected = Mat4::from_translation(Vec3::X)
        * Mat4::from_rotation_x(FRAC_PI_2)
        * Mat4::from_rotation_y(FRAC_PI_2)
        * Mat4::from_scale(Vec3::splat(2.0));

    let m = t.model_matrix(Vec3::ZERO);
    assert!(m.abs_diff_eq(expected, EPSILON), "{m:?} != {expected:?}");
}

#[test]
fn scale_is_uniform() {
    let t = ObjectTransform::new(Vec3::ZERO, Vec3::ZERO, 0.5);
    let p = t.model_matrix(Vec3::ZERO).transform_point3(Vec3::new(2.0, 4.0, -6.0));
    assert!(vec3_approx(p, Vec3::new(1.0, 2.0, -3.0)));
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn from_description() {
    let desc = ObjectDescription {
        translate: [1.0, 2.0, 3.0],
        rotate: [10.0, 20.0, 30.0],
        scale: 0.25,
        ..Default::default()
    };
    let t = ObjectTransform::from(&desc);
    assert_eq!(t.translate, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.rotate_degrees, Vec3::new(10.0, 20.0, 30.0));
    assert!((t.scale - 0.25).abs() < f32::EPSILON);
}

#[test]
fn from_description_clamps_out_of_range_values() {
    let desc = ObjectDescription {
        translate: [-15.0, 0.0, 12.5],
        rotate: [-10.0, 400.0, 0.0],
        scale: 0.0,
        ..Default::default()
    };
    let t = ObjectTransform::from(&desc);
    assert_eq!(t.translate, Vec3::new(-10.0, 0.0, 10.0));
    assert_eq!(t.rotate_degrees, Vec3::new(0.0, 360.0, 0.0));
    assert!((t.scale - 0.1).abs() < f32::EPSILON);

    // A degenerate scale no longer collapses the model matrix
    assert!(t.model_matrix(Vec3::ZERO).determinant().abs() > 0.0);
}
