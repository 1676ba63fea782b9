use glam::{Mat4, Vec3};

/// Slider range of each translation component.
pub const TRANSLATE_RANGE: (f32, f32) = (-10.0, 10.0);
/// Slider range of each rotation angle, in degrees.
pub const ROTATE_RANGE: (f32, f32) = (0.0, 360.0);
/// Slider range of the uniform scale.
pub const SCALE_RANGE: (f32, f32) = (0.1, 5.0);

/// User-editable transform of a scene object.
///
/// Rotation is kept as Euler angles in degrees because that is what the
/// editing panel works with; the matrix is rebuilt every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    pub translate: Vec3,
    pub rotate_degrees: Vec3,
    pub scale: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            translate: Vec3::ZERO,
            rotate_degrees: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl ObjectTransform {
    #[must_use]
    pub fn new(translate: Vec3, rotate_degrees: Vec3, scale: f32) -> Self {
        Self {
            translate,
            rotate_degrees,
            scale,
        }
    }

    /// Model matrix with `offset` added to the translation.
    ///
    /// Order: translate, then rotate about X, Y and Z, then scale.
    #[must_use]
    pub fn model_matrix(&self, offset: Vec3) -> Mat4 {
        let r = self.rotate_degrees;
        Mat4::from_translation(self.translate + offset)
            * Mat4::from_rotation_x(r.x.to_radians())
            * Mat4::from_rotation_y(r.y.to_radians())
            * Mat4::from_rotation_z(r.z.to_radians())
            * Mat4::from_scale(Vec3::splat(self.scale))
    }

    /// Copy with every component clamped to its slider range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            translate: self
                .translate
                .clamp(Vec3::splat(TRANSLATE_RANGE.0), Vec3::splat(TRANSLATE_RANGE.1)),
            rotate_degrees: self
                .rotate_degrees
                .clamp(Vec3::splat(ROTATE_RANGE.0), Vec3::splat(ROTATE_RANGE.1)),
            scale: self.scale.clamp(SCALE_RANGE.0, SCALE_RANGE.1),
        }
    }
}

/// Values from a scene file are clamped to the slider ranges.
impl From<&crate::description::ObjectDescription> for ObjectTransform {
    fn from(desc: &crate::description::ObjectDescription) -> Self {
        Self::new(
            Vec3::from_array(desc.translate),
            Vec3::from_array(desc.rotate),
            desc.scale,
        )
        .clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform_with_offset_is_pure_translation() {
        let m = ObjectTransform::default().model_matrix(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m, Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn clamped_respects_slider_ranges() {
        let t = ObjectTransform::new(
            Vec3::new(-20.0, 5.0, 20.0),
            Vec3::new(-1.0, 400.0, 90.0),
            9.0,
        )
        .clamped();
        assert_eq!(t.translate, Vec3::new(-10.0, 5.0, 10.0));
        assert_eq!(t.rotate_degrees, Vec3::new(0.0, 360.0, 90.0));
        assert!((t.scale - 5.0).abs() < f32::EPSILON);
    }
}
