use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;
use viewer3d_animation::{Animator, SamplingSettings};

use crate::description::ObjectDescription;
use crate::errors::{Result, SceneError};
use crate::transform::ObjectTransform;

/// Property key whose animation offsets the object's translation.
pub const TRANSLATION_PROP: &str = "translation";

/// A loaded object: its transform plus one animator per animated property.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub model_path: Option<String>,
    pub transform: ObjectTransform,
    animators: FxHashMap<String, Animator>,
}

impl SceneObject {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model_path: None,
            transform: ObjectTransform::default(),
            animators: FxHashMap::default(),
        }
    }

    /// Builds the object and every animator it declares.
    ///
    /// The first invalid animation aborts the whole object.
    pub fn from_description(
        name: String,
        desc: &ObjectDescription,
        settings: &SamplingSettings,
    ) -> Result<Self> {
        let mut object = Self::new(name);
        object.model_path.clone_from(&desc.model);
        object.transform = ObjectTransform::from(desc);

        for anim in &desc.animations {
            let animator = Animator::from_curve_code(anim.looping, anim.curve, anim.points(), settings)
                .map_err(|source| SceneError::InvalidAnimation {
                    object: object.name.clone(),
                    prop: anim.prop.clone(),
                    source,
                })?;

            if object.animators.insert(anim.prop.clone(), animator).is_some() {
                log::warn!(
                    "Object '{}' declares property '{}' more than once; keeping the last one",
                    object.name,
                    anim.prop
                );
            }
        }

        Ok(object)
    }

    /// Attaches (or replaces) the animator of `prop`.
    pub fn set_animator(&mut self, prop: impl Into<String>, animator: Animator) {
        self.animators.insert(prop.into(), animator);
    }

    #[must_use]
    pub fn animator(&self, prop: &str) -> Option<&Animator> {
        self.animators.get(prop)
    }

    pub fn animated_props(&self) -> impl Iterator<Item = &str> {
        self.animators.keys().map(String::as_str)
    }

    /// Next offset of `prop`, or zero when the property is not animated.
    pub fn advance(&mut self, prop: &str) -> Vec3 {
        self.animators
            .get_mut(prop)
            .map_or(Vec3::ZERO, Animator::advance)
    }

    /// Model matrix for the current frame.
    ///
    /// Every animator moves exactly one frame. Only the translation property
    /// feeds the matrix.
    pub fn frame_matrix(&mut self) -> Mat4 {
        let mut offset = Vec3::ZERO;
        for (prop, animator) in &mut self.animators {
            let value = animator.advance();
            if prop == TRANSLATION_PROP {
                offset = value;
            }
        }
        self.transform.model_matrix(offset)
    }

    /// Restarts every animator from its first point.
    pub fn rewind(&mut self) {
        for animator in self.animators.values_mut() {
            animator.rewind();
        }
    }
}
