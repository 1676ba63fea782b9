//! Scene loading for the viewer.
//!
//! Turns a JSON scene description into [`SceneObject`]s, each carrying an
//! editable [`ObjectTransform`] and one [`Animator`](viewer3d_animation::Animator)
//! per animated property, and produces per-frame model matrices.

pub mod description;
pub mod errors;
pub mod object;
pub mod scene;
pub mod transform;

pub use description::{AnimationDescription, ControlPoint, ObjectDescription, SceneDescription};
pub use errors::{Result, SceneError};
pub use object::{SceneObject, TRANSLATION_PROP};
pub use scene::{Scene, name_from_model_path};
pub use transform::ObjectTransform;
