//! viewer3d
//!
//! Umbrella crate for the viewer's animation and scene layers.
//!
//! - [`animation`]: control-point trajectories and their playback
//! - [`scene`]: scene files, object transforms and per-frame model matrices
//!
//! ```rust
//! use viewer3d::Scene;
//!
//! let mut scene = Scene::from_json_str(r#"{
//!     "objects": [{
//!         "name": "cube",
//!         "animations": [{
//!             "prop": "translation",
//!             "loop": true,
//!             "curve": 0,
//!             "controlPoints": [
//!                 { "x": 0, "y": 0, "z": 0 }, { "x": 1, "y": 1, "z": 0 },
//!                 { "x": 2, "y": 1, "z": 0 }, { "x": 3, "y": 0, "z": 0 }
//!             ]
//!         }]
//!     }]
//! }"#)?;
//!
//! let frame = scene.tick();
//! assert_eq!(frame[0].0, "cube");
//! # Ok::<(), viewer3d::scene::SceneError>(())
//! ```

pub use glam;
pub use viewer3d_animation as animation;
pub use viewer3d_scene as scene;

pub use animation::{AnimationError, Animator, BasisKind, SamplingSettings, Trajectory};
pub use scene::{ObjectTransform, Scene, SceneDescription, SceneError, SceneObject};
