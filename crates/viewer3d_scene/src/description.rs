//! Scene file schema.
//!
//! A scene file is a JSON document listing the objects to load, their initial
//! transform and any number of named animations:
//!
//! ```json
//! {
//!   "settings": { "samples_per_segment": 100 },
//!   "objects": [
//!     {
//!       "name": "cube",
//!       "model": "resources/objects/cube.obj",
//!       "translate": [0.0, 1.0, 0.0],
//!       "rotate": [0.0, 90.0, 0.0],
//!       "scale": 1.0,
//!       "animations": [
//!         {
//!           "prop": "translation",
//!           "loop": true,
//!           "curve": 1,
//!           "controlPoints": [
//!             { "x": 0.0, "y": 0.0, "z": 0.0 },
//!             { "x": 1.0, "y": 2.0, "z": 0.0 },
//!             { "x": 2.0, "y": 2.0, "z": 0.0 },
//!             { "x": 3.0, "y": 0.0, "z": 0.0 }
//!           ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Only the structure is checked here. Curve codes and sampling settings are
//! validated when the description is turned into a [`Scene`](crate::Scene).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use viewer3d_animation::SamplingSettings;

use crate::errors::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub settings: SamplingSettings,
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectDescription {
    /// Display name. Derived from the model file name when absent.
    pub name: Option<String>,
    /// Model file, loaded by the renderer. Not interpreted here.
    pub model: Option<String>,
    pub translate: [f32; 3],
    /// Euler angles in degrees.
    pub rotate: [f32; 3],
    pub scale: f32,
    pub animations: Vec<AnimationDescription>,
}

impl Default for ObjectDescription {
    fn default() -> Self {
        Self {
            name: None,
            model: None,
            translate: [0.0; 3],
            rotate: [0.0; 3],
            scale: 1.0,
            animations: Vec::new(),
        }
    }
}

/// One animated property of an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDescription {
    /// Lookup key of the animated property, e.g. `"translation"`.
    pub prop: String,
    #[serde(rename = "loop", default)]
    pub looping: bool,
    /// `0` = Bézier, `1` = Catmull-Rom, `2` = Hermite.
    #[serde(default)]
    pub curve: i64,
    #[serde(default)]
    pub control_points: Vec<ControlPoint>,
}

impl AnimationDescription {
    #[must_use]
    pub fn points(&self) -> Vec<Vec3> {
        self.control_points.iter().copied().map(Vec3::from).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<ControlPoint> for Vec3 {
    fn from(p: ControlPoint) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Vec3> for ControlPoint {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}
