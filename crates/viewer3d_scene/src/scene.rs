use std::collections::BTreeMap;
use std::path::Path;

use glam::Mat4;
use viewer3d_animation::SamplingSettings;

use crate::description::SceneDescription;
use crate::errors::{Result, SceneError};
use crate::object::SceneObject;

/// Derives an object name from a model path: the file name without extension.
///
/// Both `/` and `\` are accepted as separators.
#[must_use]
pub fn name_from_model_path(path: &str) -> Option<String> {
    let normalized = path.replace('\\', "/");
    Path::new(&normalized)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// The set of loaded objects, kept in name order.
///
/// A scene is only ever replaced wholesale; objects are not rebuilt in place
/// when a new scene file is loaded.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    settings: SamplingSettings,
    objects: BTreeMap<String, SceneObject>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every object and animator of `desc`.
    ///
    /// Nothing is returned unless the whole description is valid.
    pub fn from_description(desc: &SceneDescription) -> Result<Self> {
        desc.settings.validate()?;

        let mut scene = Self {
            settings: desc.settings,
            objects: BTreeMap::new(),
        };

        for (index, obj_desc) in desc.objects.iter().enumerate() {
            let base = obj_desc
                .name
                .clone()
                .or_else(|| obj_desc.model.as_deref().and_then(name_from_model_path))
                .ok_or(SceneError::MissingName(index))?;

            // Resolved before building so animation errors carry the final name
            let name = scene.unique_name(&base);
            let object = SceneObject::from_description(name, obj_desc, &scene.settings)?;
            scene.insert(object);
        }

        log::info!(
            "Scene loaded: {} object(s), {} samples per segment",
            scene.len(),
            scene.settings.samples_per_segment
        );

        Ok(scene)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_description(&SceneDescription::from_json_str(json)?)
    }

    /// Reads and builds a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading scene: {}", path.display());
        Self::from_description(&SceneDescription::from_path(path)?)
    }

    /// Replaces the whole scene with `desc`.
    ///
    /// On error the current scene is left untouched.
    pub fn reload_from(&mut self, desc: &SceneDescription) -> Result<()> {
        *self = Self::from_description(desc)?;
        Ok(())
    }

    /// Adds `object` under a name no other object uses and returns that name.
    ///
    /// When the name is taken, the smallest free numeric suffix is appended
    /// (`cube`, `cube1`, `cube2`, ...).
    pub fn insert(&mut self, mut object: SceneObject) -> String {
        let name = self.unique_name(&object.name);
        if name != object.name {
            log::debug!("Object name '{}' already in use, renamed to '{name}'", object.name);
        }
        object.name.clone_from(&name);
        self.objects.insert(name.clone(), object);
        name
    }

    fn unique_name(&self, base: &str) -> String {
        if !self.objects.contains_key(base) {
            return base.to_owned();
        }
        (1_usize..)
            .map(|i| format!("{base}{i}"))
            .find(|candidate| !self.objects.contains_key(candidate))
            .unwrap_or_else(|| base.to_owned())
    }

    pub fn remove(&mut self, name: &str) -> Option<SceneObject> {
        self.objects.remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.get_mut(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    #[must_use]
    pub fn settings(&self) -> &SamplingSettings {
        &self.settings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Advances the scene one frame and returns each object's model matrix,
    /// in name order.
    pub fn tick(&mut self) -> Vec<(String, Mat4)> {
        self.objects
            .iter_mut()
            .map(|(name, object)| (name.clone(), object.frame_matrix()))
            .collect()
    }

    pub fn rewind(&mut self) {
        for object in self.objects.values_mut() {
            object.rewind();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_path_stem_becomes_name() {
        assert_eq!(name_from_model_path("resources/objects/cube.obj").as_deref(), Some("cube"));
        assert_eq!(name_from_model_path("resources\\backpack\\backpack.obj").as_deref(), Some("backpack"));
        assert_eq!(name_from_model_path("teapot").as_deref(), Some("teapot"));
        assert_eq!(name_from_model_path(""), None);
    }

    #[test]
    fn colliding_names_get_numeric_suffixes() {
        let mut scene = Scene::new();
        assert_eq!(scene.insert(SceneObject::new("cube")), "cube");
        assert_eq!(scene.insert(SceneObject::new("cube")), "cube1");
        assert_eq!(scene.insert(SceneObject::new("cube")), "cube2");
        scene.remove("cube1");
        assert_eq!(scene.insert(SceneObject::new("cube")), "cube1");
        assert_eq!(scene.get("cube2").map(|o| o.name.as_str()), Some("cube2"));
    }
}
