//! The project file model.
//!
//! A project is plain data: sprite definitions with starting positions and
//! brick definitions in script order. [`ProjectFile::instantiate`] turns
//! the data into runnable sprite actors with freshly allocated IDs.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stage_math::{IVec2, Vec2};
use stage_object::{Sprite, SpriteIdAllocator};
use stage_runtime::SpriteActor;
use stage_script::bricks::{GlideToBrick, PlaceAtBrick, WaitBrick};
use stage_script::{Brick, Script};

use crate::ProjectError;

/// A complete saved stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    /// Project display name.
    pub name: String,
    /// Sprites in stage order.
    pub sprites: Vec<SpriteDef>,
}

/// One sprite: name, starting position, script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteDef {
    /// Sprite display name.
    pub name: String,
    /// Starting stage position.
    pub start: Vec2,
    /// Script bricks in execution order.
    #[serde(default)]
    pub script: Vec<BrickDef>,
}

/// One brick in its serialised form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrickDef {
    /// Linear glide to an integer destination over a duration.
    GlideTo {
        destination: IVec2,
        duration_ms: u64,
    },
    /// Immediate positional snap.
    PlaceAt { destination: IVec2 },
    /// Consume time without moving.
    Wait { duration_ms: u64 },
}

impl BrickDef {
    /// Build the runnable brick for this definition.
    #[must_use]
    pub fn into_brick(self) -> Box<dyn Brick> {
        match self {
            BrickDef::GlideTo {
                destination,
                duration_ms,
            } => Box::new(GlideToBrick::new(destination, duration_ms)),
            BrickDef::PlaceAt { destination } => Box::new(PlaceAtBrick::new(destination)),
            BrickDef::Wait { duration_ms } => Box::new(WaitBrick::new(duration_ms)),
        }
    }
}

impl ProjectFile {
    /// Load a project from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save the project as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProjectError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Build runnable actors, allocating a fresh ID per sprite.
    #[must_use]
    pub fn instantiate(&self, ids: &mut SpriteIdAllocator) -> Vec<SpriteActor> {
        self.sprites
            .iter()
            .map(|def| {
                let sprite = Arc::new(Sprite::new(ids.allocate(), def.name.clone(), def.start));
                let mut script = Script::new();
                for brick in &def.script {
                    script.push(brick.clone().into_brick());
                }
                SpriteActor::new(sprite, script)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectFile {
        ProjectFile {
            name: "sample".to_string(),
            sprites: vec![SpriteDef {
                name: "scout".to_string(),
                start: Vec2::new(-10.0, 4.0),
                script: vec![
                    BrickDef::PlaceAt {
                        destination: IVec2::new(0, 0),
                    },
                    BrickDef::Wait { duration_ms: 100 },
                    BrickDef::GlideTo {
                        destination: IVec2::new(30, 40),
                        duration_ms: 1500,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let project = sample();
        let text = serde_json::to_string(&project).unwrap();
        let restored: ProjectFile = serde_json::from_str(&text).unwrap();
        assert_eq!(project, restored);
    }

    #[test]
    fn test_tagged_brick_decoding() {
        let text = r#"{
            "name": "tiny",
            "sprites": [{
                "name": "dot",
                "start": [0.0, 0.0],
                "script": [
                    { "type": "glide_to", "destination": [160, 90], "duration_ms": 2000 }
                ]
            }]
        }"#;
        let project: ProjectFile = serde_json::from_str(text).unwrap();
        assert_eq!(
            project.sprites[0].script[0],
            BrickDef::GlideTo {
                destination: IVec2::new(160, 90),
                duration_ms: 2000,
            }
        );
    }

    #[test]
    fn test_script_field_defaults_to_empty() {
        let text = r#"{ "name": "bare", "sprites": [{ "name": "idle", "start": [1.0, 2.0] }] }"#;
        let project: ProjectFile = serde_json::from_str(text).unwrap();
        assert!(project.sprites[0].script.is_empty());
    }

    #[test]
    fn test_instantiate_builds_actors_in_order() {
        let mut project = sample();
        project.sprites.push(SpriteDef {
            name: "cloud".to_string(),
            start: Vec2::ZERO,
            script: Vec::new(),
        });

        let mut ids = SpriteIdAllocator::new();
        let actors = project.instantiate(&mut ids);

        assert_eq!(actors.len(), 2);
        assert_eq!(actors[0].sprite().id().id(), 1);
        assert_eq!(actors[1].sprite().id().id(), 2);
        assert_eq!(actors[0].sprite().name(), "scout");
        assert_eq!(actors[0].sprite().position(), Vec2::new(-10.0, 4.0));

        let kinds: Vec<_> = actors[0].script().iter().map(|brick| brick.kind()).collect();
        assert_eq!(kinds, vec!["place_at", "wait", "glide_to"]);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let project = sample();
        let path = std::env::temp_dir().join(format!("blockstage-{}.json", std::process::id()));
        project.save(&path).unwrap();
        let restored = ProjectFile::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(project, restored);
    }
}
