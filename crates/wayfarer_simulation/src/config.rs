//! NPC profiles — AI параметры, маршрут патруля и диалог из RON
//!
//! ```ron
//! [
//!     (
//!         name: "Guard",
//!         config: (kind: Hostile, awareness_range: 8.0, interaction_range: 2.0),
//!         patrol_route: [(0.0, 0.0, 0.0), (6.0, 0.0, 0.0)],
//!     ),
//! ]
//! ```
//!
//! Всё, что не прошло валидацию, возвращается как `ConfigError` (без panic).

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::{AIConfig, PatrolRoute};
use crate::components::Npc;
use crate::dialogue::Dialogue;
use crate::movement::MovementSpeed;

/// Ошибки загрузки NPC профилей
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("{profile}: {field} must be non-negative (got {value})")]
    NegativeValue {
        profile: String,
        field: &'static str,
        value: f32,
    },
    #[error("{profile}: interaction range {interaction} exceeds awareness range {awareness}")]
    InteractionExceedsAwareness {
        profile: String,
        interaction: f32,
        awareness: f32,
    },
    #[error("{profile}: rotation speed must be positive (got {value})")]
    NonPositiveRotationSpeed { profile: String, value: f32 },
    #[error("{profile}: movement speed must be positive (got {value})")]
    NonPositiveMoveSpeed { profile: String, value: f32 },
    #[error("{profile}: dialogue '{dialogue}' has no sentences")]
    EmptyDialogue { profile: String, dialogue: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl AIConfig {
    /// Проверка радиусов и скоростей (`profile` — для текста ошибки)
    pub fn validate(&self, profile: &str) -> ConfigResult<()> {
        let non_negative = [
            ("awareness_range", self.awareness_range),
            ("interaction_range", self.interaction_range),
            ("wait_time_at_point", self.wait_time_at_point),
        ];

        // NaN тоже отбрасываем
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeValue {
                    profile: profile.to_string(),
                    field,
                    value,
                });
            }
        }

        if self.interaction_range > self.awareness_range {
            return Err(ConfigError::InteractionExceedsAwareness {
                profile: profile.to_string(),
                interaction: self.interaction_range,
                awareness: self.awareness_range,
            });
        }

        if self.rotation_speed.is_nan() || self.rotation_speed <= 0.0 {
            return Err(ConfigError::NonPositiveRotationSpeed {
                profile: profile.to_string(),
                value: self.rotation_speed,
            });
        }

        Ok(())
    }
}

fn default_move_speed() -> f32 {
    MovementSpeed::default().speed
}

/// Описание NPC для spawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcProfile {
    pub name: String,
    #[serde(default)]
    pub config: AIConfig,
    #[serde(default)]
    pub patrol_route: Vec<[f32; 3]>,
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    #[serde(default)]
    pub dialogue: Option<Dialogue>,
}

impl NpcProfile {
    pub fn new(name: impl Into<String>, config: AIConfig) -> Self {
        Self {
            name: name.into(),
            config,
            patrol_route: Vec::new(),
            move_speed: default_move_speed(),
            dialogue: None,
        }
    }

    pub fn with_route(mut self, waypoints: &[Vec3]) -> Self {
        self.patrol_route = waypoints.iter().map(|point| point.to_array()).collect();
        self
    }

    pub fn with_dialogue(mut self, dialogue: Dialogue) -> Self {
        self.dialogue = Some(dialogue);
        self
    }

    /// Один профиль из RON строки (с валидацией)
    pub fn from_ron_str(content: &str) -> ConfigResult<Self> {
        let profile: NpcProfile = ron::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.config.validate(&self.name)?;

        if self.move_speed.is_nan() || self.move_speed <= 0.0 {
            return Err(ConfigError::NonPositiveMoveSpeed {
                profile: self.name.clone(),
                value: self.move_speed,
            });
        }

        if let Some(dialogue) = &self.dialogue {
            if dialogue.sentences.is_empty() {
                return Err(ConfigError::EmptyDialogue {
                    profile: self.name.clone(),
                    dialogue: dialogue.id.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn route(&self) -> PatrolRoute {
        PatrolRoute::new(self.patrol_route.iter().copied().map(Vec3::from_array).collect())
    }

    /// Компоненты NPC (без Dialogue: он опциональный)
    pub fn bundle(&self, position: Vec3) -> impl Bundle {
        (
            Npc,
            Transform::from_translation(position),
            self.config.clone(),
            self.route(),
            MovementSpeed { speed: self.move_speed },
        )
    }

    /// Spawn напрямую в World (тесты, headless runner)
    pub fn spawn_in(&self, world: &mut World, position: Vec3) -> Entity {
        let mut entity = world.spawn(self.bundle(position));
        if let Some(dialogue) = &self.dialogue {
            entity.insert(dialogue.clone());
        }
        entity.id()
    }
}

/// Spawn NPC через Commands
pub fn spawn_npc(commands: &mut Commands, profile: &NpcProfile, position: Vec3) -> Entity {
    let mut entity = commands.spawn(profile.bundle(position));
    if let Some(dialogue) = &profile.dialogue {
        entity.insert(dialogue.clone());
    }
    entity.id()
}

/// Список профилей из RON строки
pub fn profiles_from_ron_str(content: &str) -> ConfigResult<Vec<NpcProfile>> {
    let profiles: Vec<NpcProfile> = ron::from_str(content)?;
    for profile in &profiles {
        profile.validate()?;
    }
    Ok(profiles)
}

/// Список профилей из RON файла
pub fn load_profiles(path: &Path) -> ConfigResult<Vec<NpcProfile>> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let profiles = profiles_from_ron_str(&content)?;
    crate::logger::log_info(&format!("Config: loaded {} NPC profiles from {}", profiles.len(), path.display()));
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::NpcKind;

    const GUARD: &str = r#"(
        name: "Guard",
        config: (kind: Hostile, awareness_range: 8.0, interaction_range: 2.0),
        patrol_route: [(0.0, 0.0, 0.0), (6.0, 0.0, 0.0)],
    )"#;

    #[test]
    fn test_profile_from_ron_fills_defaults() {
        let profile = NpcProfile::from_ron_str(GUARD).expect("valid profile");

        assert_eq!(profile.name, "Guard");
        assert_eq!(profile.config.kind, NpcKind::Hostile);
        assert_eq!(profile.config.awareness_range, 8.0);
        assert_eq!(profile.config.rotation_speed, AIConfig::default().rotation_speed);
        assert_eq!(profile.config.wait_time_at_point, AIConfig::default().wait_time_at_point);
        assert_eq!(profile.move_speed, MovementSpeed::default().speed);
        assert_eq!(profile.route().len(), 2);
        assert!(profile.dialogue.is_none());
    }

    #[test]
    fn test_profile_with_dialogue() {
        let profile = NpcProfile::from_ron_str(
            r#"(
                name: "Mira",
                dialogue: Some((id: "greeting", character_name: "Mira", sentences: ["Hello."])),
            )"#,
        )
        .expect("valid profile");

        assert_eq!(profile.config.kind, NpcKind::Friendly);
        let dialogue = profile.dialogue.expect("dialogue");
        assert_eq!(dialogue.sentences, vec!["Hello.".to_string()]);
    }

    #[test]
    fn test_parse_error() {
        let result = NpcProfile::from_ron_str("(name: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_negative_range_rejected() {
        let config = AIConfig::default().with_ranges(-1.0, 0.0);
        let result = config.validate("Broken");

        assert!(matches!(
            result,
            Err(ConfigError::NegativeValue { field: "awareness_range", .. })
        ));
    }

    #[test]
    fn test_interaction_larger_than_awareness_rejected() {
        let config = AIConfig::default().with_ranges(2.0, 3.0);
        assert!(matches!(
            config.validate("Broken"),
            Err(ConfigError::InteractionExceedsAwareness { .. })
        ));
    }

    #[test]
    fn test_rotation_speed_must_be_positive() {
        let config = AIConfig {
            rotation_speed: 0.0,
            ..AIConfig::default()
        };
        assert!(matches!(
            config.validate("Broken"),
            Err(ConfigError::NonPositiveRotationSpeed { .. })
        ));
    }

    #[test]
    fn test_negative_wait_rejected() {
        let config = AIConfig {
            wait_time_at_point: -0.5,
            ..AIConfig::default()
        };
        assert!(matches!(
            config.validate("Broken"),
            Err(ConfigError::NegativeValue { field: "wait_time_at_point", .. })
        ));
    }

    #[test]
    fn test_empty_dialogue_rejected() {
        let profile = NpcProfile::new("Mute", AIConfig::default())
            .with_dialogue(Dialogue::new("silence", "Mute", Vec::new()));

        let error = profile.validate().expect_err("empty dialogue must be rejected");
        assert_eq!(error.to_string(), "Mute: dialogue 'silence' has no sentences");
    }

    #[test]
    fn test_profiles_list_stops_at_first_invalid() {
        let content = r#"[
            (name: "Ok"),
            (name: "Bad", config: (awareness_range: 1.0, interaction_range: 2.0)),
        ]"#;

        assert!(matches!(
            profiles_from_ron_str(content),
            Err(ConfigError::InteractionExceedsAwareness { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_profiles(Path::new("/definitely/not/here.ron"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_spawn_in_world_builds_npc() {
        let profile = NpcProfile::new("Mira", AIConfig::default())
            .with_route(&[Vec3::ZERO, Vec3::X])
            .with_dialogue(Dialogue::new("greeting", "Mira", vec!["Hello.".to_string()]));

        let mut world = World::new();
        let entity = profile.spawn_in(&mut world, Vec3::new(1.0, 0.0, 2.0));

        let transform = world.get::<Transform>(entity).expect("transform");
        assert_eq!(transform.translation, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(world.get::<PatrolRoute>(entity).map(|r| r.len()), Some(2));
        assert!(world.get::<Dialogue>(entity).is_some());
        // Required Components
        assert!(world.get::<crate::ai::AIBrain>(entity).is_some());
        assert!(world.get::<crate::movement::NavigationState>(entity).is_some());
    }

    #[test]
    fn test_spawn_npc_via_commands() {
        let profile = NpcProfile::new("Guard", AIConfig::hostile())
            .with_dialogue(Dialogue::new("warning", "Guard", vec!["Halt.".to_string()]));

        let mut world = World::new();
        let entity = {
            let mut commands = world.commands();
            spawn_npc(&mut commands, &profile, Vec3::new(0.0, 0.0, 5.0))
        };
        world.flush();

        assert_eq!(
            world.get::<Transform>(entity).map(|t| t.translation),
            Some(Vec3::new(0.0, 0.0, 5.0))
        );
        assert_eq!(world.get::<AIConfig>(entity).map(|c| c.kind), Some(NpcKind::Hostile));
        assert_eq!(world.get::<Dialogue>(entity).map(|d| d.id.as_str()), Some("warning"));
        assert!(world.get::<Npc>(entity).is_some());
        assert!(world.get::<crate::ai::AIBrain>(entity).is_some());
    }
}
