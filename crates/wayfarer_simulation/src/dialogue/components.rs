//! Dialogue data (задаётся при spawn, из RON профиля)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Реплики персонажа
///
/// Один и тот же компонент используют NPC (через gateway) и DialogueTrigger.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Dialogue {
    pub id: String,
    pub character_name: String,
    pub sentences: Vec<String>,
}

impl Dialogue {
    pub fn new(id: impl Into<String>, character_name: impl Into<String>, sentences: Vec<String>) -> Self {
        Self {
            id: id.into(),
            character_name: character_name.into(),
            sentences,
        }
    }
}
