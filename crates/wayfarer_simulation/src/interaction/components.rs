//! Interaction components

use bevy::prelude::*;

/// Что за объект, с которым можно взаимодействовать (tagged dispatch)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum Interactable {
    /// NPC: доступность решает behavior FSM (interaction gateway)
    #[default]
    Npc,
    /// Статичный trigger: всегда доступен, сразу открывает диалог
    DialogueTrigger,
}

/// Радиус, в котором игрок "видит" interactable (метры)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerInteraction {
    pub reach: f32,
}

impl Default for PlayerInteraction {
    fn default() -> Self {
        Self { reach: 2.0 }
    }
}

/// Текущий фокус игрока + подсказка для UI
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct InteractionFocus {
    pub focused: Option<Entity>,
    pub hint: String,
}
