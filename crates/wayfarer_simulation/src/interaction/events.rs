//! Interaction events (player input ↔ gateway ↔ UI)

use bevy::prelude::*;

/// Игрок нажал "interact" на цели
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractRequest {
    pub interactor: Entity,
    pub target: Entity,
}

/// Подсказка сменилась (пишется только при изменении текста)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct InteractHintChanged {
    pub interactor: Entity,
    pub text: String,
}
