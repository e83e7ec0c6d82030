//! Dialogue events
//!
//! Gateway → Dialogue: DialogueRequested
//! Player input → Dialogue: DialogueAdvance
//! Dialogue → AI / UI: DialogueStarted, DialogueFinished

use bevy::prelude::*;

use super::components::Dialogue;

/// Запрос на показ диалога (NPC вошёл в Interact или игрок активировал trigger)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DialogueRequested {
    pub speaker: Entity,
    pub dialogue: Dialogue,
}

/// Игрок нажал "continue"
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DialogueAdvance;

/// Сессия открыта (UI показывает окно)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DialogueStarted {
    pub speaker: Entity,
    pub dialogue_id: String,
    pub character_name: String,
}

/// Сессия закрыта: последняя реплика пройдена или сессию заменили
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DialogueFinished {
    pub speaker: Entity,
    pub dialogue_id: String,
}
