//! Interaction domain — фокус игрока, interact запросы, связь FSM ↔ диалог
//!
//! Содержит:
//! - Interactable (Npc | DialogueTrigger)
//! - PlayerInteraction / InteractionFocus (на игроке)
//! - InteractRequest / InteractHintChanged
//! - gateway systems (interact → DialogueRequested, DialogueFinished → end_interaction)

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod focus;
pub mod gateway;

pub use components::*;
pub use events::*;
pub use focus::update_interaction_focus;
pub use gateway::{handle_dialogue_finished, handle_interact_requests};

use crate::SimulationSet;

/// Interaction Plugin
///
/// - handle_interact_requests — после решения FSM (Interact)
/// - handle_dialogue_finished → update_interaction_focus — после диалогов (Resolve)
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<InteractRequest>()
            .add_event::<InteractHintChanged>()
            .add_systems(
                FixedUpdate,
                (
                    handle_interact_requests.in_set(SimulationSet::Interact),
                    (handle_dialogue_finished, update_interaction_focus)
                        .chain()
                        .in_set(SimulationSet::Resolve),
                ),
            );
    }
}
