//! Dialogue domain — беседы NPC с игроком
//!
//! Содержит:
//! - Dialogue (реплики, задаются при spawn)
//! - DialogueSession (resource: одна активная беседа + typewriter)
//! - события Requested / Advance / Started / Finished

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod session;
pub mod systems;

pub use components::Dialogue;
pub use events::*;
pub use session::{revealed_chars, ActiveDialogue, DialogueSession, SECONDS_PER_CHAR};
pub use systems::{advance_dialogues, start_requested_dialogues, tick_dialogue_reveal};

use crate::SimulationSet;

/// Dialogue Plugin
///
/// Порядок внутри тика: start → advance → reveal (chain).
/// DialogueFinished обрабатывает interaction (SimulationSet::Resolve).
pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogueSession>()
            .add_event::<DialogueRequested>()
            .add_event::<DialogueAdvance>()
            .add_event::<DialogueStarted>()
            .add_event::<DialogueFinished>()
            .add_systems(
                FixedUpdate,
                (start_requested_dialogues, advance_dialogues, tick_dialogue_reveal)
                    .chain()
                    .in_set(SimulationSet::Dialogue),
            );
    }
}
