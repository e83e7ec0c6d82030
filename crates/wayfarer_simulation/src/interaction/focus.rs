//! Interaction focus — ближайший interactable в reach игрока + подсказка

use bevy::prelude::*;

use super::components::{Interactable, InteractionFocus, PlayerInteraction};
use super::events::InteractHintChanged;
use crate::ai::systems::fsm::target_position;
use crate::ai::{AIBrain, AIConfig, Perception, TrackedTarget};
use crate::components::{Npc, Player};
use crate::dialogue::Dialogue;

/// Подсказка для DialogueTrigger
pub fn trigger_prompt(dialogue: Option<&Dialogue>) -> String {
    dialogue
        .map(|dialogue| format!("Talk to {}", dialogue.character_name))
        .unwrap_or_default()
}

/// Система: обновление фокуса и подсказки
///
/// InteractHintChanged пишется только при смене текста (UI не перерисовывает каждый тик).
/// Despawned entity просто не попадает в выборку — фокус сбрасывается сам.
pub fn update_interaction_focus(
    mut players: Query<(Entity, &Transform, &PlayerInteraction, &mut InteractionFocus), With<Player>>,
    interactables: Query<(Entity, &Transform, &Interactable, Option<&Dialogue>), Without<Player>>,
    npcs: Query<(&AIConfig, &AIBrain, &TrackedTarget), With<Npc>>,
    targets: Query<&Transform, Without<Npc>>,
    mut hints: EventWriter<InteractHintChanged>,
) {
    for (player, player_transform, interaction, mut focus) in players.iter_mut() {
        let origin = player_transform.translation;

        let nearest = interactables
            .iter()
            .map(|(entity, transform, interactable, dialogue)| {
                (entity, transform, interactable, dialogue, origin.distance(transform.translation))
            })
            .filter(|(.., distance)| *distance <= interaction.reach)
            .min_by(|a, b| a.4.total_cmp(&b.4));

        let (focused, hint) = match nearest {
            Some((entity, transform, Interactable::Npc, _, _)) => {
                let hint = npcs
                    .get(entity)
                    .map(|(config, brain, tracked)| {
                        let perception = Perception::new(transform.translation, target_position(tracked, &targets));
                        brain.interact_text(config, &perception).to_string()
                    })
                    .unwrap_or_default();
                (Some(entity), hint)
            }
            Some((entity, _, Interactable::DialogueTrigger, dialogue, _)) => (Some(entity), trigger_prompt(dialogue)),
            None => (None, String::new()),
        };

        if focus.focused != focused {
            focus.focused = focused;
        }

        if focus.hint != hint {
            focus.hint = hint.clone();
            hints.write(InteractHintChanged { interactor: player, text: hint });
        }
    }
}
