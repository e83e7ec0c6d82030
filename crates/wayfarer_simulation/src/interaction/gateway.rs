//! Interaction gateway systems
//!
//! InteractRequest → (Npc: AIBrain::interact | DialogueTrigger: сразу) → DialogueRequested
//! DialogueFinished → AIBrain::end_interaction

use bevy::prelude::*;

use super::components::Interactable;
use super::events::InteractRequest;
use crate::ai::systems::fsm::{log_transition, target_position};
use crate::ai::{AIBrain, AIConfig, Perception, TrackedTarget, Transition};
use crate::components::Npc;
use crate::dialogue::{Dialogue, DialogueFinished, DialogueRequested};
use crate::movement::{MovementCommand, NavigationAgent, NavigationState};

type GatewayNpc = (
    &'static Transform,
    &'static AIConfig,
    &'static mut AIBrain,
    &'static TrackedTarget,
    &'static mut MovementCommand,
    &'static mut NavigationState,
);

/// Система: обработка InteractRequest
///
/// Нельзя взаимодействовать → запрос молча игнорируется (debug лог).
/// NPC без Dialogue всё равно входит в Interact, но диалог не запрашивается.
pub fn handle_interact_requests(
    mut requests: EventReader<InteractRequest>,
    interactables: Query<(&Interactable, Option<&Dialogue>)>,
    mut npcs: Query<GatewayNpc, With<Npc>>,
    targets: Query<&Transform, Without<Npc>>,
    mut dialogue_requests: EventWriter<DialogueRequested>,
) {
    for request in requests.read() {
        let Ok((interactable, dialogue)) = interactables.get(request.target) else {
            crate::logger::log(&format!("Interact: {:?} is not interactable", request.target));
            continue;
        };

        match interactable {
            Interactable::Npc => {
                let Ok((transform, config, mut brain, tracked, command, nav_state)) =
                    npcs.get_mut(request.target)
                else {
                    crate::logger::log(&format!("Interact: {:?} has no behavior FSM", request.target));
                    continue;
                };

                let perception = Perception::new(transform.translation, target_position(tracked, &targets));
                let from = brain.state();
                let mut nav = NavigationAgent::new(command, nav_state);

                if !brain.interact(config, &perception, &mut nav) {
                    crate::logger::log(&format!(
                        "Interact: {:?} ignored (state {:?})",
                        request.target, from
                    ));
                    continue;
                }

                if let Some(to) = brain.state() {
                    log_transition(request.target, Transition { from, to }, &perception);
                }

                match dialogue {
                    Some(dialogue) => {
                        dialogue_requests.write(DialogueRequested {
                            speaker: request.target,
                            dialogue: dialogue.clone(),
                        });
                    }
                    None => crate::logger::log(&format!("Interact: {:?} has nothing to say", request.target)),
                }
            }
            Interactable::DialogueTrigger => match dialogue {
                Some(dialogue) => {
                    dialogue_requests.write(DialogueRequested {
                        speaker: request.target,
                        dialogue: dialogue.clone(),
                    });
                }
                None => crate::logger::log(&format!("Interact: trigger {:?} has no dialogue", request.target)),
            },
        }
    }
}

/// Система: DialogueFinished → end_interaction
///
/// Вызывается один раз на закрытую сессию. Speaker без FSM (DialogueTrigger) пропускаем.
pub fn handle_dialogue_finished(
    mut finished: EventReader<DialogueFinished>,
    mut npcs: Query<GatewayNpc, With<Npc>>,
    targets: Query<&Transform, Without<Npc>>,
) {
    for event in finished.read() {
        let Ok((transform, config, mut brain, tracked, command, nav_state)) = npcs.get_mut(event.speaker) else {
            continue;
        };

        let perception = Perception::new(transform.translation, target_position(tracked, &targets));
        let mut nav = NavigationAgent::new(command, nav_state);

        if let Some(transition) = brain.end_interaction(config, &perception, &mut nav) {
            log_transition(event.speaker, transition, &perception);
        }
    }
}
