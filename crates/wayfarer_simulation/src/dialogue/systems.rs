//! Dialogue systems (start, advance, typewriter reveal)

use bevy::prelude::*;

use super::events::{DialogueAdvance, DialogueFinished, DialogueRequested, DialogueStarted};
use super::session::{ActiveDialogue, DialogueSession};

fn finished(active: ActiveDialogue) -> DialogueFinished {
    DialogueFinished {
        speaker: active.speaker,
        dialogue_id: active.dialogue_id,
    }
}

/// Система: DialogueRequested → новая сессия
///
/// Заменённый собеседник получает DialogueFinished (иначе его FSM застрянет в Interact).
/// Диалог без реплик закрывается в том же тике.
pub fn start_requested_dialogues(
    mut requests: EventReader<DialogueRequested>,
    mut session: ResMut<DialogueSession>,
    mut started_events: EventWriter<DialogueStarted>,
    mut finished_events: EventWriter<DialogueFinished>,
) {
    for request in requests.read() {
        if let Some(replaced) = session.begin(request.speaker, &request.dialogue) {
            crate::logger::log(&format!(
                "Dialogue: '{}' ({:?}) replaced by '{}' ({:?})",
                replaced.dialogue_id, replaced.speaker, request.dialogue.id, request.speaker
            ));
            finished_events.write(finished(replaced));
        }

        started_events.write(DialogueStarted {
            speaker: request.speaker,
            dialogue_id: request.dialogue.id.clone(),
            character_name: request.dialogue.character_name.clone(),
        });
        crate::logger::log_info(&format!(
            "Dialogue: {} started '{}'",
            request.dialogue.character_name, request.dialogue.id
        ));

        if !session.has_sentence() {
            if let Some(empty) = session.finish() {
                crate::logger::log(&format!("Dialogue: '{}' has no sentences", empty.dialogue_id));
                finished_events.write(finished(empty));
            }
        }
    }
}

/// Система: "continue" → следующая реплика или конец беседы
pub fn advance_dialogues(
    mut advances: EventReader<DialogueAdvance>,
    mut session: ResMut<DialogueSession>,
    mut finished_events: EventWriter<DialogueFinished>,
) {
    for _ in advances.read() {
        if !session.is_active() {
            continue;
        }

        if session.next_sentence() {
            continue;
        }

        if let Some(done) = session.finish() {
            crate::logger::log_info(&format!("Dialogue: '{}' finished", done.dialogue_id));
            finished_events.write(finished(done));
        }
    }
}

/// Система: typewriter (elapsed += dt)
pub fn tick_dialogue_reveal(mut session: ResMut<DialogueSession>, time: Res<Time<Fixed>>) {
    if session.is_active() {
        session.tick(time.delta_secs());
    }
}
