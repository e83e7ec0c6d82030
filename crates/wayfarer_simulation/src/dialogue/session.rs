//! DialogueSession — единственная активная беседа
//!
//! Typewriter эффект — чистая функция от прошедшего времени,
//! UI читает `visible_text()` каждый кадр.

use std::collections::VecDeque;

use bevy::prelude::*;

use super::components::Dialogue;

/// Скорость печати (секунд на символ)
pub const SECONDS_PER_CHAR: f32 = 0.04;

/// Сколько символов реплики уже "напечатано"
pub fn revealed_chars(elapsed: f32, sentence_len: usize) -> usize {
    if elapsed <= 0.0 {
        return 0;
    }

    // epsilon: 0.12 / 0.04 не должно давать 2.9999
    let chars = (elapsed / SECONDS_PER_CHAR + 1e-4).floor() as usize;
    chars.min(sentence_len)
}

/// Открытая беседа
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDialogue {
    pub speaker: Entity,
    pub dialogue_id: String,
    pub character_name: String,
    queue: VecDeque<String>,
    current: Option<String>,
    elapsed: f32,
}

impl ActiveDialogue {
    fn new(speaker: Entity, dialogue: &Dialogue) -> Self {
        let mut queue: VecDeque<String> = dialogue.sentences.iter().cloned().collect();
        let current = queue.pop_front();

        Self {
            speaker,
            dialogue_id: dialogue.id.clone(),
            character_name: dialogue.character_name.clone(),
            queue,
            current,
            elapsed: 0.0,
        }
    }

    pub fn current_sentence(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Видимая часть текущей реплики
    pub fn visible_text(&self) -> &str {
        let Some(sentence) = self.current.as_deref() else {
            return "";
        };

        let count = revealed_chars(self.elapsed, sentence.chars().count());
        match sentence.char_indices().nth(count) {
            Some((byte_index, _)) => &sentence[..byte_index],
            None => sentence,
        }
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.current
            .as_deref()
            .is_none_or(|sentence| revealed_chars(self.elapsed, sentence.chars().count()) == sentence.chars().count())
    }

    fn next_sentence(&mut self) -> bool {
        self.current = self.queue.pop_front();
        self.elapsed = 0.0;
        self.current.is_some()
    }
}

/// Resource: максимум одна активная беседа
#[derive(Resource, Debug, Default)]
pub struct DialogueSession {
    active: Option<ActiveDialogue>,
}

impl DialogueSession {
    pub fn active(&self) -> Option<&ActiveDialogue> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn speaker(&self) -> Option<Entity> {
        self.active.as_ref().map(|active| active.speaker)
    }

    /// Открыть беседу. Возвращает заменённую сессию (если была).
    pub fn begin(&mut self, speaker: Entity, dialogue: &Dialogue) -> Option<ActiveDialogue> {
        self.active.replace(ActiveDialogue::new(speaker, dialogue))
    }

    /// Есть ли что показывать (пустой диалог закрывается сразу)
    pub fn has_sentence(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.current.is_some())
    }

    /// Следующая реплика. false — реплик больше нет (или сессии нет).
    pub fn next_sentence(&mut self) -> bool {
        self.active
            .as_mut()
            .is_some_and(|active| active.next_sentence())
    }

    pub fn finish(&mut self) -> Option<ActiveDialogue> {
        self.active.take()
    }

    pub fn tick(&mut self, delta: f32) {
        if let Some(active) = self.active.as_mut() {
            active.elapsed += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> Dialogue {
        Dialogue::new(
            "greeting",
            "Mira",
            vec!["Hello.".to_string(), "Safe travels.".to_string()],
        )
    }

    #[test]
    fn test_revealed_chars_timing() {
        assert_eq!(revealed_chars(0.0, 10), 0);
        assert_eq!(revealed_chars(0.039, 10), 0);
        assert_eq!(revealed_chars(0.04, 10), 1);
        assert_eq!(revealed_chars(0.12, 10), 3);
        assert_eq!(revealed_chars(100.0, 10), 10);
    }

    #[test]
    fn test_visible_text_grows_with_time() {
        let mut session = DialogueSession::default();
        session.begin(Entity::from_raw(1), &greeting());

        assert_eq!(session.active().map(|a| a.visible_text()), Some(""));

        session.tick(0.1);
        assert_eq!(session.active().map(|a| a.visible_text()), Some("He"));

        session.tick(1.0);
        let active = session.active().expect("active session");
        assert_eq!(active.visible_text(), "Hello.");
        assert!(active.is_fully_revealed());
    }

    #[test]
    fn test_visible_text_multibyte() {
        let mut session = DialogueSession::default();
        session.begin(
            Entity::from_raw(1),
            &Dialogue::new("ru", "Мира", vec!["Привет".to_string()]),
        );

        session.tick(0.1);
        assert_eq!(session.active().map(|a| a.visible_text()), Some("Пр"));
    }

    #[test]
    fn test_next_sentence_restarts_reveal() {
        let mut session = DialogueSession::default();
        session.begin(Entity::from_raw(1), &greeting());
        session.tick(1.0);

        assert!(session.next_sentence());
        let active = session.active().expect("active session");
        assert_eq!(active.current_sentence(), Some("Safe travels."));
        assert_eq!(active.visible_text(), "");
        assert_eq!(active.remaining(), 0);

        assert!(!session.next_sentence());
    }

    #[test]
    fn test_begin_replaces_previous() {
        let mut session = DialogueSession::default();
        let first = Entity::from_raw(1);
        let second = Entity::from_raw(2);

        assert!(session.begin(first, &greeting()).is_none());
        let replaced = session.begin(second, &greeting()).expect("replaced session");

        assert_eq!(replaced.speaker, first);
        assert_eq!(session.speaker(), Some(second));
    }

    #[test]
    fn test_empty_dialogue_has_no_sentence() {
        let mut session = DialogueSession::default();
        session.begin(Entity::from_raw(1), &Dialogue::new("empty", "Nobody", Vec::new()));

        assert!(session.is_active());
        assert!(!session.has_sentence());
    }
}
