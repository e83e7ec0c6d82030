//! FSM AI components (state, actor kind, config, brain, tracked target).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// AI FSM состояния
///
/// Терминального состояния нет: FSM работает всё время жизни NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum AIState {
    /// Idle — стоим на месте, ждём перед следующей patrol точкой
    Idle,
    /// Patrol — идём к текущему waypoint (команда выдана один раз)
    Patrol,
    /// Chase — преследуем цель (команда обновляется каждый тик)
    Chase,
    /// Alert — заметили цель, стоим и смотрим на неё, готовы к диалогу
    Alert,
    /// Interact — в диалоге с игроком
    Interact,
}

impl AIState {
    pub const ALL: [AIState; 5] = [
        AIState::Idle,
        AIState::Patrol,
        AIState::Chase,
        AIState::Alert,
        AIState::Interact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AIState::Idle => "Idle",
            AIState::Patrol => "Patrol",
            AIState::Chase => "Chase",
            AIState::Alert => "Alert",
            AIState::Interact => "Interact",
        }
    }
}

/// Policy selector: дружелюбный наблюдает, враждебный преследует
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum NpcKind {
    /// Останавливается и ждёт, никогда не преследует
    #[default]
    Friendly,
    /// Активно преследует игрока
    Hostile,
}

impl NpcKind {
    pub fn is_hostile(self) -> bool {
        matches!(self, NpcKind::Hostile)
    }

    /// Реакция на цель в awareness range (из Idle/Patrol)
    pub fn engage_state(self) -> AIState {
        match self {
            NpcKind::Friendly => AIState::Alert,
            NpcKind::Hostile => AIState::Chase,
        }
    }
}

/// Параметры AI (immutable после spawn)
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct AIConfig {
    pub kind: NpcKind,
    /// Радиус обнаружения цели (метры)
    pub awareness_range: f32,
    /// Радиус, в котором можно начать диалог (метры)
    pub interaction_range: f32,
    /// Скорость поворота (доля slerp в секунду)
    pub rotation_speed: f32,
    /// Ожидание на patrol точке (секунды)
    pub wait_time_at_point: f32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            kind: NpcKind::Friendly,
            awareness_range: 5.0,
            interaction_range: 2.5,
            rotation_speed: 5.0,
            wait_time_at_point: 3.0,
        }
    }
}

impl AIConfig {
    pub fn hostile() -> Self {
        Self {
            kind: NpcKind::Hostile,
            ..Self::default()
        }
    }

    pub fn with_ranges(mut self, awareness_range: f32, interaction_range: f32) -> Self {
        self.awareness_range = awareness_range;
        self.interaction_range = interaction_range;
        self
    }
}

/// Состояние FSM конкретного NPC
///
/// `state == None` до первого тика: вход в Idle делается явно
/// (`AIBrain::tick`), а не случайным default значением.
/// Менять state можно ТОЛЬКО через `AIBrain::change_state`.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AIBrain {
    pub(crate) state: Option<AIState>,
    /// Время с момента входа в текущее состояние (используется в Idle)
    pub(crate) wait_timer: f32,
}

impl AIBrain {
    pub fn state(&self) -> Option<AIState> {
        self.state
    }

    pub fn is_in(&self, state: AIState) -> bool {
        self.state == Some(state)
    }

    pub fn wait_timer(&self) -> f32 {
        self.wait_timer
    }
}

/// Weak reference на отслеживаемую цель (обычно игрок)
///
/// Только lookup по Entity: если цель despawned — lookup не находит её
/// и все range проверки возвращают false.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct TrackedTarget {
    pub entity: Option<Entity>,
}
