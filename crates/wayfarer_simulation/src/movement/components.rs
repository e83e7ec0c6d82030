//! Movement компоненты: команды перемещения, состояние навигации, скорость

use bevy::prelude::*;

/// Команда движения для актора (выполняется tactical layer: navmesh agent)
///
/// Архитектура:
/// - ECS пишет MovementCommand (high-level intent)
/// - Tactical layer читает `Changed<MovementCommand>` и строит путь
/// - Повторная команда неявно отменяет предыдущую (нет cancel-and-wait)
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub enum MovementCommand {
    /// Нет цели
    #[default]
    Idle,
    /// Двигаться к статичной точке (patrol waypoint), выдаётся ОДИН раз
    MoveToPosition { target: Vec3 },
    /// Преследование: позиция цели переписывается каждый тик
    FollowTarget { target: Vec3 },
}

impl MovementCommand {
    /// Текущая точка назначения (если есть)
    pub fn destination(&self) -> Option<Vec3> {
        match self {
            MovementCommand::Idle => None,
            MovementCommand::MoveToPosition { target } | MovementCommand::FollowTarget { target } => {
                Some(*target)
            }
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, MovementCommand::MoveToPosition { .. })
    }
}

/// Состояние навигации актора
///
/// `is_stopped` пишет ECS (state entry: halt/resume), destination при этом сохраняется.
/// `is_target_reached` и `velocity` пишет tactical layer через `NavigationEvent`.
///
/// Логика сброса `is_target_reached`:
/// - MoveToPosition: всегда сбрасывать при новой команде
/// - FollowTarget: не трогать (arrival для преследования не используется)
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationState {
    pub is_stopped: bool,
    pub is_target_reached: bool,
    /// Последняя скорость от tactical layer (м/с)
    pub velocity: Vec3,
}

/// Максимальная скорость движения актора (м/с)
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 3.5 } // базовая скорость navmesh agent'а
    }
}

/// Animation sink: нормализованный параметр скорости для locomotion blend
///
/// Аниматор (tactical layer) читает `speed` ∈ [0, 1].
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct LocomotionAnimation {
    pub speed: f32,
    /// Время сглаживания (секунды)
    pub damp_time: f32,
}

impl Default for LocomotionAnimation {
    fn default() -> Self {
        Self {
            speed: 0.0,
            damp_time: 0.1,
        }
    }
}
