//! Navigation adapter — узкий интерфейс FSM к navmesh agent'у
//!
//! FSM не знает про pathfinding: только "иди в точку", "преследуй точку",
//! "стоп/продолжить" и "дошёл ли". ECS реализация пишет `MovementCommand`
//! и читает `NavigationState`, tactical layer делает остальное.

use bevy::prelude::*;

use super::components::{MovementCommand, NavigationState};

/// Возможности навигации, которые потребляет FSM
pub trait NavigationAdapter {
    /// Статичная цель (patrol waypoint). Сбрасывает флаг прибытия.
    fn move_to(&mut self, point: Vec3);

    /// Динамическая цель (погоня). Вызывается каждый тик с новой позицией.
    fn pursue(&mut self, point: Vec3);

    /// Остановиться, сохранив destination
    fn stop_movement(&mut self);

    /// Продолжить движение к текущему destination
    fn resume_movement(&mut self);

    /// Дошли до статичной цели
    fn has_arrived(&self) -> bool;

    fn is_moving(&self) -> bool;
}

/// ECS реализация поверх `MovementCommand` + `NavigationState`
///
/// `move_to` — разовый приказ: пишется всегда, даже в ту же точку
/// (tactical layer перестраивает путь по `Changed<MovementCommand>`).
/// `pursue` и stop/resume идут через `set_if_neq`-проверки.
pub struct NavigationAgent<'a> {
    command: Mut<'a, MovementCommand>,
    state: Mut<'a, NavigationState>,
}

impl<'a> NavigationAgent<'a> {
    pub fn new(command: Mut<'a, MovementCommand>, state: Mut<'a, NavigationState>) -> Self {
        Self { command, state }
    }

    pub fn command(&self) -> MovementCommand {
        *self.command
    }
}

impl NavigationAdapter for NavigationAgent<'_> {
    fn move_to(&mut self, point: Vec3) {
        *self.command = MovementCommand::MoveToPosition { target: point };
        if self.state.is_target_reached {
            self.state.is_target_reached = false;
        }
    }

    fn pursue(&mut self, point: Vec3) {
        self.command.set_if_neq(MovementCommand::FollowTarget { target: point });
    }

    fn stop_movement(&mut self) {
        if !self.state.is_stopped {
            self.state.is_stopped = true;
        }
    }

    fn resume_movement(&mut self) {
        if self.state.is_stopped {
            self.state.is_stopped = false;
        }
    }

    fn has_arrived(&self) -> bool {
        self.command.is_static() && self.state.is_target_reached
    }

    fn is_moving(&self) -> bool {
        !self.state.is_stopped
            && self.command.destination().is_some()
            && !(self.command.is_static() && self.state.is_target_reached)
    }
}
