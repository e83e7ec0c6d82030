//! Behavior FSM — логика переходов NPC
//!
//! Idle ⇄ Patrol, (Idle|Patrol) → Alert/Chase, Chase ⇄ Alert, Alert → Interact → ...
//!
//! Логика чистая (без ECS Query): всё, что нужно на тик, приходит в `BehaviorContext`.
//! ECS обвязка — `ai::systems::fsm`.
//!
//! Инварианты:
//! - state меняется только через `change_state` (сброс таймера + entry эффект ровно один раз)
//! - переход в то же состояние — no-op
//! - не больше одного перехода за тик

use bevy::prelude::*;

use super::components::{AIBrain, AIConfig, AIState};
use super::orientation::orient_toward;
use super::patrol::PatrolRoute;
use super::perception::Perception;
use crate::movement::NavigationAdapter;

/// Подсказка для игрока, когда NPC готов к диалогу
pub const INTERACT_PROMPT: &str = "Talk";

/// Переход FSM (для логов и тестов)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// None — bootstrap (первый тик)
    pub from: Option<AIState>,
    pub to: AIState,
}

/// Всё, что FSM читает/пишет за один тик
pub struct BehaviorContext<'a, N: NavigationAdapter + ?Sized> {
    pub config: &'a AIConfig,
    pub perception: Perception,
    pub route: &'a mut PatrolRoute,
    pub nav: &'a mut N,
    /// Текущий поворот NPC (Alert/Interact поворачивают к цели)
    pub rotation: &'a mut Quat,
}

impl AIBrain {
    /// Единственная точка смены состояния
    ///
    /// Сбрасывает wait_timer и применяет entry эффект навигации.
    /// Возвращает false, если NPC уже в `next` (ничего не делаем).
    pub fn change_state<N: NavigationAdapter + ?Sized>(
        &mut self,
        next: AIState,
        nav: &mut N,
        target: Option<Vec3>,
    ) -> bool {
        if self.state == Some(next) {
            return false;
        }

        self.state = Some(next);
        self.wait_timer = 0.0;

        match next {
            AIState::Idle | AIState::Alert | AIState::Interact => nav.stop_movement(),
            // Маршрут уже выдан в Idle (exit action)
            AIState::Patrol => nav.resume_movement(),
            AIState::Chase => {
                nav.resume_movement();
                // Сразу начинаем преследование, дальше update_chase обновляет каждый тик
                if let Some(target) = target {
                    nav.pursue(target);
                }
            }
        }

        true
    }

    /// Один тик FSM
    ///
    /// Первый тик только входит в Idle (bootstrap). Дальше — update rule текущего состояния.
    pub fn tick<N: NavigationAdapter + ?Sized>(
        &mut self,
        ctx: &mut BehaviorContext<'_, N>,
        delta: f32,
    ) -> Option<Transition> {
        let Some(current) = self.state else {
            self.change_state(AIState::Idle, ctx.nav, ctx.perception.target);
            return Some(Transition { from: None, to: AIState::Idle });
        };

        let next = match current {
            AIState::Idle => self.update_idle(ctx, delta),
            AIState::Patrol => update_patrol(ctx),
            AIState::Chase => update_chase(ctx),
            AIState::Alert => update_alert(ctx, delta),
            AIState::Interact => update_interact(ctx, delta),
        }?;

        self.transition(next, ctx.nav, ctx.perception.target)
    }

    fn transition<N: NavigationAdapter + ?Sized>(
        &mut self,
        next: AIState,
        nav: &mut N,
        target: Option<Vec3>,
    ) -> Option<Transition> {
        let from = self.state;
        self.change_state(next, nav, target)
            .then_some(Transition { from, to: next })
    }

    fn update_idle<N: NavigationAdapter + ?Sized>(
        &mut self,
        ctx: &mut BehaviorContext<'_, N>,
        delta: f32,
    ) -> Option<AIState> {
        if ctx.perception.in_range(ctx.config.awareness_range) {
            return Some(ctx.config.kind.engage_state());
        }

        self.wait_timer += delta;
        if self.wait_timer < ctx.config.wait_time_at_point {
            return None;
        }

        // Пустой маршрут: остаёмся в Idle навсегда
        let point = ctx.route.advance()?;
        ctx.nav.move_to(point);
        Some(AIState::Patrol)
    }

    // ========================================================================
    // Interaction gateway
    // ========================================================================

    /// Alert + цель в interaction range
    pub fn can_interact(&self, config: &AIConfig, perception: &Perception) -> bool {
        self.state == Some(AIState::Alert) && perception.in_range(config.interaction_range)
    }

    /// Начать взаимодействие
    ///
    /// Если нельзя — молча игнорируем (permissive UI), возвращаем false.
    /// true означает: NPC вошёл в Interact, вызывающий передаёт запрос диалогу.
    pub fn interact<N: NavigationAdapter + ?Sized>(
        &mut self,
        config: &AIConfig,
        perception: &Perception,
        nav: &mut N,
    ) -> bool {
        if !self.can_interact(config, perception) {
            return false;
        }

        self.change_state(AIState::Interact, nav, perception.target)
    }

    /// Текст подсказки (пустой, если взаимодействие невозможно). Без side effects.
    pub fn interact_text(&self, config: &AIConfig, perception: &Perception) -> &'static str {
        if self.can_interact(config, perception) {
            INTERACT_PROMPT
        } else {
            ""
        }
    }

    /// Диалог закончился — решаем, что делать дальше
    ///
    /// 1. Игрок рядом → Alert
    /// 2. Игрок в зоне видимости → Chase (Hostile) / Alert (Friendly)
    /// 3. Игрок ушёл → Idle
    pub fn end_interaction<N: NavigationAdapter + ?Sized>(
        &mut self,
        config: &AIConfig,
        perception: &Perception,
        nav: &mut N,
    ) -> Option<Transition> {
        let next = if perception.in_range(config.interaction_range) {
            AIState::Alert
        } else if perception.in_range(config.awareness_range) {
            if config.kind.is_hostile() {
                AIState::Chase
            } else {
                AIState::Alert
            }
        } else {
            AIState::Idle
        };

        self.transition(next, nav, perception.target)
    }
}

fn update_patrol<N: NavigationAdapter + ?Sized>(ctx: &mut BehaviorContext<'_, N>) -> Option<AIState> {
    if ctx.perception.in_range(ctx.config.awareness_range) {
        // Прерываем патруль: entry эффект Alert/Chase перепишет текущее движение
        return Some(ctx.config.kind.engage_state());
    }

    ctx.nav.has_arrived().then_some(AIState::Idle)
}

fn update_chase<N: NavigationAdapter + ?Sized>(ctx: &mut BehaviorContext<'_, N>) -> Option<AIState> {
    if !ctx.perception.in_range(ctx.config.awareness_range) {
        return Some(AIState::Idle);
    }

    // Цель двигается — обновляем каждый тик (в отличие от Patrol)
    if let Some(target) = ctx.perception.target {
        ctx.nav.pursue(target);
    }

    ctx.perception
        .in_range(ctx.config.interaction_range)
        .then_some(AIState::Alert)
}

fn update_alert<N: NavigationAdapter + ?Sized>(
    ctx: &mut BehaviorContext<'_, N>,
    delta: f32,
) -> Option<AIState> {
    face_target(ctx, delta);

    if !ctx.perception.in_range(ctx.config.awareness_range) {
        return Some(AIState::Idle);
    }

    // Friendly остаётся в Alert и наблюдает
    let escaped = !ctx.perception.in_range(ctx.config.interaction_range);
    (escaped && ctx.config.kind.is_hostile()).then_some(AIState::Chase)
}

fn update_interact<N: NavigationAdapter + ?Sized>(
    ctx: &mut BehaviorContext<'_, N>,
    delta: f32,
) -> Option<AIState> {
    face_target(ctx, delta);

    if ctx.perception.in_range(ctx.config.interaction_range) {
        return None;
    }

    // Игрок убежал посреди диалога
    if ctx.config.kind.is_hostile() && ctx.perception.in_range(ctx.config.awareness_range) {
        Some(AIState::Chase)
    } else {
        Some(AIState::Idle)
    }
}

fn face_target<N: NavigationAdapter + ?Sized>(ctx: &mut BehaviorContext<'_, N>, delta: f32) {
    let Some(target) = ctx.perception.target else {
        return;
    };

    if let Some(rotation) = orient_toward(
        *ctx.rotation,
        ctx.perception.position,
        target,
        ctx.config.rotation_speed,
        delta,
    ) {
        *ctx.rotation = rotation;
    }
}
