//! Navigation events — отчёты tactical layer для ECS
//!
//! Tactical layer (navmesh agent или headless stub) пишет события после шага движения.
//! ECS применяет их в начале СЛЕДУЮЩЕГО тика (`apply_navigation_events`): polling model,
//! FSM никогда не прерывается посреди update.

use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum NavigationEvent {
    /// Agent дошёл до статичной точки `target` (отправляется ОДИН раз)
    TargetReached { entity: Entity, target: Vec3 },

    /// Новая скорость agent'а (для locomotion анимации)
    VelocityChanged { entity: Entity, velocity: Vec3 },
}
