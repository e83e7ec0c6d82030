//! AI decision-making module
//!
//! Behavior FSM для NPC (Idle/Patrol/Chase/Alert/Interact).
//! Friendly NPC наблюдают и ждут диалога, Hostile — преследуют игрока.
//!
//! Слои:
//! - brain: чистая логика переходов (без ECS Query, тестируется напрямую)
//! - perception / orientation / patrol: helpers, которые FSM читает каждый тик
//! - systems: ECS обвязка

use bevy::prelude::*;

pub mod brain;
pub mod components;
pub mod orientation;
pub mod patrol;
pub mod perception;
pub mod systems;


// Re-export основных типов
pub use brain::{BehaviorContext, Transition, INTERACT_PROMPT};
pub use components::{AIBrain, AIConfig, AIState, NpcKind, TrackedTarget};
pub use orientation::orient_toward;
pub use patrol::PatrolRoute;
pub use perception::Perception;
pub use systems::{acquire_player_target, ai_behavior_tick};

use crate::SimulationSet;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate:
/// 1. acquire_player_target — Sense (до решения FSM)
/// 2. ai_behavior_tick — Decide (один переход за тик на NPC)
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                acquire_player_target.in_set(SimulationSet::Sense),
                ai_behavior_tick.in_set(SimulationSet::Decide),
            ),
        );
    }
}
