//! FSM AI systems (target acquisition, behavior tick).

use bevy::prelude::*;

use crate::ai::brain::{BehaviorContext, Transition};
use crate::ai::{AIBrain, AIConfig, PatrolRoute, Perception, TrackedTarget};
use crate::components::{Npc, Player};
use crate::movement::{MovementCommand, NavigationAgent, NavigationState};

/// Позиция отслеживаемой цели (None — цели нет или она despawned)
pub fn target_position(tracked: &TrackedTarget, targets: &Query<&Transform, Without<Npc>>) -> Option<Vec3> {
    tracked
        .entity
        .and_then(|entity| targets.get(entity).ok())
        .map(|transform| transform.translation)
}

pub(crate) fn log_transition(entity: Entity, transition: Transition, perception: &Perception) {
    let from = transition.from.map_or("None", |state| state.as_str());
    let distance = perception
        .distance()
        .map_or_else(|| "no target".to_string(), |d| format!("target at {:.2}m", d));

    crate::logger::log(&format!(
        "AI: {:?} {} → {} ({})",
        entity,
        from,
        transition.to.as_str(),
        distance
    ));
}

/// Система: поиск цели (игрока) для NPC
///
/// Цель ищется, только если её нет или она despawned.
/// Ссылка слабая: храним только Entity, позицию берём lookup'ом каждый тик.
pub fn acquire_player_target(
    mut npcs: Query<(Entity, &mut TrackedTarget), With<Npc>>,
    players: Query<Entity, With<Player>>,
    alive: Query<(), Without<Npc>>,
) {
    let player = players.iter().next();

    for (entity, mut tracked) in npcs.iter_mut() {
        if tracked.entity.is_some_and(|target| alive.contains(target)) {
            continue;
        }

        let resolved = TrackedTarget { entity: player };
        if tracked.set_if_neq(resolved) {
            match player {
                Some(target) => crate::logger::log(&format!("AI: {:?} tracking {:?}", entity, target)),
                None => crate::logger::log(&format!("AI: {:?} lost its target", entity)),
            }
        }
    }
}

/// Система: behavior FSM tick
///
/// Perception → update rule текущего состояния → команды навигации/поворот → переход.
/// Максимум один переход за тик на NPC.
pub fn ai_behavior_tick(
    mut npcs: Query<
        (
            Entity,
            &mut Transform,
            &AIConfig,
            &mut AIBrain,
            &mut PatrolRoute,
            &TrackedTarget,
            &mut MovementCommand,
            &mut NavigationState,
        ),
        With<Npc>,
    >,
    targets: Query<&Transform, Without<Npc>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut transform, config, mut brain, mut route, tracked, command, nav_state) in npcs.iter_mut() {
        let perception = Perception::new(transform.translation, target_position(tracked, &targets));
        let mut nav = NavigationAgent::new(command, nav_state);
        let mut rotation = transform.rotation;

        let transition = {
            let mut ctx = BehaviorContext {
                config,
                perception,
                route: &mut route,
                nav: &mut nav,
                rotation: &mut rotation,
            };
            brain.tick(&mut ctx, delta)
        };

        if rotation != transform.rotation {
            transform.rotation = rotation;
        }

        if let Some(transition) = transition {
            log_transition(entity, transition, &perception);
        }
    }
}
