//! Headless tactical layer — замена navmesh agent'у для тестов и demo runner'а
//!
//! Прямолинейное движение к destination без pathfinding и коллизий.
//! Пишет те же `NavigationEvent`, что и настоящий tactical layer,
//! поэтому FSM не отличает headless режим от игры.

use bevy::prelude::*;

use super::components::{MovementCommand, MovementSpeed, NavigationState};
use super::events::NavigationEvent;
use crate::SimulationSet;

/// Дистанция, на которой статичная цель считается достигнутой (м)
pub const STOPPING_DISTANCE: f32 = 0.1;

/// Headless navigation plugin (добавляется ТОЛЬКО без движка)
pub struct HeadlessNavigationPlugin;

impl Plugin for HeadlessNavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            headless_navigation_step.in_set(SimulationSet::Tactical),
        );
    }
}

/// Один шаг движения к точке
///
/// Возвращает (новая позиция, скорость, дошли ли).
pub fn step_toward(position: Vec3, destination: Vec3, speed: f32, delta: f32) -> (Vec3, Vec3, bool) {
    let to_target = destination - position;
    let distance = to_target.length();

    if distance <= STOPPING_DISTANCE {
        return (position, Vec3::ZERO, true);
    }

    let step = (speed * delta).min(distance);
    let direction = to_target / distance;
    let new_position = position + direction * step;
    let velocity = if delta > 0.0 { direction * (step / delta) } else { Vec3::ZERO };

    (new_position, velocity, distance - step <= STOPPING_DISTANCE)
}

/// Система: исполнение MovementCommand в headless режиме
///
/// Остановленные агенты и агенты без цели стоят (velocity = 0).
/// TargetReached отправляется один раз: флаг `is_target_reached` выставится
/// на следующем тике через `apply_navigation_events`.
pub fn headless_navigation_step(
    mut agents: Query<(Entity, &mut Transform, &MovementCommand, &NavigationState, &MovementSpeed)>,
    mut nav_events: EventWriter<NavigationEvent>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut transform, command, nav_state, speed) in agents.iter_mut() {
        let destination = match command.destination() {
            Some(destination) if !nav_state.is_stopped => destination,
            _ => {
                if nav_state.velocity != Vec3::ZERO {
                    nav_events.write(NavigationEvent::VelocityChanged { entity, velocity: Vec3::ZERO });
                }
                continue;
            }
        };

        if command.is_static() && nav_state.is_target_reached {
            continue;
        }

        let (new_position, velocity, arrived) =
            step_toward(transform.translation, destination, speed.speed, delta);

        if new_position != transform.translation {
            transform.translation = new_position;
        }

        if velocity != nav_state.velocity {
            nav_events.write(NavigationEvent::VelocityChanged { entity, velocity });
        }

        if arrived && command.is_static() {
            nav_events.write(NavigationEvent::TargetReached { entity, target: destination });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_toward_moves_at_speed() {
        let (pos, velocity, arrived) = step_toward(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2.0, 0.5);

        assert!((pos.x - 1.0).abs() < 1e-5);
        assert!((velocity.length() - 2.0).abs() < 1e-4);
        assert!(!arrived);
    }

    #[test]
    fn test_step_toward_does_not_overshoot() {
        let (pos, _, arrived) = step_toward(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0), 10.0, 1.0);

        assert!((pos.x - 0.5).abs() < 1e-5);
        assert!(arrived);
    }

    #[test]
    fn test_step_toward_already_there() {
        let target = Vec3::new(3.0, 0.0, 3.0);
        let (pos, velocity, arrived) = step_toward(target, target, 5.0, 0.1);

        assert_eq!(pos, target);
        assert_eq!(velocity, Vec3::ZERO);
        assert!(arrived);
    }
}
