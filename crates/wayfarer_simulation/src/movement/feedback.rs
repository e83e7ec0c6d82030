//! Применение отчётов tactical layer к NavigationState

use bevy::prelude::*;

use super::components::{MovementCommand, NavigationState};
use super::events::NavigationEvent;

/// Допуск совпадения точки прибытия с текущей командой (м²)
const SAME_TARGET_EPSILON_SQ: f32 = 1e-4;

/// Система: NavigationEvent → NavigationState
///
/// Запускается в начале тика, до FSM.
/// TargetReached для устаревшей точки (команду уже сменили) игнорируется:
/// иначе новый waypoint считался бы достигнутым сразу.
pub fn apply_navigation_events(
    mut nav_events: EventReader<NavigationEvent>,
    mut agents: Query<(&MovementCommand, &mut NavigationState)>,
) {
    for event in nav_events.read() {
        match *event {
            NavigationEvent::TargetReached { entity, target } => {
                let Ok((command, mut nav_state)) = agents.get_mut(entity) else {
                    continue;
                };

                let matches_current = matches!(
                    *command,
                    MovementCommand::MoveToPosition { target: current }
                        if current.distance_squared(target) <= SAME_TARGET_EPSILON_SQ
                );

                if matches_current && !nav_state.is_target_reached {
                    nav_state.is_target_reached = true;
                }
            }
            NavigationEvent::VelocityChanged { entity, velocity } => {
                if let Ok((_, mut nav_state)) = agents.get_mut(entity) {
                    if nav_state.velocity != velocity {
                        nav_state.velocity = velocity;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback_app() -> App {
        let mut app = App::new();
        app.add_event::<NavigationEvent>()
            .add_systems(Update, apply_navigation_events);
        app
    }

    fn spawn_walker(app: &mut App, target: Vec3) -> Entity {
        app.world_mut()
            .spawn((MovementCommand::MoveToPosition { target }, NavigationState::default()))
            .id()
    }

    fn nav_state(app: &App, entity: Entity) -> NavigationState {
        app.world().get::<NavigationState>(entity).copied().expect("navigation state")
    }

    #[test]
    fn test_target_reached_for_current_waypoint() {
        let mut app = feedback_app();
        let waypoint = Vec3::new(2.0, 0.0, 0.0);
        let entity = spawn_walker(&mut app, waypoint);

        app.world_mut().send_event(NavigationEvent::TargetReached { entity, target: waypoint });
        app.update();

        assert!(nav_state(&app, entity).is_target_reached);
    }

    #[test]
    fn test_stale_target_reached_ignored_after_new_waypoint() {
        let mut app = feedback_app();
        let old_waypoint = Vec3::new(2.0, 0.0, 0.0);
        let new_waypoint = Vec3::new(0.0, 0.0, 6.0);
        let entity = spawn_walker(&mut app, new_waypoint);

        // Отчёт о прибытии к старой точке пришёл уже после смены команды
        app.world_mut().send_event(NavigationEvent::TargetReached { entity, target: old_waypoint });
        app.update();

        assert!(!nav_state(&app, entity).is_target_reached);
    }

    #[test]
    fn test_target_reached_ignored_during_chase() {
        let mut app = feedback_app();
        let target = Vec3::new(1.0, 0.0, 1.0);
        let entity = app
            .world_mut()
            .spawn((MovementCommand::FollowTarget { target }, NavigationState::default()))
            .id();

        app.world_mut().send_event(NavigationEvent::TargetReached { entity, target });
        app.update();

        assert!(!nav_state(&app, entity).is_target_reached);
    }

    #[test]
    fn test_velocity_changed_applied() {
        let mut app = feedback_app();
        let entity = spawn_walker(&mut app, Vec3::X);
        let velocity = Vec3::new(3.5, 0.0, 0.0);

        app.world_mut().send_event(NavigationEvent::VelocityChanged { entity, velocity });
        app.update();

        assert_eq!(nav_state(&app, entity).velocity, velocity);
    }

    #[test]
    fn test_event_for_despawned_entity_is_skipped() {
        let mut app = feedback_app();
        let entity = spawn_walker(&mut app, Vec3::X);
        app.world_mut().despawn(entity);

        app.world_mut().send_event(NavigationEvent::TargetReached { entity, target: Vec3::X });
        app.world_mut().send_event(NavigationEvent::VelocityChanged { entity, velocity: Vec3::X });
        app.update();

        assert!(app.world().get_entity(entity).is_err());
    }
}
