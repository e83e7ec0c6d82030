//! Integration тест логирования FSM переходов
//!
//! Logger глобальный, поэтому в этом binary ровно один тест.

use bevy::prelude::*;
use wayfarer_simulation::ai::{AIBrain, AIConfig};
use wayfarer_simulation::logger::MemoryLogger;
use wayfarer_simulation::{
    create_headless_app, log_info, run_fixed_tick, set_log_level, set_logger, AIState, LogLevel, NpcProfile, Player,
};

const DT: f32 = 1.0 / 60.0;

fn state(app: &App, npc: Entity) -> Option<AIState> {
    app.world().get::<AIBrain>(npc).and_then(|brain| brain.state())
}

#[test]
fn test_transitions_logged_at_debug_and_filtered_by_level() {
    let sink = MemoryLogger::default();
    set_logger(Box::new(sink.clone()));
    set_log_level(LogLevel::Debug);

    let mut app = create_headless_app();
    let npc = NpcProfile::new("Guard", AIConfig::hostile().with_ranges(5.0, 2.0)).spawn_in(app.world_mut(), Vec3::ZERO);
    let player = app
        .world_mut()
        .spawn((Player, Transform::from_xyz(4.0, 0.0, 0.0)))
        .id();

    run_fixed_tick(&mut app, DT);
    run_fixed_tick(&mut app, DT);
    assert_eq!(state(&app, npc), Some(AIState::Chase));

    let chase_lines: Vec<(LogLevel, String)> = sink
        .lines()
        .into_iter()
        .filter(|(_, line)| line.contains("Idle → Chase"))
        .collect();
    assert_eq!(chase_lines.len(), 1);
    assert_eq!(chase_lines[0].0, LogLevel::Debug);
    assert!(chase_lines[0].1.contains("target at 4.00m"));

    // Info и выше: переходы (Debug) отбрасываются
    set_log_level(LogLevel::Info);
    if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
        transform.translation = Vec3::new(1.0, 0.0, 0.0);
    }
    run_fixed_tick(&mut app, DT);
    assert_eq!(state(&app, npc), Some(AIState::Alert));
    assert!(!sink.contains("Chase → Alert"));

    log_info("Simulation: level check");
    assert!(sink
        .lines()
        .iter()
        .any(|(level, line)| *level == LogLevel::Info && line.contains("Simulation: level check")));

    set_log_level(LogLevel::Debug);
}
