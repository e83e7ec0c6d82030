//! Headless симуляция WAYFARER
//!
//! Спавнит NPC из RON профилей (аргумент — путь к файлу, иначе встроенные),
//! проводит игрока мимо них по скрипту и печатает переходы FSM.

use std::path::Path;

use bevy::prelude::*;
use wayfarer_simulation::{
    ai_state_snapshot, create_headless_app, load_profiles, log_error, log_info, profiles_from_ron_str,
    run_fixed_tick, ConfigResult, DialogueAdvance, InteractRequest, NpcProfile, Player,
};

const BUILTIN_PROFILES: &str = r#"[
    (
        name: "Mira",
        config: (kind: Friendly, awareness_range: 5.0, interaction_range: 2.5),
        patrol_route: [(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 0.0, 4.0)],
        dialogue: Some((
            id: "mira_greeting",
            character_name: "Mira",
            sentences: ["Hello, traveller.", "The road east is closed."],
        )),
    ),
    (
        name: "Raider",
        config: (kind: Hostile, awareness_range: 8.0, interaction_range: 2.0, wait_time_at_point: 1.0),
        patrol_route: [(20.0, 0.0, 0.0), (24.0, 0.0, 0.0)],
    ),
]"#;

const TICK: f32 = 1.0 / 60.0;
const TICKS: u32 = 1200;

fn main() {
    if let Err(error) = run() {
        log_error(&format!("Simulation failed: {}", error));
        std::process::exit(1);
    }
}

fn run() -> ConfigResult<()> {
    let profiles = match std::env::args().nth(1) {
        Some(path) => load_profiles(Path::new(&path))?,
        None => profiles_from_ron_str(BUILTIN_PROFILES)?,
    };

    let mut app = create_headless_app();
    log_info(&format!("Starting WAYFARER headless simulation ({} NPCs)", profiles.len()));

    let npcs: Vec<Entity> = profiles
        .iter()
        .enumerate()
        .map(|(index, profile): (usize, &NpcProfile)| {
            let spawn = profile
                .patrol_route
                .first()
                .map(|point| Vec3::from_array(*point))
                .unwrap_or(Vec3::new(index as f32 * 10.0, 0.0, -5.0));
            profile.spawn_in(app.world_mut(), spawn)
        })
        .collect();

    let player = app
        .world_mut()
        .spawn((Player, Transform::from_xyz(-10.0, 0.0, 0.0)))
        .id();

    for tick in 0..TICKS {
        // Игрок идёт вдоль оси X со скоростью 2 м/с
        if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
            transform.translation.x += 2.0 * TICK;
        }

        // Раз в секунду пробуем заговорить с каждым NPC и пролистываем реплики
        if tick % 60 == 30 {
            for &npc in &npcs {
                app.world_mut().send_event(InteractRequest { interactor: player, target: npc });
            }
            app.world_mut().send_event(DialogueAdvance);
        }

        run_fixed_tick(&mut app, TICK);

        if tick % 120 == 0 {
            for (index, state, position) in ai_state_snapshot(app.world_mut()) {
                log_info(&format!(
                    "Tick {}: npc #{} {:?} at ({:.1}, {:.1}, {:.1})",
                    tick, index, state, position.x, position.y, position.z
                ));
            }
        }
    }

    log_info("Simulation complete!");
    Ok(())
}
