//! WAYFARER Simulation Core
//!
//! ECS-симуляция NPC на Bevy 0.16 (strategic layer)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (behavior FSM, диалоги, interaction gateway)
//! - Engine = tactical layer (navmesh agent, анимация, UI)
//!
//! Связь слоёв:
//! - ECS → Engine: `MovementCommand`, `LocomotionAnimation`, `InteractHintChanged`, `DialogueStarted`
//! - Engine → ECS: `NavigationEvent`, `InteractRequest`, `DialogueAdvance`
//!
//! Обратная связь читается на СЛЕДУЮЩЕМ тике (polling, без callback'ов).

use std::time::Duration;

use bevy::prelude::*;

// Публичные модули
pub mod ai;
pub mod components;
pub mod config;
pub mod dialogue;
pub mod interaction;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, AIState, NpcKind, Transition, INTERACT_PROMPT};
pub use components::*;
pub use config::{load_profiles, profiles_from_ron_str, spawn_npc, ConfigError, ConfigResult, NpcProfile};
pub use dialogue::{DialogueAdvance, DialogueFinished, DialoguePlugin, DialogueRequested, DialogueSession, DialogueStarted};
pub use interaction::{InteractHintChanged, InteractRequest, InteractionPlugin};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};
pub use movement::{HeadlessNavigationPlugin, MovementPlugin, NavigationAdapter, NavigationAgent, NavigationEvent};

/// Фазы simulation tick (FixedUpdate, строго по порядку)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Цель + feedback навигации за прошлый тик
    Sense,
    /// Behavior FSM (максимум один переход на NPC)
    Decide,
    /// InteractRequest → gateway
    Interact,
    /// Диалоговая сессия
    Dialogue,
    /// DialogueFinished → FSM, фокус и подсказки
    Resolve,
    /// Animation sink
    Present,
    /// Headless tactical layer (в игре пусто: navmesh agent живёт в движке)
    Tactical,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Sense,
                    SimulationSet::Decide,
                    SimulationSet::Interact,
                    SimulationSet::Dialogue,
                    SimulationSet::Resolve,
                    SimulationSet::Present,
                    SimulationSet::Tactical,
                )
                    .chain(), // Последовательное выполнение для детерминизма
            )
            // Подсистемы (ECS strategic layer)
            .add_plugins((MovementPlugin, AIPlugin, InteractionPlugin, DialoguePlugin));
    }
}

/// Создаёт Bevy App для headless симуляции
///
/// Без MinimalPlugins: время двигает `run_fixed_tick`, поэтому прогон детерминирован
/// и не зависит от wall clock. Навигация — `HeadlessNavigationPlugin`.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((SimulationPlugin, HeadlessNavigationPlugin));

    app
}

/// Один fixed tick длиной `delta` секунд
///
/// Как кадр `app.update()`, только без wall clock:
/// First (`event_update_system` — swap буферов событий) → FixedUpdate.
/// Событие живёт два тика, дальше буфер очищается.
pub fn run_fixed_tick(app: &mut App, delta: f32) {
    let world = app.world_mut();
    world.run_schedule(First);
    world
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f32(delta));
    world.run_schedule(FixedUpdate);
}

/// Snapshot FSM состояний для сравнения детерминизма
///
/// Сортировка по Entity index: порядок итерации Query не гарантирован.
pub fn ai_state_snapshot(world: &mut World) -> Vec<(u32, Option<AIState>, Vec3)> {
    let mut query = world.query_filtered::<(Entity, &ai::AIBrain, &Transform), With<Npc>>();
    let mut snapshot: Vec<_> = query
        .iter(world)
        .map(|(entity, brain, transform)| (entity.index(), brain.state(), transform.translation))
        .collect();

    snapshot.sort_by_key(|(index, ..)| *index);
    snapshot
}
