//! Movement domain — навигация и команды перемещения
//!
//! Содержит:
//! - MovementCommand (high-level intent для navmesh agent)
//! - NavigationState (stop flag + feedback от tactical layer)
//! - NavigationAdapter (интерфейс, который потребляет FSM)
//! - NavigationEvent (отчёты tactical layer)
//! - LocomotionAnimation (animation sink)
//! - HeadlessNavigationPlugin (stub tactical layer)

use bevy::prelude::*;

pub mod adapter;
pub mod components;
pub mod events;
pub mod feedback;
pub mod headless;
pub mod locomotion;

pub use adapter::{NavigationAdapter, NavigationAgent};
pub use components::*;
pub use events::*;
pub use feedback::apply_navigation_events;
pub use headless::HeadlessNavigationPlugin;
pub use locomotion::update_locomotion_animation;

use crate::SimulationSet;

/// Movement Plugin
///
/// - apply_navigation_events — в начале тика (Sense)
/// - update_locomotion_animation — после всех решений (Present)
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<NavigationEvent>().add_systems(
            FixedUpdate,
            (
                apply_navigation_events.in_set(SimulationSet::Sense),
                update_locomotion_animation.in_set(SimulationSet::Present),
            ),
        );
    }
}
