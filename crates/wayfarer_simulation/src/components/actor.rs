//! NPC marker + required components

use bevy::prelude::*;

use crate::ai::{AIBrain, AIConfig, PatrolRoute, TrackedTarget};
use crate::interaction::Interactable;
use crate::movement::{LocomotionAnimation, MovementCommand, MovementSpeed, NavigationState};

/// NPC под управлением behavior FSM
///
/// Автоматически добавляет FSM, навигацию и animation sink через Required Components.
/// `AIConfig` обычно задаётся явно (из `NpcProfile`), иначе Friendly с дефолтными радиусами.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    Transform,
    AIConfig,
    AIBrain,
    TrackedTarget,
    PatrolRoute,
    MovementCommand,
    NavigationState,
    MovementSpeed,
    LocomotionAnimation,
    Interactable
)]
pub struct Npc;
