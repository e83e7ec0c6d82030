//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: NPC marker (Required Components: FSM + навигация)
//! - player: player control marker
//! - ai: AIState, AIConfig, AIBrain, TrackedTarget, PatrolRoute
//! - movement: MovementCommand, NavigationState, MovementSpeed, LocomotionAnimation
//! - interaction: Interactable, PlayerInteraction, InteractionFocus
//! - dialogue: Dialogue

pub mod actor;
pub mod player;

pub use actor::*;
pub use player::*;

// Re-exports доменных компонентов для удобного импорта
pub use crate::ai::{AIBrain, AIConfig, AIState, NpcKind, PatrolRoute, TrackedTarget};
pub use crate::dialogue::Dialogue;
pub use crate::interaction::{Interactable, InteractionFocus, PlayerInteraction};
pub use crate::movement::{LocomotionAnimation, MovementCommand, MovementSpeed, NavigationState};
