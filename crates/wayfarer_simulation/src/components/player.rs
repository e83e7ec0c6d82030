//! Player control marker component
//!
//! Отмечает entity, которым управляет игрок (в отличие от NPC).

use bevy::prelude::*;

use crate::interaction::{InteractionFocus, PlayerInteraction};

/// Marker component для player-controlled entity
///
/// - NPC находят цель через `With<Player>` (`acquire_player_target`)
/// - Interaction focus считается только для `With<Player>`
///
/// # Single-player
/// Обычно только один entity имеет этот компонент; если их несколько,
/// NPC берут первого найденного.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(Transform, PlayerInteraction, InteractionFocus)]
pub struct Player;
