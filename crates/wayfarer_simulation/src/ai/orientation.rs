//! Orientation — плавный поворот NPC к цели только по yaw
//!
//! Slerp по кратчайшей дуге, доля `rotation_speed * dt` за тик (clamp в [0, 1]).

use bevy::prelude::*;

/// Меньше этого (squared length горизонтального направления) — не поворачиваемся
pub const MIN_DIRECTION_SQ: f32 = 1e-4;

/// Yaw rotation, при которой forward (-Z) смотрит вдоль `direction` (XZ плоскость)
pub fn yaw_toward(direction: Vec3) -> Quat {
    Quat::from_rotation_y(f32::atan2(-direction.x, -direction.z))
}

/// Новый поворот NPC в сторону `target`
///
/// None — цель прямо над/под NPC (нулевое горизонтальное направление), поворот не определён.
pub fn orient_toward(
    rotation: Quat,
    position: Vec3,
    target: Vec3,
    rotation_speed: f32,
    delta: f32,
) -> Option<Quat> {
    let mut direction = target - position;
    direction.y = 0.0; // только горизонталь, NPC не наклоняется

    if direction.length_squared() < MIN_DIRECTION_SQ {
        return None;
    }

    let goal = yaw_toward(direction);
    let t = (rotation_speed * delta).clamp(0.0, 1.0);

    Some(rotation.slerp(goal, t).normalize())
}
