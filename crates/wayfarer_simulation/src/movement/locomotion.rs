//! Locomotion animation sink
//!
//! Аниматор получает нормализованную скорость (velocity / max speed)
//! со сглаживанием, чтобы blend tree не дёргался при резкой остановке.

use bevy::prelude::*;

use super::components::{LocomotionAnimation, MovementSpeed, NavigationState};

/// Экспоненциальное сглаживание к `target` за `damp_time` секунд
pub fn damp_toward(current: f32, target: f32, damp_time: f32, delta: f32) -> f32 {
    if damp_time <= 0.0 {
        return target;
    }

    let blend = 1.0 - (-delta / damp_time).exp();
    current + (target - current) * blend
}

/// Система: velocity → LocomotionAnimation.speed
pub fn update_locomotion_animation(
    mut query: Query<(&NavigationState, &MovementSpeed, &mut LocomotionAnimation)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (nav_state, speed, mut animation) in query.iter_mut() {
        let normalized = if speed.speed > 0.0 {
            (nav_state.velocity.length() / speed.speed).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let damped = damp_toward(animation.speed, normalized, animation.damp_time, delta).clamp(0.0, 1.0);
        if (damped - animation.speed).abs() > f32::EPSILON {
            animation.speed = damped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damp_converges() {
        let mut value = 0.0;
        for _ in 0..120 {
            value = damp_toward(value, 1.0, 0.1, 1.0 / 60.0);
        }
        assert!((value - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_damp_is_partial_per_step() {
        let value = damp_toward(0.0, 1.0, 0.1, 1.0 / 60.0);
        assert!(value > 0.0 && value < 0.5);
    }

    #[test]
    fn test_zero_damp_time_snaps() {
        assert_eq!(damp_toward(0.2, 0.9, 0.0, 0.016), 0.9);
    }
}
