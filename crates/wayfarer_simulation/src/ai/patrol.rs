//! Patrol route — циклический обход waypoint'ов
//!
//! Только вперёд: 0 → 1 → 2 → 0 → ... (без реверса и ping-pong).

use bevy::prelude::*;

/// Маршрут патруля NPC + курсор
///
/// Курсор стартует с 0, поэтому первый `advance` ведёт к waypoint 1.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PatrolRoute {
    waypoints: Vec<Vec3>,
    cursor: usize,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec3>) -> Self {
        Self { waypoints, cursor: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// Текущий waypoint (None для пустого маршрута)
    pub fn current(&self) -> Option<Vec3> {
        self.waypoints.get(self.cursor).copied()
    }

    /// Сдвинуть курсор на следующий waypoint (по модулю длины)
    ///
    /// Пустой маршрут — no-op, курсор не меняется, вызывающий не должен двигаться.
    pub fn advance(&mut self) -> Option<Vec3> {
        if self.waypoints.is_empty() {
            return None;
        }

        self.cursor = (self.cursor + 1) % self.waypoints.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_route() -> PatrolRoute {
        PatrolRoute::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
        ])
    }

    #[test]
    fn test_empty_route_advance_is_noop() {
        let mut route = PatrolRoute::default();
        for _ in 0..5 {
            assert_eq!(route.advance(), None);
        }
        assert_eq!(route.cursor(), 0);
        assert_eq!(route.current(), None);
    }

    #[test]
    fn test_first_advance_skips_start_point() {
        let mut route = square_route();
        assert_eq!(route.advance(), Some(Vec3::new(10.0, 0.0, 0.0)));
        assert_eq!(route.cursor(), 1);
    }

    #[test]
    fn test_wraps_around() {
        let mut route = square_route();
        route.advance();
        route.advance();
        assert_eq!(route.advance(), Some(Vec3::ZERO));
        assert_eq!(route.cursor(), 0);
    }

    #[test]
    fn test_single_point_route_stays_on_point() {
        let point = Vec3::new(2.0, 0.0, -2.0);
        let mut route = PatrolRoute::new(vec![point]);
        assert_eq!(route.advance(), Some(point));
        assert_eq!(route.advance(), Some(point));
        assert_eq!(route.cursor(), 0);
    }
}
