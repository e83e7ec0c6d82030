//! Perception — обнаружение цели по дистанции
//!
//! Два порога: awareness range (вообще видим) и interaction range (можно говорить).
//! Дистанция евклидова (3D), порог включительный.

use bevy::prelude::*;

/// Снимок восприятия NPC на текущий тик
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Perception {
    /// Позиция самого NPC
    pub position: Vec3,
    /// Позиция цели (None — цели нет или она despawned)
    pub target: Option<Vec3>,
}

impl Perception {
    pub fn new(position: Vec3, target: Option<Vec3>) -> Self {
        Self { position, target }
    }

    /// Цель существует и дистанция ≤ threshold
    pub fn in_range(&self, threshold: f32) -> bool {
        self.distance().is_some_and(|distance| distance <= threshold)
    }

    pub fn distance(&self) -> Option<f32> {
        self.target.map(|target| self.position.distance(target))
    }
}
