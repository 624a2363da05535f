use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned hit box relative to the entity's
/// [`Position`](super::position::Position).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the box for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// (x, y, width, height) of the box, for drawing.
    pub fn rect(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_with_offset() {
        let collider = BoxCollider::new(10.0, 20.0).with_offset(Vector2::new(-5.0, -20.0));
        let pos = Vector2::new(100.0, 100.0);
        assert!(collider.contains_point(pos, Vector2::new(100.0, 90.0)));
        assert!(collider.contains_point(pos, Vector2::new(95.0, 80.0)));
        assert!(!collider.contains_point(pos, Vector2::new(100.0, 101.0)));
        assert!(!collider.contains_point(pos, Vector2::new(106.0, 90.0)));
    }

    #[test]
    fn test_negative_size_is_normalized() {
        let collider = BoxCollider::new(-10.0, -10.0);
        assert!(collider.contains_point(Vector2::zero(), Vector2::new(-5.0, -5.0)));
        assert_eq!(collider.rect(Vector2::zero()), (-10.0, -10.0, 10.0, 10.0));
    }
}
