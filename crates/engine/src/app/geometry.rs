#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in screen pixels. Rotation is a render-only attribute and
/// never participates in the overlap test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl RigidBody {
    pub const fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.width * 0.5
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.width * 0.5
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.height * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.height * 0.5
    }

    /// Strict AABB overlap: boxes that merely touch edges do not collide,
    /// so bodies resting against each other never trigger.
    pub fn is_collision(&self, other: &RigidBody) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f32, y: f32, w: f32, h: f32) -> RigidBody {
        RigidBody::new(Vec2::new(x, y), w, h)
    }

    #[test]
    fn overlapping_boxes_collide() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        let b = body(4.0, 4.0, 10.0, 10.0);
        assert!(a.is_collision(&b));
    }

    #[test]
    fn collision_is_symmetric() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        let b = body(7.0, 0.0, 10.0, 10.0);
        assert_eq!(a.is_collision(&b), b.is_collision(&a));
        assert!(a.is_collision(&b));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        let right_edge = body(10.0, 0.0, 10.0, 10.0);
        let bottom_edge = body(0.0, 10.0, 10.0, 10.0);
        assert!(!a.is_collision(&right_edge));
        assert!(!a.is_collision(&bottom_edge));
    }

    #[test]
    fn separated_on_one_axis_does_not_collide() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        let b = body(4.0, 30.0, 10.0, 10.0);
        assert!(!a.is_collision(&b));
    }

    #[test]
    fn containment_collides() {
        let outer = body(0.0, 0.0, 100.0, 100.0);
        let inner = body(1.0, -2.0, 5.0, 5.0);
        assert!(outer.is_collision(&inner));
        assert!(inner.is_collision(&outer));
    }

    #[test]
    fn edge_accessors_are_centered_extents() {
        let a = body(50.0, 20.0, 10.0, 4.0);
        assert_eq!(a.left(), 45.0);
        assert_eq!(a.right(), 55.0);
        assert_eq!(a.top(), 18.0);
        assert_eq!(a.bottom(), 22.0);
    }
}
