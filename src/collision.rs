/// Collision detection for Star Doom
///
/// Every gameplay collision in the three modes is a bounding-box test. This
/// module holds those tests plus the polyline check used by Sun Escape's waves.
///
/// # Architecture
///
/// - `Collidable` trait: anything with screen-space bounds
/// - AABB functions: pure rectangle tests (exclusive and inclusive variants)
/// - Collection helpers: one entity against a slice of others
///
/// Group-vs-group collision lives in `group.rs` on top of these functions.
use crate::geometry::{segment_intersects_rect, Vec2};
use sdl2::rect::Rect;

/// Trait for entities that participate in collision detection.
///
/// # Example
///
/// ```rust
/// impl Collidable for Planet {
///     fn get_bounds(&self) -> Rect {
///         self.rect
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity, in screen pixels.
    fn get_bounds(&self) -> Rect;
}

impl Collidable for Rect {
    fn get_bounds(&self) -> Rect {
        *self
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes. Touching
/// edges do NOT count, matching SDL2's exclusive right/bottom bounds.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Inclusive variant of [`aabb_intersect`]: touching edges count.
///
/// Used when placing things that must keep a gap (planets, spawning UFOs).
pub fn aabb_touching(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() <= b.x() + b.width() as i32 && a.x() + a.width() as i32 >= b.x();
    let y_overlap = a.y() <= b.y() + b.height() as i32 && a.y() + a.height() as i32 >= b.y();

    x_overlap && y_overlap
}

/// Checks collision between a single collidable entity and a collection of other entities.
///
/// Returns the indices into `entities` where collisions with `entity` were detected.
///
/// # Example
///
/// ```rust
/// for index in check_collisions_with_collection(&rocket, planets.as_slice()) {
///     log::debug!("Rocket bumped planet {}", index);
/// }
/// ```
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();
    let mut collisions = Vec::new();

    for (index, other) in entities.iter().enumerate() {
        let other_bounds = other.get_bounds();

        if aabb_intersect(&entity_bounds, &other_bounds) {
            collisions.push(index);
        }
    }

    collisions
}

/// True if `entity` overlaps anything in `entities`
pub fn collides_with_any<T: Collidable>(entity: &impl Collidable, entities: &[T]) -> bool {
    let bounds = entity.get_bounds();
    entities
        .iter()
        .any(|other| aabb_intersect(&bounds, &other.get_bounds()))
}

/// Checks whether any segment of an open polyline passes through `rect`.
pub fn polyline_hits_rect(points: &[Vec2], rect: &Rect) -> bool {
    match points {
        [] => false,
        [single] => segment_intersects_rect(*single, *single, rect),
        _ => points
            .windows(2)
            .any(|pair| segment_intersects_rect(pair[0], pair[1], rect)),
    }
}
