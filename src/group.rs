//! Entity groups
//!
//! `EntityGroup<T>` is the one container every mode uses for its UFOs,
//! projectiles, planets, waves and explosions. It owns its members by value;
//! removal is done with `retain`-style passes so indices never go stale
//! mid-frame.
//!
//! # Example
//!
//! ```rust
//! let mut shots: EntityGroup<Projectile> = EntityGroup::new();
//! shots.extend(volley(rocket.get_bounds(), Direction8::Right, false));
//!
//! // Projectile/UFO hits, removing both sides
//! let hits = collide_groups(&mut shots, &mut ufos, true, true);
//! ```

use crate::collision::{aabb_intersect, check_collisions_with_collection, Collidable};
use sdl2::rect::Rect;

/// Something that lives in a group and can expire on its own
pub trait Entity: Collidable {
    fn is_alive(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct EntityGroup<T> {
    members: Vec<T>,
}

impl<T> Default for EntityGroup<T> {
    fn default() -> Self {
        EntityGroup {
            members: Vec::new(),
        }
    }
}

impl<T> EntityGroup<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, member: T) {
        self.members.push(member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.members.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.members.retain(keep);
    }

    /// Removes members by index, ignoring duplicates and out-of-range indices
    pub fn remove_indices(&mut self, indices: &[usize]) -> Vec<T> {
        if indices.is_empty() {
            return Vec::new();
        }
        let mut doomed = vec![false; self.members.len()];
        for &i in indices {
            if let Some(flag) = doomed.get_mut(i) {
                *flag = true;
            }
        }

        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.members.len());
        for (member, gone) in self.members.drain(..).zip(doomed) {
            if gone {
                removed.push(member);
            } else {
                kept.push(member);
            }
        }
        self.members = kept;
        removed
    }
}

impl<T> Extend<T> for EntityGroup<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<T> FromIterator<T> for EntityGroup<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        EntityGroup {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a EntityGroup<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<T: Entity> EntityGroup<T> {
    /// Drops members that reported themselves dead
    pub fn prune(&mut self) {
        self.members.retain(|m| m.is_alive());
    }
}

impl<T: Collidable> EntityGroup<T> {
    /// Indices of members overlapping `rect`
    pub fn colliding_indices(&self, rect: &Rect) -> Vec<usize> {
        check_collisions_with_collection(rect, self.members.as_slice())
    }

    /// Removes and returns every member overlapping `rect`
    pub fn take_colliding(&mut self, rect: &Rect) -> Vec<T> {
        let hits = self.colliding_indices(rect);
        self.remove_indices(&hits)
    }

    /// Removes members that overlap anything in `obstacles`
    pub fn remove_hitting<U: Collidable>(&mut self, obstacles: &[U]) -> usize {
        let before = self.members.len();
        self.members.retain(|m| {
            let bounds = m.get_bounds();
            !obstacles
                .iter()
                .any(|o| aabb_intersect(&bounds, &o.get_bounds()))
        });
        before - self.members.len()
    }
}

/// Pairwise collision between two groups.
///
/// Every member of `a` is tested against every member of `b`. When
/// `remove_a` / `remove_b` are set, members that were hit are removed from
/// their group and handed back as `(removed_a, removed_b)` so callers can
/// read positions (e.g. to spawn explosions). A member hit more than once is
/// removed once.
pub fn collide_groups<A: Collidable, B: Collidable>(
    a: &mut EntityGroup<A>,
    b: &mut EntityGroup<B>,
    remove_a: bool,
    remove_b: bool,
) -> (Vec<A>, Vec<B>) {
    let mut pairs = Vec::new();
    for (ia, ma) in a.iter().enumerate() {
        let bounds = ma.get_bounds();
        for (ib, mb) in b.iter().enumerate() {
            if aabb_intersect(&bounds, &mb.get_bounds()) {
                pairs.push((ia, ib));
            }
        }
    }

    let removed_a = if remove_a {
        let idx: Vec<usize> = pairs.iter().map(|&(ia, _)| ia).collect();
        a.remove_indices(&idx)
    } else {
        Vec::new()
    };
    let removed_b = if remove_b {
        let idx: Vec<usize> = pairs.iter().map(|&(_, ib)| ib).collect();
        b.remove_indices(&idx)
    } else {
        Vec::new()
    };

    (removed_a, removed_b)
}
