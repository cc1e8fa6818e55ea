//! Deferred removal
//!
//! Scans over the live collections are read-only with respect to membership.
//! Anything consumed during a scan is staged here by id and removed in one
//! batch once the scan is over.

use super::entity::{Entity, EntityId};

/// Ids marked for removal, in staging order, without duplicates
#[derive(Debug, Clone, Default)]
pub struct StagingSet {
    ids: Vec<EntityId>,
}

impl StagingSet {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Mark `id`; returns false if it was already staged
    pub fn stage(&mut self, id: EntityId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Remove every staged entity from `live` and clear the set
    ///
    /// Returns the number of entities removed. A staged id missing from
    /// `live` is a staging bug.
    pub fn flush<T: Entity>(&mut self, live: &mut Vec<T>, what: &str) -> usize {
        let mut removed = 0;
        for id in self.ids.drain(..) {
            match live.iter().position(|e| e.id() == id) {
                Some(idx) => {
                    live.remove(idx);
                    removed += 1;
                }
                None => {
                    log::error!("Staged {} {:?} not found at flush", what, id);
                    debug_assert!(false, "staged {what} {id:?} missing from live collection");
                }
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    struct Dot(u32);

    impl Entity for Dot {
        fn id(&self) -> EntityId {
            EntityId(self.0)
        }
        fn pos(&self) -> Vec2 {
            Vec2::ZERO
        }
        fn actual_size(&self) -> f32 {
            1.0
        }
    }

    #[test]
    fn test_stage_is_presence_checked() {
        let mut set = StagingSet::new();
        assert!(set.stage(EntityId(1)));
        assert!(!set.stage(EntityId(1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_flush_by_identity_preserves_order() {
        let mut live = vec![Dot(1), Dot(2), Dot(3), Dot(4)];
        let mut set = StagingSet::new();
        set.stage(EntityId(3));
        set.stage(EntityId(1));
        assert_eq!(set.flush(&mut live, "dot"), 2);
        assert_eq!(live, vec![Dot(2), Dot(4)]);
        assert!(set.is_empty());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_flush_missing_is_a_bug() {
        let mut live = vec![Dot(1)];
        let mut set = StagingSet::new();
        set.stage(EntityId(9));
        set.flush(&mut live, "dot");
    }
}
