use std::collections::HashSet;

/// Components that can hold the body scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockOwner {
    Menu,
    Modal,
}

/// Shared body scroll lock. The body stays locked while any owner holds it,
/// so closing the menu cannot re-enable scrolling under an open modal.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    owners: HashSet<LockOwner>,
}

impl ScrollLock {
    pub fn set(&mut self, owner: LockOwner, held: bool) {
        if held {
            self.owners.insert(owner);
        } else {
            self.owners.remove(&owner);
        }
    }

    pub fn locked(&self) -> bool {
        !self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_while_any_owner_holds() {
        let mut lock = ScrollLock::default();
        assert!(!lock.locked());
        lock.set(LockOwner::Menu, true);
        lock.set(LockOwner::Modal, true);
        lock.set(LockOwner::Menu, false);
        assert!(lock.locked(), "modal still open, body must stay locked");
        lock.set(LockOwner::Modal, false);
        assert!(!lock.locked());
    }

    #[test]
    fn releasing_an_unheld_lock_is_a_no_op() {
        let mut lock = ScrollLock::default();
        lock.set(LockOwner::Modal, false);
        assert!(!lock.locked());
        lock.set(LockOwner::Menu, true);
        lock.set(LockOwner::Modal, false);
        assert!(lock.locked());
    }
}
