use crate::lock::{restore_body, BodyStyle, ScrollLock};

/// Open/closed state of the mobile menu overlay, tied to the body scroll lock.
///
/// The menu is open exactly while it holds a [`ScrollLock`]. Dropping the menu
/// restores the body even if it was never closed, which is what the component
/// relies on when it unmounts with the overlay still showing.
pub struct MobileMenu<S: BodyStyle + Clone> {
    body: S,
    lock: Option<ScrollLock<S>>,
}

impl<S: BodyStyle + Clone> MobileMenu<S> {
    pub fn new(body: S) -> Self {
        Self { body, lock: None }
    }

    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    /// Flips the menu and returns whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.lock = match self.lock.take() {
            Some(_released) => None,
            None => Some(ScrollLock::acquire(self.body.clone())),
        };
        self.is_open()
    }

    /// Closes the menu if it is open. Returns the new open state, always `false`.
    pub fn close(&mut self) -> bool {
        self.lock = None;
        false
    }
}

impl<S: BodyStyle + Clone> Drop for MobileMenu<S> {
    fn drop(&mut self) {
        self.lock = None;
        restore_body(&self.body);
    }
}
