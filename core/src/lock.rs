/// Write-only access to the inline style of the document body.
pub trait BodyStyle {
    /// Sets one CSS declaration, e.g. `overflow` to `hidden` while locked and
    /// back to `unset` on release.
    fn set_property(&self, property: &str, value: &str);
}

const LOCKED: [(&str, &str); 2] = [("overflow", "hidden"), ("height", "100vh")];
const UNLOCKED: [(&str, &str); 2] = [("overflow", "unset"), ("height", "auto")];

fn apply<S: BodyStyle + ?Sized>(body: &S, declarations: &[(&str, &str)]) {
    for (property, value) in declarations {
        body.set_property(property, value);
    }
}

/// Puts the body back to its scrollable defaults. Safe to call any number of
/// times.
pub fn restore_body<S: BodyStyle + ?Sized>(body: &S) {
    apply(body, &UNLOCKED);
}

/// Keeps the page from scrolling behind an overlay for as long as it lives.
///
/// Assumes it is the only thing locking the body: releasing always restores
/// the defaults rather than whatever was set before.
#[must_use = "the body is unlocked as soon as the lock is dropped"]
pub struct ScrollLock<S: BodyStyle> {
    body: S,
}

impl<S: BodyStyle> ScrollLock<S> {
    pub fn acquire(body: S) -> Self {
        apply(&body, &LOCKED);
        log::debug!("body scroll locked");
        Self { body }
    }
}

impl<S: BodyStyle> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        restore_body(&self.body);
        log::debug!("body scroll unlocked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Recorder;

    #[test]
    fn acquire_pins_body() {
        let body = Recorder::default();
        let _lock = ScrollLock::acquire(body.clone());
        assert_eq!(body.get("overflow").as_deref(), Some("hidden"));
        assert_eq!(body.get("height").as_deref(), Some("100vh"));
    }

    #[test]
    fn drop_restores_defaults() {
        let body = Recorder::default();
        let lock = ScrollLock::acquire(body.clone());
        drop(lock);
        assert_eq!(body.get("overflow").as_deref(), Some("unset"));
        assert_eq!(body.get("height").as_deref(), Some("auto"));
    }

    #[test]
    fn restore_is_idempotent() {
        let body = Recorder::default();
        restore_body(&body);
        restore_body(&body);
        assert_eq!(body.get("overflow").as_deref(), Some("unset"));
        assert_eq!(body.get("height").as_deref(), Some("auto"));
        assert_eq!(body.writes(), 4);
    }
}
