use dbanswan_core::lock::BodyStyle;
use web_sys::CssStyleDeclaration;

/// Inline style of `document.body`.
#[derive(Clone)]
pub struct DocumentBody(CssStyleDeclaration);

impl DocumentBody {
    pub fn get() -> Option<Self> {
        let window = match web_sys::window() {
            Some(window) => window,
            None => {
                log::error!("failed to get window");
                return None;
            }
        };
        let document = match window.document() {
            Some(document) => document,
            None => {
                log::error!("failed to get document");
                return None;
            }
        };
        match document.body() {
            Some(body) => Some(Self(body.style())),
            None => {
                log::error!("failed to get document body");
                None
            }
        }
    }
}

impl BodyStyle for DocumentBody {
    fn set_property(&self, property: &str, value: &str) {
        if let Err(err) = self.0.set_property(property, value) {
            log::error!("failed to set body {property} to {value}: {:?}", err);
        }
    }
}
