use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::lock::BodyStyle;

/// In-memory body style that remembers the last value of every property.
#[derive(Clone, Default)]
pub struct Recorder {
    properties: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<RefCell<usize>>,
}

impl Recorder {
    pub fn get(&self, property: &str) -> Option<String> {
        self.properties.borrow().get(property).cloned()
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl BodyStyle for Recorder {
    fn set_property(&self, property: &str, value: &str) {
        self.properties
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
    }
}
