use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::{Document, Element, Job, JobOptions, Keyframe};
use crate::errors::{ElementNotFound, Error};
use crate::mocks::job::MockJob;

/// Mock implement for [`Document`]. Serves a fixed set of elements keyed by selector.
#[derive(Clone, Debug, Default)]
pub struct MockDocument {
    elements: HashMap<String, MockElement>,
}

impl MockDocument {
    pub fn new() -> Self {
        Default::default()
    }

    /// Makes an element reachable through the given selector.
    pub fn with_element<S: Into<String>>(mut self, selector: S, element: MockElement) -> Self {
        self.elements.insert(selector.into(), element);
        self
    }

    /// Returns the element registered for the given selector.
    pub fn get_element(&self, selector: &str) -> Option<MockElement> {
        self.elements.get(selector).cloned()
    }
}

impl Document for MockDocument {
    fn query(&self, selector: &str) -> Result<Box<dyn Element>, Error> {
        match self.elements.get(selector) {
            Some(element) => Ok(Box::new(element.clone())),
            None => Err(ElementNotFound {
                selector: selector.into(),
            }),
        }
    }
}

/// Mock implement for [`Element`]. Records inline styles and created jobs in state
/// shared across clones, so copies handed out by [`MockDocument::query`] stay
/// inspectable from the original.
#[derive(Clone, Debug, Default)]
pub struct MockElement {
    /// Computed styles served to snapshots.
    computed: HashMap<String, String>,
    inline: Arc<RwLock<HashMap<String, String>>>,
    jobs: Arc<RwLock<Vec<MockJob>>>,
}

impl MockElement {
    pub fn new() -> Self {
        Default::default()
    }

    /// Declares a computed style the element reports.
    pub fn with_computed_style<S: Into<String>, V: Into<String>>(
        mut self,
        property: S,
        value: V,
    ) -> Self {
        self.computed.insert(property.into(), value.into());
        self
    }

    /// Returns the inline style set on the element, if any.
    pub fn get_inline_style(&self, property: &str) -> Option<String> {
        self.inline.read().get(property).cloned()
    }

    /// Returns the jobs created on this element, in creation order.
    pub fn get_jobs(&self) -> Vec<MockJob> {
        self.jobs.read().clone()
    }
}

impl Element for MockElement {
    fn computed_style(&self, property: &str) -> Option<String> {
        self.computed.get(property).cloned()
    }

    fn set_inline_style(&mut self, property: &str, value: &str) {
        self.inline.write().insert(property.into(), value.into());
    }

    fn animate(
        &mut self,
        keyframes: Vec<Keyframe>,
        options: JobOptions,
    ) -> Result<Box<dyn Job>, Error> {
        let job = MockJob::new(keyframes, options);
        self.jobs.write().push(job.clone());
        Ok(Box::new(job))
    }
}
