//! Hosting document

use std::sync::Arc;

use plinth_domain::value_objects::EnvironmentSnapshot;

use super::element::Element;

/// The document a browser application renders into
#[derive(Debug)]
pub struct Document {
    url: String,
    title: String,
    head: Arc<Element>,
    body: Arc<Element>,
}

impl Document {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            head: Arc::new(Element::new("head")),
            body: Arc::new(Element::new("body")),
        }
    }

    /// Document described by an environment snapshot
    pub fn from_environment(env: &EnvironmentSnapshot) -> Self {
        Self::new(env.url.clone(), env.title.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn head(&self) -> &Arc<Element> {
        &self.head
    }

    pub fn body(&self) -> &Arc<Element> {
        &self.body
    }

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> Arc<Element> {
        Arc::new(Element::new(tag))
    }
}
