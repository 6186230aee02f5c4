//! In-memory page document
//!
//! A render target holding a fixed set of named containers. Writes to
//! containers the page does not declare are dropped.

use crate::domain::ports::RenderTarget;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDocument {
    /// `(id, markup)` in declaration order
    containers: Vec<(String, String)>,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an empty container
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !self.has_container(&id) {
            self.containers.push((id, String::new()));
        }
        self
    }

    /// Current markup of a container, `None` if it is not declared
    pub fn markup(&self, id: &str) -> Option<&str> {
        self.containers
            .iter()
            .find(|(cid, _)| cid == id)
            .map(|(_, markup)| markup.as_str())
    }

    pub fn container_ids(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(|(id, _)| id.as_str())
    }

    /// Serialize every container as a `<div id="...">` block
    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        for (id, markup) in &self.containers {
            buf.push_str(&format!(
                "<div id=\"{}\">{}</div>\n",
                crate::feed::escape(id),
                markup
            ));
        }
        buf
    }
}

impl RenderTarget for PageDocument {
    fn has_container(&self, id: &str) -> bool {
        self.containers.iter().any(|(cid, _)| cid == id)
    }

    fn set_markup(&mut self, id: &str, markup: String) -> bool {
        match self.containers.iter_mut().find(|(cid, _)| cid == id) {
            Some(container) => {
                container.1 = markup;
                true
            }
            None => false,
        }
    }
}
