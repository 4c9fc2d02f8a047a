use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use crate::error::StoryError;
use crate::geometry::limits;
use crate::model::{Page, PageGeometry};
use crate::story::{validate_element, validate_geometry, Story};

pub const DOC_VERSION: u64 = 1;

pub fn to_json_impl(s: &Story) -> Value {
    #[derive(Serialize)]
    struct DocSer<'a> {
        version: u64,
        geometry: PageGeometry,
        current: usize,
        pages: &'a [Page],
    }
    let doc = DocSer { version: DOC_VERSION, geometry: s.geometry, current: s.current, pages: &s.pages };
    // Plain structs with string keys always serialize
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

pub fn from_json_impl(v: Value) -> Result<Story, StoryError> {
    #[derive(Deserialize)]
    struct DocDe {
        version: Option<u64>,
        geometry: Option<PageGeometry>,
        current: Option<usize>,
        #[serde(default)]
        pages: Vec<Page>,
    }
    let doc: DocDe = serde_json::from_value(v)?;
    if let Some(ver) = doc.version {
        if ver != DOC_VERSION {
            return Err(StoryError::UnsupportedVersion(ver));
        }
    }
    let geometry = doc.geometry.unwrap_or_default();
    validate_geometry(&geometry)?;

    // Caps before any per-element work
    if doc.pages.len() > limits::MAX_PAGES {
        return Err(StoryError::LimitExceeded("page count"));
    }
    let mut page_ids = HashSet::with_capacity(doc.pages.len());
    for page in &doc.pages {
        if page.id.len() > limits::MAX_ID_LEN {
            return Err(StoryError::LimitExceeded("page id length"));
        }
        if !page_ids.insert(page.id.as_str()) {
            return Err(StoryError::DuplicatePage(page.id.clone()));
        }
        if page.elements.len() > limits::MAX_ELEMENTS_PER_PAGE {
            return Err(StoryError::LimitExceeded("elements per page"));
        }
        let mut element_ids = HashSet::with_capacity(page.elements.len());
        for el in &page.elements {
            validate_element(el)?;
            if !element_ids.insert(el.id.as_str()) {
                return Err(StoryError::DuplicateElement { page: page.id.clone(), element: el.id.clone() });
            }
        }
    }

    let last = doc.pages.len().saturating_sub(1);
    let current = doc.current.unwrap_or(0).min(last);
    debug!(pages = doc.pages.len(), current, "story loaded");
    Ok(Story { geometry, pages: doc.pages, current, ver: 1 })
}

impl Story {
    pub fn to_json_value(&self) -> Value { to_json_impl(self) }

    pub fn to_json_string(&self) -> String { self.to_json_value().to_string() }

    pub fn from_json_value(v: Value) -> Result<Story, StoryError> { from_json_impl(v) }

    pub fn from_json_str(s: &str) -> Result<Story, StoryError> {
        let v: Value = serde_json::from_str(s)?;
        from_json_impl(v)
    }
}
