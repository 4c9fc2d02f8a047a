use tracing::debug;

use crate::error::StoryError;
use crate::geometry::limits;
use crate::model::{Page, PageGeometry, PositionedElement};

/// Ordering surface consumed by the page grid view.
pub trait PageOrder {
    fn page_ids(&self) -> Vec<&str>;
    fn current_page_index(&self) -> usize;
    /// Moves `page_id` so that it ends up at `position` in the sequence.
    fn arrange_page(&mut self, page_id: &str, position: usize) -> Result<(), StoryError>;
    fn set_current_page(&mut self, page_id: &str) -> Result<(), StoryError>;
}

#[derive(Clone, Debug)]
pub struct Story {
    pub(crate) geometry: PageGeometry,
    pub(crate) pages: Vec<Page>,
    pub(crate) current: usize,
    pub(crate) ver: u64,
}

impl Story {
    pub fn new(geometry: PageGeometry) -> Self {
        Story { geometry, pages: Vec::new(), current: 0, ver: 1 }
    }

    /// Like [`Story::new`] but rejects non-finite or non-positive geometry.
    pub fn try_new(geometry: PageGeometry) -> Result<Self, StoryError> {
        validate_geometry(&geometry)?;
        Ok(Story::new(geometry))
    }

    /// Increments on every successful edit.
    pub fn version(&self) -> u64 { self.ver }
    pub fn geometry(&self) -> PageGeometry { self.geometry }
    pub fn pages(&self) -> &[Page] { &self.pages }
    pub fn page_count(&self) -> usize { self.pages.len() }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn current_page(&self) -> Option<&Page> { self.pages.get(self.current) }

    fn page_index(&self, id: &str) -> Result<usize, StoryError> {
        self.pages
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoryError::UnknownPage(id.to_string()))
    }

    fn bump(&mut self) { self.ver = self.ver.wrapping_add(1); }

    pub fn add_page(&mut self, id: impl Into<String>) -> Result<usize, StoryError> {
        let id = id.into();
        if self.page(&id).is_some() {
            return Err(StoryError::DuplicatePage(id));
        }
        if id.len() > limits::MAX_ID_LEN {
            return Err(StoryError::LimitExceeded("page id length"));
        }
        if self.pages.len() >= limits::MAX_PAGES {
            return Err(StoryError::LimitExceeded("page count"));
        }
        self.pages.push(Page::new(id));
        self.bump();
        Ok(self.pages.len() - 1)
    }

    pub fn remove_page(&mut self, id: &str) -> Result<Page, StoryError> {
        let idx = self.page_index(id)?;
        let page = self.pages.remove(idx);
        // Keep the same page selected when an earlier one disappears
        if idx < self.current || self.current >= self.pages.len() {
            self.current = self.current.saturating_sub(1);
        }
        self.bump();
        Ok(page)
    }

    pub fn add_element(&mut self, page_id: &str, element: PositionedElement) -> Result<(), StoryError> {
        validate_element(&element)?;
        let idx = self.page_index(page_id)?;
        let page = &mut self.pages[idx];
        if page.element(&element.id).is_some() {
            return Err(StoryError::DuplicateElement { page: page.id.clone(), element: element.id });
        }
        if page.elements.len() >= limits::MAX_ELEMENTS_PER_PAGE {
            return Err(StoryError::LimitExceeded("elements per page"));
        }
        page.elements.push(element);
        self.bump();
        Ok(())
    }

    pub fn remove_element(&mut self, page_id: &str, element_id: &str) -> Result<PositionedElement, StoryError> {
        let idx = self.page_index(page_id)?;
        let page = &mut self.pages[idx];
        let pos = page
            .elements
            .iter()
            .position(|e| e.id == element_id)
            .ok_or_else(|| StoryError::UnknownElement {
                page: page_id.to_string(),
                element: element_id.to_string(),
            })?;
        let removed = page.elements.remove(pos);
        self.bump();
        Ok(removed)
    }
}

impl Default for Story {
    fn default() -> Self { Story::new(PageGeometry::default()) }
}

impl PageOrder for Story {
    fn page_ids(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.id.as_str()).collect()
    }

    fn current_page_index(&self) -> usize { self.current }

    fn arrange_page(&mut self, page_id: &str, position: usize) -> Result<(), StoryError> {
        let from = self.page_index(page_id)?;
        let len = self.pages.len();
        if position >= len {
            return Err(StoryError::PositionOutOfRange { position, len });
        }
        if from == position {
            return Ok(());
        }
        let current_id = self.pages.get(self.current).map(|p| p.id.clone());
        let page = self.pages.remove(from);
        self.pages.insert(position, page);
        if let Some(cid) = current_id {
            self.current = self.page_index(&cid)?;
        }
        debug!(page_id, from, to = position, "page rearranged");
        self.bump();
        Ok(())
    }

    fn set_current_page(&mut self, page_id: &str) -> Result<(), StoryError> {
        let idx = self.page_index(page_id)?;
        if idx != self.current {
            self.current = idx;
            self.bump();
        }
        Ok(())
    }
}

pub(crate) fn validate_element(el: &PositionedElement) -> Result<(), StoryError> {
    let invalid = |reason| StoryError::InvalidElement { id: el.id.clone(), reason };
    // Stored elements are addressed by id; only the bare evaluator accepts anonymous ones
    if el.id.is_empty() {
        return Err(invalid("id required"));
    }
    if el.id.len() > limits::MAX_ID_LEN {
        return Err(invalid("id too long"));
    }
    if !limits::in_coord_bounds(el.x) || !limits::in_coord_bounds(el.y) {
        return Err(invalid("position out of bounds"));
    }
    if !limits::in_size_bounds(el.width) || !limits::in_size_bounds(el.height) {
        return Err(invalid("size must be finite and non-negative"));
    }
    if !limits::valid_angle(el.rotation_angle) {
        return Err(invalid("rotation must be finite"));
    }
    if let Some(url) = el.link.as_ref().and_then(|l| l.url.as_deref()) {
        if url.len() > limits::MAX_URL_LEN {
            return Err(invalid("link url too long"));
        }
    }
    Ok(())
}

pub(crate) fn validate_geometry(g: &PageGeometry) -> Result<(), StoryError> {
    if !limits::valid_geometry_dim(g.page_width) || !limits::valid_geometry_dim(g.page_height) {
        return Err(StoryError::InvalidGeometry("page size must be finite and positive"));
    }
    if !limits::valid_geometry_dim(g.fullbleed_ratio) {
        return Err(StoryError::InvalidGeometry("fullbleed ratio must be finite and positive"));
    }
    Ok(())
}
