use tracing::debug;

use crate::checks::link_zone::LinkZoneEvaluator;
use crate::model::{LinkZoneIssue, Page};
use crate::story::Story;

/// Issues for a single page, in element order.
pub fn page_link_zone_issues(ev: &LinkZoneEvaluator, page: &Page) -> Vec<LinkZoneIssue> {
    page.elements
        .iter()
        .filter_map(|el| {
            ev.first_offending(el).map(|(corner, corner_y)| LinkZoneIssue {
                page_id: page.id.clone(),
                element_id: el.id.clone(),
                corner,
                corner_y,
                limit: ev.limit(),
            })
        })
        .collect()
}

/// Walks every page in story order and collects links that reach the danger zone.
pub fn link_zone_issues(story: &Story) -> Vec<LinkZoneIssue> {
    let ev = LinkZoneEvaluator::new(story.geometry());
    let issues: Vec<LinkZoneIssue> = story
        .pages()
        .iter()
        .flat_map(|page| page_link_zone_issues(&ev, page))
        .collect();
    debug!(pages = story.page_count(), issues = issues.len(), "link zone scan");
    issues
}

impl Story {
    pub fn link_zone_issues(&self) -> Vec<LinkZoneIssue> { link_zone_issues(self) }

    /// `None` when the page does not exist.
    pub fn page_has_link_issues(&self, page_id: &str) -> Option<bool> {
        let ev = LinkZoneEvaluator::new(self.geometry);
        self.page(page_id)
            .map(|p| p.elements.iter().any(|el| ev.is_link_below_limit(el)))
    }
}
