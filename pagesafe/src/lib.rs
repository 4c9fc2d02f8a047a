//! Page-safety geometry for a visual story editor.
//!
//! The core check is [`LinkZoneEvaluator`]: given a rotatable element with an
//! optional link, it reports whether the element's box reaches into the band
//! near the bottom of the full-bleed page where link overlays get clipped.
//! [`Story`] holds ordered pages so the checklist can scan a whole document.

pub mod error;
pub mod model;
pub mod story;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
}
pub mod checks {
    pub mod checklist;
    pub mod link_zone;
}
mod json;

pub use checks::checklist::link_zone_issues;
pub use checks::link_zone::{is_link_below_limit, LinkZoneEvaluator};
pub use error::StoryError;
pub use json::DOC_VERSION;
pub use model::{Corner, Link, LinkZoneIssue, Page, PageGeometry, PositionedElement};
pub use story::{PageOrder, Story};
