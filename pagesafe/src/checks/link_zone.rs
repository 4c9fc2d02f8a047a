//! Danger-zone check for link overlays.
//!
//! A link affordance is drawn over its element; when any corner of the
//! element's rotated box reaches into the band near the bottom of the
//! full-bleed area, the editor UI chrome may clip or hide it.

use crate::geometry::math::{deg_to_rad, rotated_corner_y, vertical_extent};
use crate::model::{Corner, PageGeometry, PositionedElement};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkZoneEvaluator {
    geometry: PageGeometry,
    limit: f64,
    danger_zone: f64,
}

impl LinkZoneEvaluator {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            limit: geometry.link_limit(),
            danger_zone: geometry.danger_zone_height(),
        }
    }

    pub fn geometry(&self) -> PageGeometry { self.geometry }
    pub fn limit(&self) -> f64 { self.limit }
    pub fn danger_zone_height(&self) -> f64 { self.danger_zone }

    /// True when the element carries a link and one of its corners sits past the limit.
    pub fn is_link_below_limit(&self, element: &PositionedElement) -> bool {
        self.first_corner_below_limit(element).is_some()
    }

    /// First corner, in upper-left .. bottom-left order, that crosses the limit.
    ///
    /// Returns `None` without touching the geometry when there is no usable link.
    /// NaN coordinates never compare greater, so they yield `None` as well.
    pub fn first_corner_below_limit(&self, element: &PositionedElement) -> Option<Corner> {
        self.first_offending(element).map(|(corner, _)| corner)
    }

    /// Corner positions relative to the danger zone: the raw rotated Y plus the zone height.
    pub fn shifted_corner_ys(&self, element: &PositionedElement) -> [f64; 4] {
        let (sin, cos) = deg_to_rad(element.rotation_angle).sin_cos();
        Corner::ALL.map(|c| {
            rotated_corner_y(c, element.y, element.width, element.height, sin, cos) + self.danger_zone
        })
    }

    /// Top and bottom of the shifted box, for drawing the intrusion against the limit.
    pub fn shifted_extent(&self, element: &PositionedElement) -> (f64, f64) {
        vertical_extent(&self.shifted_corner_ys(element))
    }

    pub(crate) fn first_offending(&self, element: &PositionedElement) -> Option<(Corner, f64)> {
        if !element.has_link() {
            return None;
        }
        let shifted = self.shifted_corner_ys(element);
        Corner::ALL
            .into_iter()
            .zip(shifted)
            .find(|&(_, y)| y > self.limit)
    }
}

impl Default for LinkZoneEvaluator {
    fn default() -> Self { Self::new(PageGeometry::default()) }
}

/// One-shot form of [`LinkZoneEvaluator::is_link_below_limit`].
pub fn is_link_below_limit(element: &PositionedElement, geometry: &PageGeometry) -> bool {
    LinkZoneEvaluator::new(*geometry).is_link_below_limit(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Link;

    #[test]
    fn evaluator_precomputes_zone() {
        let ev = LinkZoneEvaluator::default();
        let fb = 412.0 / (9.0 / 16.0);
        assert_eq!(ev.limit(), fb * 0.8);
        assert_eq!(ev.danger_zone_height(), (fb - 732.0) / 2.0);
    }

    #[test]
    fn reports_first_offending_corner() {
        let ev = LinkZoneEvaluator::default();
        // Tilted box whose right side dips below the limit first
        let el = PositionedElement::new("e", 525.0, 200.0, 20.0)
            .with_rotation(30.0)
            .with_link(Link::new("https://example.com"));
        assert_eq!(ev.first_corner_below_limit(&el), Some(Corner::UpperRight));
    }

    #[test]
    fn extent_tracks_rotated_box() {
        let ev = LinkZoneEvaluator::new(PageGeometry::new(1000.0, 1000.0, 1.0));
        let level = PositionedElement::new("e", 100.0, 40.0, 20.0);
        assert_eq!(ev.shifted_extent(&level), (110.0, 130.0));
        // Quarter turn: the width now spans the vertical axis
        let (lo, hi) = ev.shifted_extent(&level.clone().with_rotation(90.0));
        assert!((lo - 100.0).abs() < 1e-9 && (hi - 140.0).abs() < 1e-9);
        assert!(ev.shifted_extent(&PositionedElement::new("n", f64::NAN, 1.0, 1.0)).0.is_nan());
    }
}
