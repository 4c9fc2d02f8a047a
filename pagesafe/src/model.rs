use serde::{Deserialize, Serialize};

/// Fraction of the full-bleed height where the danger zone begins.
pub const DANGER_ZONE_TOP_RATIO: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub fullbleed_ratio: f64,
}

impl PageGeometry {
    pub const fn new(page_width: f64, page_height: f64, fullbleed_ratio: f64) -> Self {
        Self { page_width, page_height, fullbleed_ratio }
    }

    /// Height of the renderable area including the bleed margins.
    pub fn fullbleed_height(&self) -> f64 {
        self.page_width / self.fullbleed_ratio
    }

    /// Band between the safe page and the full-bleed edge, on each side.
    pub fn danger_zone_height(&self) -> f64 {
        (self.fullbleed_height() - self.page_height) / 2.0
    }

    /// Top of the danger zone, measured from the page top.
    pub fn link_limit(&self) -> f64 {
        self.fullbleed_height() * DANGER_ZONE_TOP_RATIO
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::new(412.0, 732.0, 9.0 / 16.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: Some(url.into()) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedElement {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, clockwise positive. Not required to be normalized.
    #[serde(default)]
    pub rotation_angle: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl PositionedElement {
    pub fn new(id: impl Into<String>, y: f64, width: f64, height: f64) -> Self {
        Self { id: id.into(), y, width, height, ..Self::default() }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_angle = degrees;
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    /// True when a link with a non-empty url is attached.
    pub fn has_link(&self) -> bool {
        self.link
            .as_ref()
            .and_then(|link| link.url.as_deref())
            .map_or(false, |url| !url.is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    UpperLeft = 0,
    UpperRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] =
        [Corner::UpperLeft, Corner::UpperRight, Corner::BottomRight, Corner::BottomLeft];

    /// Unrotated offset from the rotation anchor, as (width, height) signs.
    pub fn offset_signs(self) -> (f64, f64) {
        match self {
            Corner::UpperLeft => (-1.0, -1.0),
            Corner::UpperRight => (1.0, -1.0),
            Corner::BottomRight => (1.0, 1.0),
            Corner::BottomLeft => (-1.0, 1.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Corner::UpperLeft => "upperLeft",
            Corner::UpperRight => "upperRight",
            Corner::BottomRight => "bottomRight",
            Corner::BottomLeft => "bottomLeft",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), elements: Vec::new() }
    }

    pub fn element(&self, id: &str) -> Option<&PositionedElement> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// One element whose link overlay reaches into the danger zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkZoneIssue {
    pub page_id: String,
    pub element_id: String,
    pub corner: Corner,
    /// Corner position with the danger zone height already added.
    pub corner_y: f64,
    pub limit: f64,
}
