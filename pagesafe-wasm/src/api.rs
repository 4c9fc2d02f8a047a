use crate::{LinkZone, Story};
use js_sys::{Array, Float64Array};
use pagesafe::geometry::math::rotated_corner_ys;
use pagesafe::{LinkZoneEvaluator, PageGeometry, PageOrder, PositionedElement};
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn decode_element(v: JsValue) -> Result<PositionedElement, JsValue> {
    serde_wasm_bindgen::from_value(v)
        .map_err(|e| error::invalid_element(format!("element could not be decoded: {}", e)))
}

fn check_geometry(w: f64, h: f64, ratio: f64) -> Result<PageGeometry, JsValue> {
    if !w.is_finite() { return Err(error::non_finite("page_width")); }
    if !h.is_finite() { return Err(error::non_finite("page_height")); }
    if !ratio.is_finite() { return Err(error::non_finite("fullbleed_ratio")); }
    let g = PageGeometry::new(w, h, ratio);
    // Runs the same positivity checks the document loader uses
    pagesafe::Story::try_new(g).map_err(error::from_story)?;
    Ok(g)
}

#[wasm_bindgen]
impl LinkZone {
    #[wasm_bindgen(constructor)]
    pub fn new(page_width: f64, page_height: f64, fullbleed_ratio: f64) -> LinkZone {
        LinkZone { inner: LinkZoneEvaluator::new(PageGeometry::new(page_width, page_height, fullbleed_ratio)) }
    }
    pub fn with_defaults() -> LinkZone {
        LinkZone { inner: LinkZoneEvaluator::default() }
    }
    pub fn create_res(page_width: f64, page_height: f64, fullbleed_ratio: f64) -> JsValue {
        match check_geometry(page_width, page_height, fullbleed_ratio) {
            Ok(g) => error::ok(LinkZone { inner: LinkZoneEvaluator::new(g) }.into()),
            Err(e) => e,
        }
    }

    pub fn limit(&self) -> f64 { self.inner.limit() }
    pub fn danger_zone_height(&self) -> f64 { self.inner.danger_zone_height() }

    /// Undecodable input counts as "no link".
    pub fn is_link_below_limit(&self, element: JsValue) -> bool {
        decode_element(element).map_or(false, |el| self.inner.is_link_below_limit(&el))
    }
    pub fn is_link_below_limit_res(&self, element: JsValue) -> JsValue {
        match decode_element(element) {
            Ok(el) => error::ok(JsValue::from_bool(self.inner.is_link_below_limit(&el))),
            Err(e) => e,
        }
    }
    /// Name of the first offending corner, or null.
    pub fn first_corner(&self, element: JsValue) -> JsValue {
        decode_element(element)
            .ok()
            .and_then(|el| self.inner.first_corner_below_limit(&el))
            .map_or(JsValue::NULL, |c| JsValue::from_str(c.as_str()))
    }
    /// Rotated corner positions before the danger zone shift; null when undecodable.
    pub fn corner_ys(&self, element: JsValue) -> Option<Float64Array> {
        let el = decode_element(element).ok()?;
        let ys = rotated_corner_ys(el.y, el.width, el.height, el.rotation_angle);
        Some(crate::interop::arr_f64(&ys))
    }
    /// `[top, bottom]` of the box after the danger zone shift; null when undecodable.
    pub fn extent(&self, element: JsValue) -> Option<Float64Array> {
        let el = decode_element(element).ok()?;
        let (top, bottom) = self.inner.shifted_extent(&el);
        Some(crate::interop::arr_f64(&[top, bottom]))
    }
}

#[wasm_bindgen]
impl Story {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Story {
        crate::Story::rs_new()
    }
    pub fn with_geometry_res(page_width: f64, page_height: f64, fullbleed_ratio: f64) -> JsValue {
        match check_geometry(page_width, page_height, fullbleed_ratio) {
            Ok(g) => error::ok(Story { inner: pagesafe::Story::new(g) }.into()),
            Err(e) => e,
        }
    }
    pub fn from_json_res(text: &str) -> JsValue {
        match pagesafe::Story::from_json_str(text) {
            Ok(inner) => error::ok(Story { inner }.into()),
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!("story load failed: {}", e)));
                error::from_story(e)
            }
        }
    }
    pub fn to_json(&self) -> String {
        self.inner.to_json_string()
    }
    pub fn version(&self) -> u64 {
        self.rs_version()
    }

    // Pages
    pub fn add_page(&mut self, id: &str) -> bool {
        self.inner.add_page(id).is_ok()
    }
    pub fn add_page_res(&mut self, id: &str) -> JsValue {
        match self.inner.add_page(id) {
            Ok(idx) => error::ok(JsValue::from_f64(idx as f64)),
            Err(e) => error::from_story(e),
        }
    }
    pub fn remove_page(&mut self, id: &str) -> bool {
        self.inner.remove_page(id).is_ok()
    }
    pub fn page_count(&self) -> u32 {
        self.inner.page_count() as u32
    }
    pub fn page_ids(&self) -> Array {
        crate::interop::arr_str(self.inner.page_ids())
    }
    pub fn current_page_index(&self) -> u32 {
        self.inner.current_page_index() as u32
    }
    pub fn set_current_page(&mut self, id: &str) -> bool {
        self.inner.set_current_page(id).is_ok()
    }
    pub fn set_current_page_res(&mut self, id: &str) -> JsValue {
        match self.inner.set_current_page(id) {
            Ok(()) => error::ok(JsValue::from_f64(self.inner.current_page_index() as f64)),
            Err(e) => error::from_story(e),
        }
    }
    pub fn arrange_page(&mut self, id: &str, position: u32) -> bool {
        self.inner.arrange_page(id, position as usize).is_ok()
    }
    pub fn arrange_page_res(&mut self, id: &str, position: u32) -> JsValue {
        match self.inner.arrange_page(id, position as usize) {
            Ok(()) => error::ok(self.page_ids().into()),
            Err(e) => error::from_story(e),
        }
    }

    // Elements
    pub fn add_element_res(&mut self, page_id: &str, element: JsValue) -> JsValue {
        let el = match decode_element(element) {
            Ok(el) => el,
            Err(e) => return e,
        };
        match self.inner.add_element(page_id, el) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::from_story(e),
        }
    }
    pub fn remove_element(&mut self, page_id: &str, element_id: &str) -> bool {
        self.inner.remove_element(page_id, element_id).is_ok()
    }

    // Checklist
    pub fn link_issues(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.link_zone_issues()).unwrap_or(JsValue::NULL)
    }
    pub fn page_has_link_issues(&self, page_id: &str) -> Option<bool> {
        self.inner.page_has_link_issues(page_id)
    }
}

impl Default for Story {
    fn default() -> Self {
        Story::new()
    }
}
