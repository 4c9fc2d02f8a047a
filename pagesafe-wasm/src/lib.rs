use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct LinkZone { pub(crate) inner: pagesafe::LinkZoneEvaluator }

#[wasm_bindgen]
pub struct Story { pub(crate) inner: pagesafe::Story }

impl Story {
    pub fn rs_new() -> Story { Story { inner: pagesafe::Story::default() } }
    pub fn rs_version(&self) -> u64 { self.inner.version() }
}
