use wasm_bindgen::prelude::*;
use pagesafe::StoryError;

use crate::interop::obj;

fn s(v: &str) -> Option<JsValue> { Some(JsValue::from_str(v)) }
fn n(v: f64) -> Option<JsValue> { Some(JsValue::from_f64(v)) }

pub fn ok(v: JsValue) -> JsValue {
    obj([("ok", Some(JsValue::from_bool(true))), ("value", Some(v))])
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let detail = obj([("code", s(code)), ("message", s(&message.into())), ("data", data)]);
    obj([("ok", Some(JsValue::from_bool(false))), ("error", Some(detail))])
}

pub fn non_finite(param: &str) -> JsValue {
    err("non_finite", format!("parameter '{}' must be finite", param), Some(obj([("param", s(param))])))
}

pub fn invalid_element(message: impl Into<String>) -> JsValue {
    err("invalid_element", message, None)
}

/// Maps a core error onto its stable code, keeping ids in `data` where present.
pub fn from_story(e: StoryError) -> JsValue {
    let data = match &e {
        StoryError::UnknownPage(id) | StoryError::DuplicatePage(id) => {
            Some(obj([("kind", s("page")), ("id", s(id))]))
        }
        StoryError::UnknownElement { page, element } | StoryError::DuplicateElement { page, element } => {
            Some(obj([("kind", s("element")), ("page", s(page)), ("id", s(element))]))
        }
        StoryError::PositionOutOfRange { position, len } => Some(obj([
            ("param", s("position")),
            ("min", n(0.0)),
            ("max", n(len.saturating_sub(1) as f64)),
            ("got", n(*position as f64)),
        ])),
        StoryError::InvalidElement { id, reason } => Some(obj([("id", s(id)), ("reason", s(reason))])),
        _ => None,
    };
    err(e.code(), e.to_string(), data)
}
