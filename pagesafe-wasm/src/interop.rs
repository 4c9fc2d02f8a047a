use js_sys::{Array, Float64Array, Object, Reflect};
use wasm_bindgen::JsValue;

/// Plain JS object from key/value pairs; `None` values are left out.
pub fn obj<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<JsValue>)>) -> JsValue {
    let o = Object::new();
    for (k, v) in pairs {
        if let Some(v) = v {
            let _ = Reflect::set(&o, &JsValue::from_str(k), &v);
        }
    }
    o.into()
}
pub fn arr_f64(slice: &[f64]) -> Float64Array {
    let arr = Float64Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn arr_str<'a>(items: impl IntoIterator<Item = &'a str>) -> Array {
    items.into_iter().map(JsValue::from_str).collect()
}
