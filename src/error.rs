use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures when touching the browser document from the animation code.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type DomResult<T> = Result<T, DomError>;

pub fn window() -> DomResult<web_sys::Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> DomResult<web_sys::Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> DomResult<web_sys::HtmlElement> {
    document()?.body().ok_or(DomError::NoBody)
}

/// Viewport height in CSS pixels.
pub fn viewport_height() -> DomResult<f64> {
    window()?
        .inner_height()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerHeight is not a number".to_string()))
}
