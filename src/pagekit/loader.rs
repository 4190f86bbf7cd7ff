//! Page property loaders and the server injected props payload.

use chrono::{DateTime, Local};
use gloo::utils::window;
use serde_json::Value;
use web_sys::{js_sys, wasm_bindgen::JsValue};

use crate::error::{PropsError, Result};
use crate::pages::{about::AboutProps, home::HomeProps, index::IndexProps};

/// Global the server assigns the page props to before the bundle runs.
pub const PAGE_PROPS_KEY: &str = "PAGE_PROPS";

pub fn load_home() -> HomeProps {
    HomeProps::default()
}

pub fn load_index(route: &str) -> IndexProps {
    load_index_at(route, Local::now())
}

pub fn load_index_at(route: &str, now: DateTime<Local>) -> IndexProps {
    IndexProps {
        route: route.to_string(),
        time: now.to_string(),
    }
}

pub fn load_about() -> AboutProps {
    AboutProps {
        description: "This is the about page".to_string(),
    }
}

pub fn parse_props(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Reads `window.PAGE_PROPS`. Only meaningful in the browser.
pub fn injected_props() -> Result<Option<Value>> {
    let target: JsValue = window().into();
    let key = JsValue::from_str(PAGE_PROPS_KEY);
    let value = js_sys::Reflect::get(&target, &key).map_err(|_| PropsError::Unavailable)?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let text = js_sys::JSON::stringify(&value)
        .map_err(|_| PropsError::Unavailable)?
        .as_string()
        .ok_or(PropsError::Unavailable)?;
    parse_props(&text).map(Some)
}
