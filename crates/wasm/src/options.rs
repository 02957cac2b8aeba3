//! Reading `SidebarConfig` from whatever the page passed in.
//!
//! Accepted: `undefined`/`null` (defaults), a JSON string, or a plain object
//! with the camelCase keys of `SidebarConfig`.

use docbar_core::SidebarConfig;
use wasm_bindgen::JsValue;

use crate::error::DocbarError;

pub fn parse_options(options: JsValue) -> Result<SidebarConfig, DocbarError> {
    if options.is_undefined() || options.is_null() {
        return Ok(SidebarConfig::default());
    }
    if let Some(json) = options.as_string() {
        return Ok(SidebarConfig::from_json(&json)?);
    }
    let config: SidebarConfig = serde_wasm_bindgen::from_value(options)?;
    config.validate()?;
    Ok(config)
}
