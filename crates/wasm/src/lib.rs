//! WebAssembly bindings for docbar.
//!
//! Rearranges the cross-links and local table of contents of a generated
//! documentation page into a sidebar, directly in the browser.
//!
//! # Architecture
//!
//! The assembler itself lives in `docbar-core` and is generic over
//! `DomTree`. This crate supplies [`WebDom`], the `web_sys` implementation,
//! and the entry points the page calls.
//!
//! Nothing runs on module load except the panic hook: the page decides when
//! the sidebar is assembled, either by calling [`assemble_sidebar`] with its
//! document or by calling [`install`] once from a script tag.
//!
//! ## Module Structure
//!
//! - [`dom`] - `DomTree` over `web_sys::Document`
//! - [`options`] - configuration from JS values
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { install } from '@docbar/wasm';
//!
//! await init();
//! install({ menuClass: 'sectionTOCS' });
//! ```

pub mod dom;
pub mod error;
pub mod options;

pub use dom::WebDom;
pub use error::{DocbarError, ErrorCode};

use docbar_core::{SidebarAssembler, SidebarConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element};

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the docbar-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn run(document: &Document, config: SidebarConfig) -> Result<Element, DocbarError> {
    let dom = WebDom::new(document.clone());
    let assembly = SidebarAssembler::new(&dom).with_config(config).assemble()?;
    assembly
        .sidebar
        .dyn_into::<Element>()
        .map_err(|_| DocbarError::dom("assembled sidebar is not an element"))
}

/// Assemble the sidebar of `document` and return it.
///
/// `options` may be `undefined`, a JSON string or a plain object. Calling this
/// twice on the same document appends a second sidebar.
#[wasm_bindgen(js_name = assembleSidebar)]
pub fn assemble_sidebar(document: &Document, options: JsValue) -> Result<Element, JsValue> {
    let config = options::parse_options(options)?;
    Ok(run(document, config)?)
}

/// Assemble the sidebar of the global document once it has been parsed.
///
/// Runs immediately when parsing is already complete, otherwise from a
/// one-shot `DOMContentLoaded` listener.
#[wasm_bindgen]
pub fn install(options: JsValue) -> Result<(), JsValue> {
    let config = options::parse_options(options)?;
    let document = WebDom::from_window().map_err(DocbarError::from)?.document().clone();

    if document.ready_state() != "loading" {
        run(&document, config)?;
        return Ok(());
    }
    defer(&document, config)
}

/// Assemble the sidebar of `document` on its next `DOMContentLoaded` event.
///
/// Options are checked now. Errors raised later from the listener go to the
/// browser console, there is no caller left to return them to.
#[wasm_bindgen(js_name = assembleOnContentLoaded)]
pub fn assemble_on_content_loaded(document: &Document, options: JsValue) -> Result<(), JsValue> {
    let config = options::parse_options(options)?;
    defer(document, config)
}

fn defer(document: &Document, config: SidebarConfig) -> Result<(), JsValue> {
    let target = document.clone();
    let handler = Closure::once(move || {
        if let Err(err) = run(&target, config) {
            log::error!("Sidebar assembly failed: {}", err);
            web_sys::console::error_1(&JsValue::from(err));
        }
    });
    let listener_options = AddEventListenerOptions::new();
    listener_options.set_once(true);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        handler.as_ref().unchecked_ref(),
        &listener_options,
    )?;
    handler.forget();
    Ok(())
}
