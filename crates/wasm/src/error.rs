//! Error handling for WASM bindings.
//!
//! Converts assembly errors into JavaScript `Error` objects carrying a
//! `code` property.

use std::fmt;

use docbar_core::SidebarError;
use docbar_traits::DomError;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid sidebar configuration
    Config,
    /// The document rejected an operation
    Dom,
    /// Options could not be read from the JS value
    Options,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Options => "OPTIONS_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
#[derive(Debug)]
pub struct DocbarError {
    code: ErrorCode,
    message: String,
}

impl DocbarError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DocbarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl From<SidebarError> for DocbarError {
    fn from(err: SidebarError) -> Self {
        let code = match &err {
            SidebarError::Dom(_) => ErrorCode::Dom,
            SidebarError::Config(_) => ErrorCode::Config,
            SidebarError::Json(_) => ErrorCode::Options,
        };
        Self::new(code, err.to_string())
    }
}

impl From<DomError> for DocbarError {
    fn from(err: DomError) -> Self {
        Self::new(ErrorCode::Dom, err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for DocbarError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::new(ErrorCode::Options, err.to_string())
    }
}

impl From<DocbarError> for JsValue {
    fn from(err: DocbarError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();
        js_error.into()
    }
}
