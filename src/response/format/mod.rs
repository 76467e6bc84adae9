//! One function per response format.
//!
//! Each function validates the status code, sets the `Content-Type` header,
//! commits the status, and then writes the body. When an error is returned
//! after the status was committed, the status and headers stand.
//!

mod html;
mod json;

#[cfg(feature = "template")]
mod template;

#[cfg(feature = "xml")]
mod xml;

pub use html::{html, text};
pub use json::json;

#[cfg(feature = "template")]
pub use template::template;

#[cfg(feature = "xml")]
pub use xml::xml;
