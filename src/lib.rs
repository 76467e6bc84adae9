//! Write JSON, XML, HTML, text, and template responses.
//!
//! Each helper sets the `Content-Type` header (with `charset=utf-8`), sets the
//! status code, and then writes the body to an open [`ResponseWriter`].
//!
//! ```
//! use respond::Recorder;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Greeting {
//!     one: &'static str,
//!     two: &'static str,
//! }
//!
//! let mut recorder = Recorder::new();
//! let greeting = Greeting { one: "hello", two: "world" };
//!
//! respond::json(&mut recorder, 299, &greeting)?;
//!
//! let response = recorder.into_response();
//!
//! assert_eq!(response.status().as_u16(), 299);
//! assert_eq!(response.headers()["content-type"], "application/json; charset=utf-8");
//! assert_eq!(response.body().as_ref(), b"{\"one\":\"hello\",\"two\":\"world\"}\n");
//! # Ok::<(), respond::Error>(())
//! ```
//!

pub mod error;
pub mod response;

#[doc(inline)]
pub use self::{
    error::{Error, Result},
    response::format::{html, json, text},
    response::{CHARSET, CONTENT_HTML, CONTENT_JSON, CONTENT_TEXT, CONTENT_TYPE, CONTENT_XML},
    response::{Recorder, ResponseWriter, set_content_type, write_status},
};

#[cfg(feature = "template")]
#[doc(inline)]
pub use self::response::format::template;

#[cfg(feature = "xml")]
#[doc(inline)]
pub use self::response::format::xml;

pub use http;
