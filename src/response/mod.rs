//! Response targets and the helpers shared by each format.
//!

pub mod format;

mod recorder;

pub use recorder::Recorder;

use http::StatusCode;
use http::header::{self, HeaderMap, HeaderValue};
use std::io::Write;

use crate::{Error, Result};

/// The charset parameter appended to every `Content-Type` header.
///
pub const CHARSET: &str = "utf-8";

/// The name of the content type header.
///
pub const CONTENT_TYPE: &str = "Content-Type";

pub const CONTENT_JSON: &str = "application/json";
pub const CONTENT_XML: &str = "application/xml";
pub const CONTENT_HTML: &str = "text/html";
pub const CONTENT_TEXT: &str = "text/plain";

/// An open response that accepts a status, headers, and body bytes.
///
/// The status and headers are committed when either the status is set or the
/// first byte of the body is written. Changes to the header map after that
/// point are not sent.
///
pub trait ResponseWriter: Write {
    /// Returns a mutable reference to the headers that will be sent with the
    /// response.
    ///
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Sets the status of the response and commits the response head.
    ///
    fn set_status(&mut self, status: StatusCode);
}

impl<T: ResponseWriter + ?Sized> ResponseWriter for &mut T {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }

    fn set_status(&mut self, status: StatusCode) {
        (**self).set_status(status);
    }
}

/// Sets the `Content-Type` header of the response to `mime` with a
/// `charset=utf-8` parameter.
///
pub fn set_content_type<W>(writer: &mut W, mime: &str) -> Result<()>
where
    W: ResponseWriter + ?Sized,
{
    let value = HeaderValue::try_from(format!("{}; charset={}", mime, CHARSET))?;

    writer.headers_mut().insert(header::CONTENT_TYPE, value);
    Ok(())
}

/// Sets the status of the response.
///
/// Accepts a `StatusCode` or a `u16`. Returns an error if a `u16` is not in the
/// range `100..=999`.
///
pub fn write_status<W, S>(writer: &mut W, status: S) -> Result<()>
where
    W: ResponseWriter + ?Sized,
    StatusCode: TryFrom<S>,
    <StatusCode as TryFrom<S>>::Error: Into<http::Error>,
{
    writer.set_status(to_status_code(status)?);
    Ok(())
}

/// Validates `status` and then sets the content type and status of the
/// response, in that order.
///
pub(crate) fn prepare<W, S>(writer: &mut W, status: S, mime: &str) -> Result<()>
where
    W: ResponseWriter + ?Sized,
    StatusCode: TryFrom<S>,
    <StatusCode as TryFrom<S>>::Error: Into<http::Error>,
{
    // Reject an invalid status before anything is sent.
    let status = to_status_code(status)?;

    set_content_type(writer, mime)?;
    writer.set_status(status);

    Ok(())
}

fn to_status_code<S>(status: S) -> Result<StatusCode>
where
    StatusCode: TryFrom<S>,
    <StatusCode as TryFrom<S>>::Error: Into<http::Error>,
{
    StatusCode::try_from(status).map_err(|error| {
        let error: http::Error = error.into();
        Error::from(error)
    })
}
