use askama::Template;
use http::StatusCode;
use std::fmt;
use std::io::{self, Write};

use crate::response::{CONTENT_HTML, ResponseWriter, prepare};
use crate::{Error, Result};

/// Adapts an `io::Write` to `fmt::Write`, keeping the I/O error that caused a
/// write to fail.
///
struct FmtWriter<'a, W: ?Sized> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

/// Renders a pre-compiled template into the body with the content type
/// `text/html; charset=utf-8`.
///
/// The data a template renders is carried by the template value itself.
/// Output is streamed into the response as it is produced. If rendering fails
/// partway, the bytes written before the failure remain in the body.
///
pub fn template<W, S, T>(writer: &mut W, status: S, template: &T) -> Result<()>
where
    W: ResponseWriter + ?Sized,
    StatusCode: TryFrom<S>,
    <StatusCode as TryFrom<S>>::Error: Into<http::Error>,
    T: Template,
{
    prepare(writer, status, CONTENT_HTML)?;

    let mut adapter = FmtWriter {
        inner: writer,
        error: None,
    };

    match template.render_into(&mut adapter) {
        Ok(()) => Ok(()),
        Err(error) => Err(match adapter.error.take() {
            // The response failed, not the template.
            Some(source) => Error::from(source),
            None => Error::template(error),
        }),
    }
}

impl<W: Write + ?Sized> fmt::Write for FmtWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.error = Some(error);
                Err(fmt::Error)
            }
        }
    }
}
