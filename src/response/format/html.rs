use http::StatusCode;

use crate::Result;
use crate::response::{CONTENT_HTML, CONTENT_TEXT, ResponseWriter, prepare};

/// Writes `data` verbatim with the content type `text/html; charset=utf-8`.
///
pub fn html<W, S, B>(writer: &mut W, status: S, data: B) -> Result<()>
where
    W: ResponseWriter + ?Sized,
    StatusCode: TryFrom<S>,
    <StatusCode as TryFrom<S>>::Error: Into<http::Error>,
    B: AsRef<[u8]>,
{
    prepare(writer, status, CONTENT_HTML)?;
    writer.write_all(data.as_ref())?;

    Ok(())
}

/// Writes `data` verbatim with the content type `text/plain; charset=utf-8`.
///
pub fn text<W, S, B>(writer: &mut W, status: S, data: B) -> Result<()>
where
    W: ResponseWriter + ?Sized,
    StatusCode: TryFrom<S>,
    <StatusCode as TryFrom<S>>::Error: Into<http::Error>,
    B: AsRef<[u8]>,
{
    prepare(writer, status, CONTENT_TEXT)?;
    writer.write_all(data.as_ref())?;

    Ok(())
}
