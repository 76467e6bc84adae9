use http::StatusCode;
use serde::Serialize;

use crate::response::{CONTENT_XML, ResponseWriter, prepare};
use crate::{Error, Result};

/// Writes `payload` as XML with the content type
/// `application/xml; charset=utf-8`.
///
/// The root element is named after the serialized type. Unlike [`json`], no
/// newline follows the document.
///
/// [`json`]: crate::json
///
pub fn xml<W, S, T>(writer: &mut W, status: S, payload: &T) -> Result<()>
where
    W: ResponseWriter + ?Sized,
    StatusCode: TryFrom<S>,
    <StatusCode as TryFrom<S>>::Error: Into<http::Error>,
    T: Serialize + ?Sized,
{
    prepare(writer, status, CONTENT_XML)?;

    let body = quick_xml::se::to_string(payload).map_err(Error::encode)?;

    writer.write_all(body.as_bytes())?;
    Ok(())
}
