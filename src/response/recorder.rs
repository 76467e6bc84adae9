use bytes::{Bytes, BytesMut};
use http::{HeaderMap, StatusCode};
use std::io::{self, Write};

use super::ResponseWriter;

/// An in-memory [`ResponseWriter`] that records the status, headers, and body
/// of a response.
///
/// The headers are captured when the response head is committed. Edits made
/// to the header map after that point do not change the recorded response.
///
#[derive(Debug, Default)]
pub struct Recorder {
    headers: HeaderMap,
    head: Option<(StatusCode, HeaderMap)>,
    body: BytesMut,
}

impl Recorder {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns true if the status and headers of the response are committed.
    ///
    pub fn is_committed(&self) -> bool {
        self.head.is_some()
    }

    /// Returns the committed status or `200 OK` if the head is not committed.
    ///
    pub fn status(&self) -> StatusCode {
        match &self.head {
            Some((status, _)) => *status,
            None => StatusCode::OK,
        }
    }

    /// Returns the committed headers or the pending headers if the head is not
    /// committed.
    ///
    pub fn headers(&self) -> &HeaderMap {
        match &self.head {
            Some((_, headers)) => headers,
            None => &self.headers,
        }
    }

    /// Returns the bytes written to the body so far.
    ///
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the recorder and returns the recorded response.
    ///
    pub fn into_response(self) -> http::Response<Bytes> {
        let (status, headers) = match self.head {
            Some(head) => head,
            None => (StatusCode::OK, self.headers),
        };

        let mut response = http::Response::new(self.body.freeze());

        *response.status_mut() = status;
        *response.headers_mut() = headers;

        response
    }

    fn commit(&mut self, status: StatusCode) {
        self.head = Some((status, self.headers.clone()));
    }
}

impl ResponseWriter for Recorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        if self.head.is_some() {
            tracing::debug!("headers borrowed after the response head was committed");
        }

        &mut self.headers
    }

    fn set_status(&mut self, status: StatusCode) {
        if let Some((committed, _)) = &self.head {
            tracing::debug!(%status, %committed, "ignoring superfluous status");
        } else {
            self.commit(status);
        }
    }
}

impl Write for Recorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.head.is_none() {
            self.commit(StatusCode::OK);
        }

        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
