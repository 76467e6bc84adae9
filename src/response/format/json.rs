use http::StatusCode;
use serde::Serialize;

use crate::Result;
use crate::response::{CONTENT_JSON, ResponseWriter, prepare};

/// Writes `payload` as JSON followed by a newline with the content type
/// `application/json; charset=utf-8`.
///
/// The payload is encoded before any byte of the body is written. If encoding
/// fails, the body is left empty.
///
pub fn json<W, S, T>(writer: &mut W, status: S, payload: &T) -> Result<()>
where
    W: ResponseWriter + ?Sized,
    StatusCode: TryFrom<S>,
    <StatusCode as TryFrom<S>>::Error: Into<http::Error>,
    T: Serialize + ?Sized,
{
    prepare(writer, status, CONTENT_JSON)?;

    let mut body = serde_json::to_vec(payload)?;

    body.push(b'\n');
    writer.write_all(&body)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use http::header::CONTENT_TYPE;
    use serde::Serialize;
    use serde_json::json as value;
    use std::collections::HashMap;

    use super::json;
    use crate::response::format::fixtures::Channel;
    use crate::response::{CHARSET, CONTENT_JSON, Recorder};

    #[derive(Serialize)]
    struct Greeting {
        one: &'static str,
        two: &'static str,
    }

    #[test]
    fn test_json() {
        let mut recorder = Recorder::new();
        let greeting = Greeting {
            one: "hello",
            two: "world",
        };

        json(&mut recorder, 299, &greeting).unwrap();

        let response = recorder.into_response();
        let expected = format!("{}; charset={}", CONTENT_JSON, CHARSET);

        assert_eq!(response.status().as_u16(), 299);
        assert_eq!(response.headers()[CONTENT_TYPE], expected.as_str());
        assert_eq!(
            response.body().as_ref(),
            b"{\"one\":\"hello\",\"two\":\"world\"}\n"
        );
    }

    #[test]
    fn test_json_value() {
        let mut recorder = Recorder::new();

        let payload = value!({ "ok": true, "items": [1, 2] });

        json(&mut recorder, 200, &payload).unwrap();

        assert_eq!(recorder.body(), b"{\"items\":[1,2],\"ok\":true}\n");
    }

    #[test]
    fn test_json_status() {
        let mut recorder = Recorder::new();

        json(&mut recorder, StatusCode::CREATED, &1).unwrap();

        assert_eq!(recorder.status(), StatusCode::CREATED);
        assert_eq!(recorder.body(), b"1\n");

        let mut recorder = Recorder::new();
        let error = json(&mut recorder, 1000, &1).unwrap_err();

        assert!(error.is_http(), "expected an http error, got {:?}", error);
        assert!(!recorder.is_committed());
    }

    #[test]
    fn test_json_error() {
        let mut recorder = Recorder::new();
        let error = json(&mut recorder, 200, &Channel).unwrap_err();

        assert!(
            error.is_encode(),
            "expected an encode error, got {:?}",
            error
        );
        assert!(recorder.body().is_empty(), "no body should be written");
    }

    #[test]
    fn test_json_non_string_keys() {
        let mut recorder = Recorder::new();
        let payload = HashMap::from([(vec![1u8], "one")]);

        let error = json(&mut recorder, 200, &payload).unwrap_err();

        assert!(error.is_encode());
        assert_eq!(
            recorder.status().as_u16(),
            200,
            "the status is committed before the payload is encoded"
        );
    }
}
