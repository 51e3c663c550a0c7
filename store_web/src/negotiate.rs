use actix_web::{http::header, HttpRequest};

/// JSON is returned only to clients that ask for `application/json`
/// without also accepting `text/html`; browsers keep getting pages.
pub fn wants_json(req: &HttpRequest) -> bool {
    let Some(accept) = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    accept.contains("application/json") && !accept.contains("text/html")
}
