use axum::http::{header, HeaderMap};

use crate::games::wordle::SessionId;

pub const COOKIE: &str = "wordle_session";

/// The session id carried by the request's cookies, if any parses.
pub fn from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE)
        .and_then(|(_, value)| value.parse().ok())
}

pub fn set_cookie(id: SessionId) -> String {
    format!("{COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn clear_cookie() -> String {
    format!("{COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderMap, HeaderValue};
    use pretty_assertions::assert_eq;

    use super::{clear_cookie, from_headers, set_cookie};
    use crate::games::wordle::SessionId;

    fn headers(cookies: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for &cookie in cookies {
            headers.append(header::COOKIE, HeaderValue::from_static(cookie));
        }
        headers
    }

    #[test]
    fn finds_session_among_cookies() {
        let headers = headers(&["theme=dark; wordle_session=1234; other=x"]);

        assert_eq!(from_headers(&headers), Some(SessionId::new(1234)));
    }

    #[test]
    fn searches_every_cookie_header() {
        let headers = headers(&["theme=dark", "wordle_session=42"]);

        assert_eq!(from_headers(&headers), Some(SessionId::new(42)));
    }

    #[test]
    fn missing_or_garbage() {
        assert_eq!(from_headers(&HeaderMap::new()), None);
        assert_eq!(from_headers(&headers(&["wordle_session=abc"])), None);
        assert_eq!(from_headers(&headers(&["wordle_session="])), None);
        assert_eq!(from_headers(&headers(&["session=1"])), None);
    }

    #[test]
    fn cookie_round_trip() {
        let id = SessionId::new(987_654_321);
        let cookie = set_cookie(id);

        let pair = cookie.split(';').next().unwrap().to_owned();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(&pair).unwrap());

        assert_eq!(from_headers(&headers), Some(id));
        assert!(clear_cookie().contains("Max-Age=0"));
    }
}
