//! HTTP request type.

use std::collections::HashMap;

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    Post,
    /// PUT method
    Put,
    /// PATCH method
    Patch,
    /// DELETE method
    Delete,
    /// HEAD method
    Head,
    /// OPTIONS method
    Options,
}

impl Method {
    /// Parses a method name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            _ => None,
        }
    }

    /// Returns the method as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An HTTP request.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Request path.
    pub path: String,
    /// Query string parameters.
    pub query: HashMap<String, String>,
    /// Decoded `application/x-www-form-urlencoded` body fields.
    pub form: HashMap<String, String>,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Vec<u8>,
}

impl Request {
    /// Creates a new request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: HashMap::new(),
            form: HashMap::new(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Creates a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets a form field, as if it had been posted in the body.
    #[must_use]
    pub fn form_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }

    /// Decodes the body into [`Request::form`] when it is url-encoded.
    ///
    /// Bodies with any other content type are left alone.
    #[must_use]
    pub fn with_parsed_form(mut self) -> Self {
        let is_form = self
            .get_header("Content-Type")
            .is_some_and(|ct| ct.to_ascii_lowercase().starts_with(FORM_CONTENT_TYPE));
        if is_form {
            let body = String::from_utf8_lossy(&self.body).into_owned();
            self.form.extend(Self::parse_query_string(&body));
        }
        self
    }

    /// Gets a header value.
    pub fn get_header(&self, key: &str) -> Option<&str> {
        // Case-insensitive header lookup
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Looks up a request input: posted form fields win over the query string.
    pub fn input(&self, key: &str) -> Option<&str> {
        self.form
            .get(key)
            .or_else(|| self.query.get(key))
            .map(String::as_str)
    }

    /// Looks up a query string parameter, ignoring the form body.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Returns the body as a string.
    pub fn body_string(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }

    /// Parses the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Parses query parameters from a query string.
    pub fn parse_query_string(query: &str) -> HashMap<String, String> {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (url_decode(key), url_decode(value))
            })
            .collect()
    }
}

/// Decodes a `application/x-www-form-urlencoded` component.
///
/// Percent escapes are collected as bytes, so multi-byte UTF-8 sequences
/// survive. Malformed escapes are kept literally.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let decoded = bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                if let Some(byte) = decoded {
                    out.push(byte);
                    i += 3;
                    continue;
                }
                out.push(b'%');
            }
            b'+' => out.push(b' '),
            b => out.push(b),
        }
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encodes a query string component.
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through.
pub fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!(Method::parse("GET"), Some(Method::Get));
        assert_eq!(Method::parse("post"), Some(Method::Post));
        assert_eq!(Method::parse("INVALID"), None);
    }

    #[test]
    fn test_request_builder() {
        let req = Request::get("/users")
            .header("Content-Type", "application/json")
            .query_param("page", "1");

        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/users");
        assert_eq!(req.get_header("content-type"), Some("application/json"));
        assert_eq!(req.input("page"), Some("1"));
    }

    #[test]
    fn test_query_string_parsing() {
        let query = Request::parse_query_string("name=John+Doe&age=30&city=New%20York&flag");
        assert_eq!(query.get("name"), Some(&"John Doe".to_string()));
        assert_eq!(query.get("age"), Some(&"30".to_string()));
        assert_eq!(query.get("city"), Some(&"New York".to_string()));
        assert_eq!(query.get("flag"), Some(&String::new()));
    }

    #[test]
    fn test_decode_multibyte() {
        assert_eq!(url_decode("caf%C3%A9"), "café");
        assert_eq!(url_decode("100%"), "100%");
        assert_eq!(url_decode("%zz"), "%zz");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(url_encode("ID 1&x=é"), "ID%201%26x%3D%C3%A9");
        assert_eq!(url_decode(&url_encode("a b/c?d")), "a b/c?d");
    }

    #[test]
    fn test_form_body_overrides_query() {
        let req = Request::post("/crud")
            .header("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8")
            .query_param("path", "entity-create-ajax")
            .query_param("entity_id", "from-query")
            .body("entity_id=from-body&first_name=Jane")
            .with_parsed_form();

        assert_eq!(req.input("entity_id"), Some("from-body"));
        assert_eq!(req.input("first_name"), Some("Jane"));
        assert_eq!(req.input("path"), Some("entity-create-ajax"));
        assert_eq!(req.input("missing"), None);
    }

    #[test]
    fn test_query_value_ignores_form_body() {
        let req = Request::post("/crud")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .query_param("path", "entity-create-ajax")
            .body("path=entity-trash-ajax&name=Jane")
            .with_parsed_form();

        assert_eq!(req.input("path"), Some("entity-trash-ajax"));
        assert_eq!(req.query_value("path"), Some("entity-create-ajax"));
        assert_eq!(req.query_value("name"), None);
    }

    #[test]
    fn test_non_form_body_is_ignored() {
        let req = Request::post("/crud")
            .header("Content-Type", "application/json")
            .body("a=b")
            .with_parsed_form();
        assert!(req.form.is_empty());
    }
}
