//! POST method-override rewriting.
//!
//! Servers behind POST/GET-only proxies accept the real verb inside the
//! request body: a POST whose body carries `_method` set to PATCH, PUT, or
//! DELETE is dispatched with that verb instead. The body is sent unchanged.

use super::request::RequestBody;
use reqwest::Method;

/// The body field that declares the overriding verb.
const OVERRIDE_FIELD: &str = "_method";

/// Compute the override verb for a request, if any.
///
/// Only POST requests are rewritten, and only to PATCH, PUT, or DELETE
/// (case-insensitive). Anything else returns None and the request is
/// dispatched as-is.
pub fn override_method(method: &Method, body: &RequestBody) -> Option<Method> {
    if *method != Method::POST {
        return None;
    }

    let declared = match body {
        RequestBody::Form(fields) => fields
            .iter()
            .find(|(name, _)| name == OVERRIDE_FIELD)
            .map(|(_, value)| value.as_str()),
        RequestBody::Json(value) => value.get(OVERRIDE_FIELD).and_then(|v| v.as_str()),
        RequestBody::Empty => None,
    }?;

    if declared.eq_ignore_ascii_case("patch") {
        Some(Method::PATCH)
    } else if declared.eq_ignore_ascii_case("put") {
        Some(Method::PUT)
    } else if declared.eq_ignore_ascii_case("delete") {
        Some(Method::DELETE)
    } else {
        None
    }
}

/// The verb a request will actually be dispatched with.
pub fn effective_method(method: &Method, body: &RequestBody) -> Method {
    override_method(method, body).unwrap_or_else(|| method.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form_with(method: &str) -> RequestBody {
        RequestBody::Form(vec![
            ("id".to_string(), "42".to_string()),
            (OVERRIDE_FIELD.to_string(), method.to_string()),
        ])
    }

    #[test]
    fn test_form_override_delete() {
        assert_eq!(effective_method(&Method::POST, &form_with("DELETE")), Method::DELETE);
    }

    #[test]
    fn test_form_override_put() {
        assert_eq!(effective_method(&Method::POST, &form_with("PUT")), Method::PUT);
    }

    #[test]
    fn test_form_override_patch() {
        assert_eq!(effective_method(&Method::POST, &form_with("PATCH")), Method::PATCH);
    }

    #[test]
    fn test_json_override() {
        let body = RequestBody::Json(json!({ "id": 42, "_method": "delete" }));
        assert_eq!(effective_method(&Method::POST, &body), Method::DELETE);
    }

    #[test]
    fn test_unknown_verb_ignored() {
        assert_eq!(effective_method(&Method::POST, &form_with("HEAD")), Method::POST);
    }

    #[test]
    fn test_non_post_untouched() {
        assert_eq!(effective_method(&Method::GET, &form_with("DELETE")), Method::GET);
        assert_eq!(effective_method(&Method::PUT, &form_with("DELETE")), Method::PUT);
    }

    #[test]
    fn test_post_without_field_untouched() {
        let body = RequestBody::Form(vec![("id".to_string(), "42".to_string())]);
        assert_eq!(effective_method(&Method::POST, &body), Method::POST);

        assert_eq!(effective_method(&Method::POST, &RequestBody::Empty), Method::POST);
    }

    #[test]
    fn test_json_non_string_field_ignored() {
        let body = RequestBody::Json(json!({ "_method": 7 }));
        assert_eq!(effective_method(&Method::POST, &body), Method::POST);
    }
}
