use reqwest::Response;

/// Extracts a cookie value by name from a response
///
/// The response's cookie set carries no ordering guarantee; when the same
/// name occurs more than once the last matching value wins.
///
/// # Arguments
/// * `response` - The HTTP response to scan
/// * `name` - Name of the cookie to look up
///
/// # Returns
/// The cookie value if present, `None` otherwise. Callers must treat `None`
/// as failure rather than as an empty token.
pub fn cookie_value(response: &Response, name: &str) -> Option<String> {
    let mut value = None;
    for cookie in response.cookies() {
        if cookie.name() == name {
            value = Some(cookie.value().to_owned());
        }
    }
    value
}
