//! Route pattern extraction for metric labels.

use actix_web::HttpRequest;

/// Route label for `req` with path parameters collapsed
///
/// Uses the matched resource pattern when routing has happened, so that
/// `/items/1` and `/items/2` share the `/items/{id}` label. Unmatched paths
/// fall back to a fixed set of known prefixes to bound label cardinality.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    if let Some(pattern) = req.match_pattern() {
        return pattern;
    }

    let path = req.path();
    match path {
        "/items" | "/login" => path.to_string(),
        p if p.starts_with("/items/") => "/items/{id}".to_string(),
        p if p.starts_with("/api/") => path.to_string(),
        _ => "/unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_unmatched_item_paths_are_collapsed() {
        let req = TestRequest::default().uri("/items/17").to_http_request();
        assert_eq!(extract_route_pattern(&req), "/items/{id}");

        let req = TestRequest::default().uri("/items").to_http_request();
        assert_eq!(extract_route_pattern(&req), "/items");

        let req = TestRequest::default().uri("/wp-admin/login.php").to_http_request();
        assert_eq!(extract_route_pattern(&req), "/unknown");
    }
}
