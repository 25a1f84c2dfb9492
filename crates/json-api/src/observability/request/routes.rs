//! Route labels for metrics and spans.

/// Label for any path the router does not serve.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path onto the route template that serves it.
///
/// Labels are limited to the known templates so arbitrary paths cannot grow
/// the metric series set.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["api", "products"] => "/api/products",
        ["api", "products", _] => "/api/products/{id}",
        _ => UNMATCHED_ROUTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_share_one_label() {
        assert_eq!(route_label("/api/products/42"), "/api/products/{id}");
        assert_eq!(route_label("/api/products/42/"), "/api/products/{id}");
        assert_eq!(route_label("/api/products/abc"), "/api/products/{id}");
    }

    #[test]
    fn known_routes_keep_their_path() {
        assert_eq!(route_label("/api/products"), "/api/products");
        assert_eq!(route_label("/api/products/"), "/api/products");
        assert_eq!(route_label("/healthcheck"), "/healthcheck");
        assert_eq!(route_label("/metrics"), "/metrics");
    }

    #[test]
    fn unknown_paths_collapse_to_one_label() {
        assert_eq!(route_label("/"), UNMATCHED_ROUTE);
        assert_eq!(route_label("/wp-admin/setup.php"), UNMATCHED_ROUTE);
        assert_eq!(route_label("/api/products/1/reviews"), UNMATCHED_ROUTE);
        assert_eq!(route_label("/api/widgets"), UNMATCHED_ROUTE);
    }
}
