//! Route labels for logs and metrics.

/// Replace numeric path segments with `{id}` to keep label cardinality bounded.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_become_placeholders() {
        assert_eq!(route_label("/products/42"), "/products/{id}");
        assert_eq!(
            route_label("/debug/transaction/inbound/7"),
            "/debug/transaction/inbound/{id}"
        );
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/inbound/add-quantity"), "/inbound/add-quantity");
        assert_eq!(route_label("/profit/summary"), "/profit/summary");
    }
}
