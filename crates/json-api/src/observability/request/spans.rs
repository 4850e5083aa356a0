//! Route labels for request spans and metrics.

/// Collapse numeric path segments so every customer shares one route label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.parse::<i64>().is_ok() {
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
    fn numeric_ids_are_collapsed() {
        assert_eq!(route_label("/api/customers/42"), "/api/customers/{id}");
        assert_eq!(route_label("/api/customers/-1"), "/api/customers/{id}");
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(route_label("/"), "/");
        assert_eq!(route_label("/api/customers"), "/api/customers");
        assert_eq!(route_label("/healthcheck"), "/healthcheck");
    }
}
