//! Canonical request fingerprints.
//!
//! A fingerprint is the deterministic cache key for one logical query:
//! the endpoint path plus its query parameters in sorted, canonical form.
//! Two logically identical queries with reordered parameters therefore
//! index the same cache entry.

/// Builds the canonical fingerprint for an endpoint path and its query
/// parameters. Parameters are sorted by key (then value) regardless of
/// the order the request was built in.
pub fn fingerprint(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(&b.1)));
    let query = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_without_params_is_path() {
        assert_eq!(fingerprint("competitions", &[]), "competitions");
    }

    #[test]
    fn test_fingerprint_sorts_parameters() {
        let fp = fingerprint(
            "matches",
            &[
                ("dateTo", "2025-03-08".to_string()),
                ("competitions", "2021,2014".to_string()),
                ("dateFrom", "2025-03-01".to_string()),
            ],
        );
        assert_eq!(
            fp,
            "matches?competitions=2021,2014&dateFrom=2025-03-01&dateTo=2025-03-08"
        );
    }

    #[test]
    fn test_reordered_parameters_produce_same_fingerprint() {
        let a = fingerprint(
            "matches",
            &[
                ("dateFrom", "2025-03-01".to_string()),
                ("dateTo", "2025-03-08".to_string()),
            ],
        );
        let b = fingerprint(
            "matches",
            &[
                ("dateTo", "2025-03-08".to_string()),
                ("dateFrom", "2025-03-01".to_string()),
            ],
        );
        assert_eq!(a, b);
    }
}
