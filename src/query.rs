//! Query Builder
//!
//! Derives the canonical query string from filter criteria plus pagination.
//! The output is stable (same inputs, byte-identical string) so it doubles
//! as the change-detection key for list reloads.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::FilterCriteria;

/// Characters escaped in query values (space, separators, percent itself)
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Build the query string for a list request.
///
/// Filter fields are included only when non-empty; `page` and `size` are
/// always present, in a fixed key order. Numeric bounds are passed through
/// as typed text; min > max is the server's concern.
pub fn build_query(filter: &FilterCriteria, page: u32, size: u32) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    let pairs = [
        ("address", &filter.address),
        ("minPrice", &filter.min_price),
        ("maxPrice", &filter.max_price),
        ("minSize", &filter.min_size),
        ("maxSize", &filter.max_size),
    ];
    for (key, value) in pairs {
        if !value.is_empty() {
            params.push((key, utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()));
        }
    }
    params.push(("page", page.to_string()));
    params.push(("size", size.to_string()));

    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_yields_only_page_and_size() {
        let qs = build_query(&FilterCriteria::default(), 0, 10);
        assert_eq!(qs, "page=0&size=10");
    }

    #[test]
    fn single_bound_appears_alone() {
        let filter = FilterCriteria {
            min_price: "100".to_string(),
            ..Default::default()
        };
        let qs = build_query(&filter, 0, 10);
        assert_eq!(qs, "minPrice=100&page=0&size=10");
        assert!(!qs.contains("maxPrice"));
        assert!(!qs.contains("address"));
    }

    #[test]
    fn all_fields_in_fixed_order() {
        let filter = FilterCriteria {
            address: "Calle".to_string(),
            min_price: "1".to_string(),
            max_price: "2".to_string(),
            min_size: "3".to_string(),
            max_size: "4".to_string(),
        };
        let qs = build_query(&filter, 2, 20);
        assert_eq!(
            qs,
            "address=Calle&minPrice=1&maxPrice=2&minSize=3&maxSize=4&page=2&size=20"
        );
    }

    #[test]
    fn address_value_is_percent_encoded() {
        let filter = FilterCriteria {
            address: "Calle 123 #45".to_string(),
            ..Default::default()
        };
        let qs = build_query(&filter, 0, 5);
        assert_eq!(qs, "address=Calle%20123%20%2345&page=0&size=5");
    }

    #[test]
    fn decimal_bounds_pass_through_unchanged() {
        let filter = FilterCriteria {
            max_price: "999999.99".to_string(),
            ..Default::default()
        };
        let qs = build_query(&filter, 1, 50);
        assert_eq!(qs, "maxPrice=999999.99&page=1&size=50");
    }

    #[test]
    fn identical_inputs_give_identical_strings() {
        let filter = FilterCriteria {
            address: "av. norte".to_string(),
            min_size: "40".to_string(),
            ..Default::default()
        };
        assert_eq!(build_query(&filter, 3, 20), build_query(&filter, 3, 20));
    }
}
