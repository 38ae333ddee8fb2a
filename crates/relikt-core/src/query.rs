//! Query-string construction by standard percent-encoding.

use url::form_urlencoded;

/// Encode `(key, value)` pairs as an `application/x-www-form-urlencoded`
/// query string (no leading `?`). Empty input yields an empty string.
pub fn build_query(params: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

/// Append the encoded pairs to a resolved URL. No-op when `params` encodes
/// to nothing, so a bare resolved URL is never left with a dangling `?`.
pub fn append_query(url: &str, params: &[(&str, &str)]) -> String {
    let query = build_query(params);
    if query.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_no_question_mark() {
        assert_eq!(append_query("https://host/api/v1/product/", &[]), "https://host/api/v1/product/");
    }

    #[test]
    fn pairs_joined_and_ordered() {
        assert_eq!(
            append_query("https://host/api/v1/product/", &[("color", "2"), ("size", "1")]),
            "https://host/api/v1/product/?color=2&size=1"
        );
    }

    #[test]
    fn values_percent_encoded() {
        assert_eq!(build_query(&[("name", "дуб шпон")]), "name=%D0%B4%D1%83%D0%B1+%D1%88%D0%BF%D0%BE%D0%BD");
        assert_eq!(build_query(&[("q", "a&b=c")]), "q=a%26b%3Dc");
    }
}
