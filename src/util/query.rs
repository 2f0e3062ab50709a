use std::collections::HashMap;

use crate::data::loading::{LoadingParams, SortDirection};

/// Extracts model loading parameters from a flat query-string map.
///
/// Recognizes `page`, `length`, and bracketed keys (`search[name]=foo`,
/// `order[name]=desc`). Anything else is ignored; field names are filtered
/// again by the entity whitelist when the query runs. Clauses are sorted by
/// field name so the result is independent of map iteration order.
pub fn parse_loading_params(query: &HashMap<String, String>) -> LoadingParams {
    let mut params = LoadingParams::default();

    if let Some(page) = query.get("page") {
        params.page = page.parse().unwrap_or(0);
    }
    if let Some(length) = query.get("length") {
        params.length = length.parse().unwrap_or(0);
    }

    for (key, value) in query {
        if let Some(field) = bracketed(key, "search") {
            params.search.push((field.to_string(), value.clone()));
        } else if let Some(field) = bracketed(key, "order") {
            let direction = if value.eq_ignore_ascii_case("desc") {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            params.order.push((field.to_string(), direction));
        }
    }

    params.search.sort();
    params.order.sort_by(|a, b| a.0.cmp(&b.0));

    params
}

fn bracketed<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = key.strip_prefix(prefix)?;
    let rest = rest.strip_prefix('[')?;

    rest.strip_suffix(']').filter(|field| !field.is_empty())
}
