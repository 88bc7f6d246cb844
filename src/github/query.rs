use crate::models::search::SearchFilter;

/// Build the upstream search expression from the filters that are present.
pub fn search_expression(filter: &SearchFilter) -> String {
    let mut parts = Vec::with_capacity(2);
    if let Some(date) = &filter.date {
        parts.push(format!("created:>{}", date));
    }
    if let Some(language) = &filter.language {
        parts.push(format!("language:{}", language));
    }
    parts.join(" ")
}

/// Query parameters for the upstream search endpoint.
pub fn query_params(filter: &SearchFilter) -> Vec<(&'static str, String)> {
    vec![
        ("q", search_expression(filter)),
        ("sort", filter.sort.clone()),
        ("order", filter.order.as_str().to_string()),
        ("page", filter.page.to_string()),
        ("per_page", filter.limit.to_string()),
    ]
}
