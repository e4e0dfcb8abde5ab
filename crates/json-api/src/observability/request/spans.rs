//! Route templates for span fields and metric labels.

use uuid::Uuid;

/// Collapse identifiers in `path` so metric labels stay low-cardinality.
///
/// UUID segments become `{uuid}`, and the segment after `email` or `phone`
/// becomes `{email}` or `{phone_number}`.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::new();
    let mut previous = "";

    for segment in path.trim_start_matches('/').split('/') {
        template.push('/');

        match previous {
            "email" => template.push_str("{email}"),
            "phone" => template.push_str("{phone_number}"),
            _ if Uuid::parse_str(segment).is_ok() => template.push_str("{uuid}"),
            _ => template.push_str(segment),
        }

        previous = segment;
    }

    template
}
