/// Prefix marking a formatted tag
pub const TAG_PREFIX: char = '#';

/// Format a single tag line: prefix with `#` unless it already has one
pub fn format_tag(tag: &str) -> String {
    if tag.starts_with(TAG_PREFIX) {
        tag.to_string()
    } else {
        format!("{}{}", TAG_PREFIX, tag)
    }
}

/// Format a newline-separated tag block line by line.
///
/// Lines are split on `\n` only, so empty lines (including a trailing one)
/// survive as a bare `#`. Applying this twice yields the same text.
pub fn format_tags(tags: &str) -> String {
    tags.split('\n')
        .map(format_tag)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the combination text for an idea and its already formatted tags
pub fn combine_text(idea: &str, formatted_tags: &str) -> String {
    format!("{}\n{}", idea, formatted_tags)
}
