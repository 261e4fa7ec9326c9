/// Body returned by a successful store operation
pub const STORED: &str = "Stored";

/// Textual form of "no value" returned when a key has never been written
///
/// Missing keys answer 200 with this body rather than 404, so a client
/// cannot tell a stored literal `null` apart from an absent key.
pub const ABSENT_VALUE_MARKER: &str = "null";

/// Render a store lookup as the response body text
pub fn value_text(value: Option<String>) -> String {
    value.unwrap_or_else(|| ABSENT_VALUE_MARKER.to_string())
}
