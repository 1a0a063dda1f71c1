//! HTML escaping and the `{!! ... !!}` raw-markup convention.

const RAW_OPEN: &str = "{!!";
const RAW_CLOSE: &str = "!!}";

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Returns the trimmed inner markup when `s` is wrapped as `{!! ... !!}`.
pub fn unwrap_raw(s: &str) -> Option<&str> {
    if s.len() < RAW_OPEN.len() + RAW_CLOSE.len() {
        return None;
    }
    s.strip_prefix(RAW_OPEN)
        .and_then(|rest| rest.strip_suffix(RAW_CLOSE))
        .map(str::trim)
}

/// Whether `s` uses the raw-markup wrapper.
pub fn is_raw(s: &str) -> bool {
    unwrap_raw(s).is_some()
}

/// Renders a display string: raw-wrapped text is emitted as-is (markers
/// stripped), everything else is escaped.
pub fn render_text(s: &str) -> String {
    unwrap_raw(s).map_or_else(|| html_escape(s), str::to_string)
}
