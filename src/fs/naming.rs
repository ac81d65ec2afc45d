//! Filename generation and manipulation.

/// Characters that would split a name into path components.
const FORBIDDEN_CHARS: [char; 3] = ['/', '\\', '|'];

/// Replace path separator characters with a dash.
///
/// Surrounding whitespace is trimmed first.
pub fn sanitize_filename(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '-' } else { c })
        .collect()
}

/// Sanitized file name with the media extension appended.
pub fn media_filename(name: &str, extension: &str) -> String {
    format!("{}.{}", sanitize_filename(name), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_separators() {
        assert_eq!(sanitize_filename("A/B|C"), "A-B-C");
        assert_eq!(sanitize_filename("dir\\file"), "dir-file");
    }

    #[test]
    fn test_sanitize_filename_untouched() {
        assert_eq!(sanitize_filename("Episode 01: Pilot"), "Episode 01: Pilot");
        assert_eq!(sanitize_filename("土豆视频"), "土豆视频");
    }

    #[test]
    fn test_sanitize_filename_trims() {
        assert_eq!(sanitize_filename("  123456 \n"), "123456");
    }

    #[test]
    fn test_media_filename() {
        assert_eq!(media_filename("A/B|C", "f4v"), "A-B-C.f4v");
    }
}
