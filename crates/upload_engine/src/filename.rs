/// Windows-safe local name for a downloaded artifact, taken from the last
/// path segment of its locator.
pub fn artifact_filename(url: &reqwest::Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();
    sanitize(segment)
}

fn sanitize(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]);
    if cleaned.is_empty() {
        return "artifact".to_string();
    }

    let mut name = cleaned.to_string();
    if name.len() > 120 {
        let mut cut = 120;
        while !name.is_char_boundary(cut) {
            cut -= 1;
        }
        name.truncate(cut);
    }
    let stem = name.split('.').next().unwrap_or_default();
    if is_reserved_windows_name(stem) {
        name.insert(stem.len(), '_');
    }
    name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_for(url: &str) -> String {
        artifact_filename(&reqwest::Url::parse(url).unwrap())
    }

    #[test]
    fn uses_last_path_segment() {
        assert_eq!(
            name_for("http://h/api/download/ab12/Intro_to_X.docx"),
            "Intro_to_X.docx"
        );
        assert_eq!(name_for("http://h/files/plan.md?sig=1"), "plan.md");
    }

    #[test]
    fn falls_back_when_segment_is_empty() {
        assert_eq!(name_for("http://h/"), "artifact");
        assert_eq!(name_for("http://h/dir/"), "artifact");
    }

    #[test]
    fn reserved_and_encoded_names_are_made_safe() {
        assert_eq!(name_for("http://h/CON.docx"), "CON_.docx");
        assert_eq!(name_for("http://h/a%3Ab.md"), "a%3Ab.md");
    }
}
