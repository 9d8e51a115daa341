/// Format an object size given in KB for the listing table
pub fn format_size(size_kb: f64) -> String {
    if size_kb >= 1_000_000.0 {
        format!("{:.1} GB", size_kb / 1_000_000.0)
    } else if size_kb >= 1_000.0 {
        format!("{:.1} MB", size_kb / 1_000.0)
    } else {
        format!("{} KB", size_kb.round() as u64)
    }
}

/// Strip the trailing slash the server leaves on directory names
pub fn display_dir_name(name: &str) -> &str {
    name.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0.0), "0 KB");
        assert_eq!(format_size(12.0), "12 KB");
        assert_eq!(format_size(999.0), "999 KB");
        assert_eq!(format_size(1_500.0), "1.5 MB");
        assert_eq!(format_size(2_300_000.0), "2.3 GB");
    }

    #[test]
    fn test_display_dir_name() {
        assert_eq!(display_dir_name("2024/"), "2024");
        assert_eq!(display_dir_name("plain"), "plain");
    }
}
