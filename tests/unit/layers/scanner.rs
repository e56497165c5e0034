//! Tests for layer directory scanning

#[cfg(test)]
mod tests {
    use layerforge::GenerationError;
    use layerforge::layers::rarity::{RarityMatch, RarityRule, RarityTable};
    use layerforge::layers::scanner::{is_hidden, scan_layer};
    use std::fs;
    use tempfile::TempDir;

    fn table() -> RarityTable {
        RarityTable::new(
            vec![
                RarityRule::new("_r", "rare"),
                RarityRule::new("_sr", "super rare"),
            ],
            RarityMatch::Last,
        )
    }

    fn touch_all(dir: &TempDir, names: &[&str]) {
        for name in names {
            fs::write(dir.path().join(name), b"").unwrap();
        }
    }

    // Tests dotfile detection mirrors the hidden-entry rule
    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".DS_Store"));
        assert!(is_hidden(".a"));
        assert!(!is_hidden("visible.png"));
        assert!(!is_hidden("..double.png"));
        assert!(!is_hidden("."));
        assert!(!is_hidden("mid.dle.png"));
    }

    // Tests ids follow sorted listing order and skip hidden files
    #[test]
    fn test_scan_orders_and_filters() {
        let dir = TempDir::new().unwrap();
        touch_all(&dir, &["b.png", ".hidden.png", "a.png", "c_r.png"]);

        let fragments = scan_layer(dir.path(), &table()).unwrap();

        let names: Vec<_> = fragments.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png", "c_r.png"]);

        let ids: Vec<_> = fragments.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    // Tests display names and rarity are derived per fragment
    #[test]
    fn test_scan_derives_name_and_rarity() {
        let dir = TempDir::new().unwrap();
        touch_all(&dir, &["hat_sr.png", "plain.png"]);

        let fragments = scan_layer(dir.path(), &table()).unwrap();

        let hat = fragments.first().unwrap();
        assert_eq!(hat.file_name, "hat_sr.png");
        assert_eq!(hat.name, "hat");
        assert_eq!(hat.rarity.as_deref(), Some("super rare"));

        let plain = fragments.get(1).unwrap();
        assert_eq!(plain.name, "plain");
        assert_eq!(plain.rarity, None);
    }

    // Tests an empty directory yields no fragments rather than an error
    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();

        let fragments = scan_layer(dir.path(), &table()).unwrap();

        assert!(fragments.is_empty());
    }

    // Tests a missing directory is a file system error
    #[test]
    fn test_scan_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let result = scan_layer(&missing, &table());

        assert!(matches!(result, Err(GenerationError::FileSystem { .. })));
    }

    // Tests a too-short entry name aborts the scan
    #[test]
    fn test_scan_rejects_short_name() {
        let dir = TempDir::new().unwrap();
        touch_all(&dir, &["ok.png", "x"]);

        let result = scan_layer(dir.path(), &table());

        assert!(matches!(
            result,
            Err(GenerationError::InvalidFragmentName { .. })
        ));
    }

    // Tests a hidden entry with a non-UTF-8 name is skipped like any dotfile
    #[cfg(unix)]
    #[test]
    fn test_scan_skips_hidden_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        touch_all(&dir, &["a.png"]);
        fs::write(dir.path().join(OsStr::from_bytes(b".\xff\xfe.png")), b"").unwrap();

        let fragments = scan_layer(dir.path(), &table()).unwrap();

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments.first().unwrap().file_name, "a.png");
    }

    // Tests a visible entry with a non-UTF-8 name aborts the scan
    #[cfg(unix)]
    #[test]
    fn test_scan_rejects_visible_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        touch_all(&dir, &["a.png"]);
        fs::write(dir.path().join(OsStr::from_bytes(b"\xff\xfe.png")), b"").unwrap();

        let result = scan_layer(dir.path(), &table());

        assert!(matches!(
            result,
            Err(GenerationError::InvalidFragmentName { .. })
        ));
    }
}
