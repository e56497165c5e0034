//! Tests for rarity classification and match policies

#[cfg(test)]
mod tests {
    use layerforge::layers::rarity::{RarityMatch, RarityRule, RarityTable};

    fn rare_epic(policy: RarityMatch) -> RarityTable {
        RarityTable::new(
            vec![RarityRule::new("Rare", "R"), RarityRule::new("Epic", "E")],
            policy,
        )
    }

    // Tests that the last matching marker wins by default
    #[test]
    fn test_last_match_wins() {
        let table = rare_epic(RarityMatch::default());

        assert_eq!(table.classify("Foo_Rare_Epic.png"), Some("E"));
        assert_eq!(table.classify("Foo_Epic_Rare.png"), Some("E"));
    }

    // Tests first-match policy keeps the earliest rule in table order
    #[test]
    fn test_first_match_policy() {
        let table = rare_epic(RarityMatch::First);

        assert_eq!(table.classify("Foo_Rare_Epic.png"), Some("R"));
        assert_eq!(table.classify("Foo_Epic.png"), Some("E"));
    }

    // Tests that names without any marker have no rarity
    #[test]
    fn test_no_match_is_none() {
        let table = rare_epic(RarityMatch::Last);

        assert_eq!(table.classify("Plain.png"), None);
    }

    // Tests an empty marker matches every file name
    #[test]
    fn test_empty_marker_matches_everything() {
        let table = RarityTable::new(
            vec![
                RarityRule::new("", "original"),
                RarityRule::new("_r", "rare"),
            ],
            RarityMatch::Last,
        );

        assert_eq!(table.classify("eye.png"), Some("original"));
        assert_eq!(table.classify("eye_r.png"), Some("rare"));
    }

    // Tests matching is case sensitive
    #[test]
    fn test_matching_is_case_sensitive() {
        let table = rare_epic(RarityMatch::Last);

        assert_eq!(table.classify("foo_rare.png"), None);
    }

    // Tests the policy names used in configuration files
    #[test]
    fn test_policy_deserializes_lowercase() {
        let first: RarityMatch = serde_json::from_str("\"first\"").unwrap();
        let last: RarityMatch = serde_json::from_str("\"last\"").unwrap();

        assert_eq!(first, RarityMatch::First);
        assert_eq!(last, RarityMatch::Last);
    }
}
