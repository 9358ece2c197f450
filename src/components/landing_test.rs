use super::*;

#[test]
fn four_features_in_display_order() {
    let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
    assert_eq!(titles, ["Engage Students", "Instant Feedback", "Track Progress", "Easy Setup"]);
}

#[test]
fn each_feature_has_its_own_accent_and_icon() {
    for (i, a) in FEATURES.iter().enumerate() {
        for b in &FEATURES[i + 1..] {
            assert_ne!(a.accent, b.accent);
            assert_ne!(a.icon, b.icon);
        }
        assert!(!a.description.is_empty());
    }
}
