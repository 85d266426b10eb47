use super::*;

// =============================================================
// ProfileTab
// =============================================================

#[test]
fn profile_tab_default_is_saved() {
    assert_eq!(ProfileTab::default(), ProfileTab::Saved);
}

#[test]
fn profile_tab_variants_are_distinct() {
    assert_ne!(ProfileTab::Saved, ProfileTab::Account);
    assert_ne!(ProfileTab::Saved, ProfileTab::Settings);
    assert_ne!(ProfileTab::Account, ProfileTab::Settings);
}
