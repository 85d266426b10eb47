use super::*;

// =============================================================
// format_quote
// =============================================================

#[test]
fn format_quote_wraps_text_and_appends_author() {
    assert_eq!(
        format_quote("Get busy living or get busy dying.", "Stephen King"),
        "\"Get busy living or get busy dying.\" \u{2014} Stephen King"
    );
}

// =============================================================
// encode_component
// =============================================================

#[test]
fn encode_component_passes_unreserved_characters() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_component_encodes_spaces_and_quotes() {
    assert_eq!(encode_component("a \"b\""), "a%20%22b%22");
}

#[test]
fn encode_component_encodes_multibyte_utf8() {
    // The em dash used in formatted quotes is three UTF-8 bytes.
    assert_eq!(encode_component("\u{2014}"), "%E2%80%94");
}

#[test]
fn encode_component_encodes_url_delimiters() {
    assert_eq!(encode_component("a=b&c?d/e"), "a%3Db%26c%3Fd%2Fe");
}

// =============================================================
// Share URLs
// =============================================================

#[test]
fn tweet_url_carries_encoded_text() {
    let url = tweet_url("\"The purpose of our lives is to be happy.\" \u{2014} Dalai Lama");
    assert!(url.starts_with("https://twitter.com/intent/tweet?text=%22The%20purpose"));
    assert!(!url.contains(' '));
}

#[test]
fn facebook_share_url_encodes_page_url() {
    assert_eq!(
        facebook_share_url("http://localhost:3000/"),
        "https://www.facebook.com/sharer/sharer.php?u=http%3A%2F%2Flocalhost%3A3000%2F"
    );
}

#[test]
fn linkedin_share_url_carries_all_three_fields() {
    let url = linkedin_share_url("http://localhost:3000/", "Inspirational Quote", "\"a\" \u{2014} b");
    assert!(url.starts_with("https://www.linkedin.com/shareArticle?mini=true&url=http%3A%2F%2F"));
    assert!(url.contains("&title=Inspirational%20Quote"));
    assert!(url.ends_with("&summary=%22a%22%20%E2%80%94%20b"));
}
