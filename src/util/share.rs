//! Share-link construction and quote formatting.
//!
//! SYSTEM CONTEXT
//! ==============
//! The share menu builds outbound URLs for third-party share endpoints and
//! the clipboard payload. Nothing here touches the browser; the component
//! layer opens the links and writes the clipboard.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Format a quote for the clipboard and share text.
#[must_use]
pub fn format_quote(text: &str, author: &str) -> String {
    format!("\"{text}\" \u{2014} {author}")
}

/// Tweet intent URL carrying the formatted quote.
#[must_use]
pub fn tweet_url(text: &str) -> String {
    format!("https://twitter.com/intent/tweet?text={}", encode_component(text))
}

/// Facebook sharer URL for the given page.
#[must_use]
pub fn facebook_share_url(page_url: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}",
        encode_component(page_url)
    )
}

/// LinkedIn shareArticle URL with page, title, and summary.
#[must_use]
pub fn linkedin_share_url(page_url: &str, title: &str, summary: &str) -> String {
    format!(
        "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}&summary={}",
        encode_component(page_url),
        encode_component(title),
        encode_component(summary)
    )
}

/// Percent-encode a query component, matching `encodeURIComponent`:
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )` pass through, everything
/// else is encoded byte-wise as UTF-8.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(byte as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(hex_digit(byte >> 4));
                out.push(hex_digit(byte & 0x0f));
            }
        }
    }
    out
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16)
        .map_or('0', |c| c.to_ascii_uppercase())
}
