//! Helpers for inspecting server-rendered markup in tests.

/// `href` of the anchor carrying `marker` in its class list.
pub(crate) fn highlighted_href<'a>(html: &'a str, marker: &str) -> Option<&'a str> {
    let at = html.find(marker)?;
    let start = html[..at].rfind("<a")?;
    let end = at + html[at..].find('>')?;
    let tag = &html[start..end];
    let href = tag.find("href=\"")? + "href=\"".len();
    let len = tag[href..].find('"')?;
    Some(&tag[href..href + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighted_href_reads_the_marked_anchor() {
        let html = r#"<a href="/buses" class="nav-link">B</a><a class="nav-link nav-link-active" href="/routes">R</a>"#;

        assert_eq!(highlighted_href(html, "nav-link-active"), Some("/routes"));
        assert_eq!(highlighted_href(html, "menu-link-active"), None);
    }
}
