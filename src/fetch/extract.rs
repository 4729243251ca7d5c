use scraper::{Html, Selector};

/// Joins the text of every `<p>` element with single spaces, in document order.
///
/// Each paragraph contributes all of its descendant text (links, emphasis,
/// spans). Returns an empty string when the page has no paragraph text at all,
/// including pages whose paragraphs hold only whitespace.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .collect();

    let joined = paragraphs.join(" ");
    if joined.trim().is_empty() {
        String::new()
    } else {
        joined
    }
}
