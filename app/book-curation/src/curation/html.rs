use crate::book::BookEntry;
use std::borrow::Cow;

const STYLE: &str = r#"        body { font-family: 'Nanum Gothic', sans-serif; margin: 0; padding: 20px; }
        .container { max-width: 800px; margin: 0 auto; }
        .book-info { background: #f9f9f9; padding: 20px; border-radius: 10px; }
        .book-title { color: #333; font-size: 24px; margin-bottom: 10px; }
        .book-author { color: #666; margin-bottom: 20px; }
        .book-review { line-height: 1.6; }"#;

pub(crate) fn file_name(entry: &BookEntry) -> String {
    format!("book_review_{}.html", entry.sanitized_title())
}

/// Renders the review page. User text goes in verbatim unless `escape` is set.
pub(crate) fn render_page(entry: &BookEntry, escape: bool) -> String {
    let text = |value: &str| -> String {
        if escape {
            escape_html(value).into_owned()
        } else {
            value.to_string()
        }
    };
    let title = text(&entry.title);
    let author = text(&entry.author);
    let review = text(&entry.review);
    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <title>{title} - 책 소개</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <div class="container">
        <div class="book-info">
            <h1 class="book-title">{title}</h1>
            <div class="book-author">저자: {author}</div>
            <div class="book-review">{review}</div>
        </div>
    </div>
</body>
</html>
"#
    )
}

fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod test {
    use super::{escape_html, file_name, render_page};
    use crate::book::BookEntry;

    fn entry(title: &str, author: &str, review: &str) -> BookEntry {
        BookEntry {
            title: title.to_string(),
            author: author.to_string(),
            review: review.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name(&entry("설계와 구현", "홍길동", "좋은 책입니다")),
            "book_review_설계와_구현.html"
        );
    }

    #[test]
    fn test_render_page() {
        let page = render_page(&entry("설계와 구현", "홍길동", "좋은 책입니다"), false);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>설계와 구현 - 책 소개</title>"));
        assert!(page.contains(r#"<h1 class="book-title">설계와 구현</h1>"#));
        assert!(page.contains(r#"<div class="book-author">저자: 홍길동</div>"#));
        assert!(page.contains(r#"<div class="book-review">좋은 책입니다</div>"#));
        assert!(page.contains(".book-review { line-height: 1.6; }"));
    }

    #[test]
    fn test_render_page_keeps_markup_verbatim() {
        let page = render_page(&entry("A & B", "<i>me</i>", "<script>x()</script>"), false);
        assert!(page.contains(r#"<h1 class="book-title">A & B</h1>"#));
        assert!(page.contains("저자: <i>me</i>"));
        assert!(page.contains("<script>x()</script>"));
    }

    #[test]
    fn test_render_page_escaped() {
        let page = render_page(&entry("A & B", "<i>me</i>", "it's \"good\""), true);
        assert!(page.contains(r#"<h1 class="book-title">A &amp; B</h1>"#));
        assert!(page.contains("저자: &lt;i&gt;me&lt;/i&gt;"));
        assert!(page.contains("it&#39;s &quot;good&quot;"));
    }

    #[test]
    fn test_escape_html_borrows_plain_text() {
        assert!(matches!(escape_html("plain 텍스트"), std::borrow::Cow::Borrowed(_)));
    }
}
