// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Category label from a listing URL's slug directory.
/// `.../books/classics_6/index.html` -> "Classics",
/// `.../books/science-fiction_16/` -> "Science Fiction".
pub fn category_from_listing_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let mut segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segs.last().is_some_and(|s| s.ends_with(".html")) {
        segs.pop();
    }
    let slug = segs.pop()?;
    // Trailing "_<id>" is the site's numeric category id.
    let name = match slug.rsplit_once('_') {
        Some((head, id)) if !head.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => head,
        _ => slug,
    };
    let words: Vec<String> = name
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() { None } else { Some(words.join(" ")) }
}

/// File stem as a display label: "classic_books.csv" -> "classic books".
pub fn label_from_file_stem(path: &std::path::Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let label = normalize_ws(&stem.replace(['_', '-'], " "));
    if label.is_empty() { s!("Uncategorized") } else { label }
}

fn capitalize(w: &str) -> String {
    let mut cs = w.chars();
    match cs.next() {
        Some(first) => first.to_uppercase().chain(cs).collect(),
        None => s!(),
    }
}
