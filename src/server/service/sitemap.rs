//! XML sitemap of the public pages.

use chrono::NaiveDate;

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders a sitemap listing `paths` under `site_url`, all modified on `lastmod`.
///
/// `site_url` must not end with a slash; every path starts with one.
pub fn render_sitemap(site_url: &str, paths: &[&str], lastmod: NaiveDate) -> String {
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(&format!("<urlset xmlns=\"{}\">\n", SITEMAP_NAMESPACE));

    for path in paths {
        xml.push_str("  <url>\n");
        xml.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&format!("{}{}", site_url, path))
        ));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
