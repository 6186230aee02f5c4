//! Feed renderer
//!
//! Renders entries, tabs and the latest-news summary to HTML fragments.
//! Every function here is pure: same entries, mapping and config in,
//! same markup out.

use crate::config::RenderConfig;
use crate::domain::entities::{CategoryMapping, CategorySelector, NewsEntry};

/// Label shown for a category: the mapped label, or the key itself
pub fn category_label<'a>(categories: &'a CategoryMapping, category: &'a str) -> &'a str {
    categories
        .label(category)
        .filter(|label| !label.is_empty())
        .unwrap_or(category)
}

/// Render one entry as a full list item
pub fn render_entry(entry: &NewsEntry, categories: &CategoryMapping, config: &RenderConfig) -> String {
    let label = category_label(categories, &entry.category);
    let image_alt = entry.image_alt.as_deref().filter(|alt| !alt.is_empty());
    let mut buf = String::new();

    buf.push_str(&format!(
        "<div class=\"news-item\" data-category=\"{}\">\n",
        escape(&entry.category)
    ));

    // Image, or a gradient placeholder keyed by category
    match entry.image.as_deref().filter(|image| !image.is_empty()) {
        Some(image) => {
            let alt = image_alt.unwrap_or(&entry.title);
            buf.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" class=\"news-image\">\n",
                escape(image),
                escape(alt)
            ));
        }
        None => {
            let caption = image_alt.unwrap_or(label);
            buf.push_str(&format!(
                "<div class=\"news-image-placeholder\" style=\"background: {};\"><div>{}</div></div>\n",
                escape(config.gradient(&entry.category)),
                escape(caption)
            ));
        }
    }

    buf.push_str("<div class=\"news-body\">\n");

    let badge = if entry.is_new {
        format!(
            " <span class=\"new-badge\">{}</span>",
            escape(&config.new_badge_label)
        )
    } else {
        String::new()
    };
    buf.push_str(&format!(
        "<div class=\"news-date\">{}{}</div>\n",
        escape(&entry.date),
        badge
    ));
    buf.push_str(&format!(
        "<h3 class=\"news-title\">{}</h3>\n",
        escape(&entry.title)
    ));
    buf.push_str(&render_category_badge(entry, categories, config));
    buf.push('\n');

    if let Some(description) = entry.description.as_deref().filter(|d| !d.is_empty()) {
        buf.push_str(&format!(
            "<p class=\"news-description\">{}</p>\n",
            escape(description)
        ));
    }

    if let Some(link) = entry.details_link() {
        buf.push_str(&format!(
            "<a href=\"{}\" class=\"news-link\">{}</a>\n",
            escape(link),
            escape(&config.details_label)
        ));
    }

    buf.push_str("</div>\n</div>\n");
    buf
}

/// Render the category tabs, one per mapping entry in mapping order.
///
/// There is no "all" tab; the control whose key matches the selector is
/// marked `active`.
pub fn render_tabs(categories: &CategoryMapping, selected: &CategorySelector) -> String {
    let mut buf = String::from("<div class=\"news-tabs\">");

    for (key, label) in categories.iter() {
        let class = if selected.is_key(key) {
            "news-tab active"
        } else {
            "news-tab"
        };
        buf.push_str(&format!(
            "<button class=\"{}\" data-category=\"{}\">{}</button>",
            class,
            escape(key),
            escape(label)
        ));
    }

    buf.push_str("</div>");
    buf
}

/// Render a list of entries, or the empty-list message when there are none
pub fn render_entry_list(
    entries: &[&NewsEntry],
    categories: &CategoryMapping,
    config: &RenderConfig,
) -> String {
    if entries.is_empty() {
        return format!("<p class=\"no-news\">{}</p>", escape(&config.empty_message));
    }

    entries
        .iter()
        .map(|entry| render_entry(entry, categories, config))
        .collect()
}

/// Render the latest-news summary: date, category badge and title only
pub fn render_latest(
    entries: &[NewsEntry],
    categories: &CategoryMapping,
    config: &RenderConfig,
) -> String {
    let mut buf = String::from("<div class=\"news-list\">\n");

    for entry in entries {
        buf.push_str("<div class=\"news-item\">\n");
        buf.push_str(&format!(
            "<div class=\"news-date\">{}</div>\n",
            escape(&entry.date)
        ));
        buf.push_str("<div>");
        buf.push_str(&render_category_badge(entry, categories, config));
        buf.push_str(&format!("<br>{}</div>\n", escape(&entry.title)));
        buf.push_str("</div>\n");
    }

    buf.push_str("</div>");
    buf
}

fn render_category_badge(
    entry: &NewsEntry,
    categories: &CategoryMapping,
    config: &RenderConfig,
) -> String {
    let class = config.category_class(&entry.category);
    let class_attr = if class.is_empty() {
        "news-category".to_string()
    } else {
        format!("news-category {}", class)
    };

    format!(
        "<span class=\"{}\">{}</span>",
        escape(&class_attr),
        escape(category_label(categories, &entry.category))
    )
}

/// Escape text for use in element content and quoted attributes
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
