//! Template engine setup and HTML templates.
//!
//! Templates are embedded in the binary. Every name ends in `.html`, so
//! Tera autoescapes all interpolated values.

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use tera::{Context, Tera};

/// Global template engine instance with embedded templates.
pub static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();

    tera.add_raw_templates(vec![
        ("base.html", BASE_TEMPLATE),
        ("recent_entries.html", RECENT_ENTRIES_TEMPLATE),
        ("home.html", HOME_TEMPLATE),
        ("entry_detail.html", ENTRY_DETAIL_TEMPLATE),
        ("error.html", ERROR_TEMPLATE),
    ])
    .expect("Failed to load templates");

    tera
});

/// Render a template with context.
pub fn render(template: &str, context: &Context) -> Result<String, tera::Error> {
    TEMPLATES.render(template, context)
}

/// Render the error page for a status and client-safe message.
pub fn render_error_page(status: StatusCode, message: &str) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("status", &status.as_u16());
    context.insert("reason", status.canonical_reason().unwrap_or("Error"));
    context.insert("message", message);
    render("error.html", &context)
}

// =============================================================================
// Embedded templates
// =============================================================================

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}Blog{% endblock %}</title>
    <style>
        * { box-sizing: border-box; }
        body {
            font-family: Georgia, "Times New Roman", serif;
            color: #222;
            line-height: 1.6;
            margin: 0;
        }
        header { border-bottom: 1px solid #ddd; padding: 16px 32px; }
        header a { color: inherit; text-decoration: none; font-size: 1.5em; }
        .layout { display: flex; gap: 48px; max-width: 1000px; margin: 0 auto; padding: 32px; }
        main { flex: 3; }
        aside { flex: 1; font-size: 0.9em; }
        .meta { color: #777; font-size: 0.85em; }
        .comment { display: flex; gap: 12px; margin-bottom: 16px; }
        .comment img { border-radius: 4px; }
        .error { color: #b00020; display: block; font-size: 0.85em; }
        label { display: block; font-weight: bold; }
        input, textarea { width: 100%; padding: 6px; font: inherit; }
        textarea { min-height: 120px; }
    </style>
</head>
<body>
    <header><a href="/">Blog</a></header>
    <div class="layout">
        <main>{% block content %}{% endblock %}</main>
        <aside>{% block sidebar %}{% include "recent_entries.html" %}{% endblock %}</aside>
    </div>
</body>
</html>
"##;

const RECENT_ENTRIES_TEMPLATE: &str = r##"<div class="recent-entries">
    <h3>Recent entries</h3>
    {% if recent_entries %}
    <ul>
        {% for recent in recent_entries %}
        <li><a href="{{ recent.url }}">{{ recent.title }}</a></li>
        {% endfor %}
    </ul>
    {% else %}
    <p>No recent entries</p>
    {% endif %}
</div>
"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
{% if entries %}
    {% for entry in entries %}
    <article class="entry">
        <h2><a href="{{ entry.url }}">{{ entry.title }}</a></h2>
        <p class="meta">{{ entry.created_at }} &middot; {{ entry.comment_count }} comment{{ entry.comment_count | pluralize }}</p>
        <div class="body">{{ entry.body | escape | linebreaksbr | safe }}</div>
    </article>
    {% endfor %}
{% else %}
    <p>No blog entries yet.</p>
{% endif %}
{% endblock %}
"##;

const ENTRY_DETAIL_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ entry.title }}{% endblock %}
{% block content %}
<article class="entry">
    <h1>{{ entry.title }}</h1>
    <p class="meta">By {{ entry.author }} on {{ entry.created_at }}</p>
    <div class="body">{{ entry.body | escape | linebreaksbr | safe }}</div>
</article>

<section class="comments">
    <h2>Comments</h2>
    {% if comments %}
        {% for comment in comments %}
        <div class="comment">
            <img src="{{ comment.gravatar_url }}" alt="" width="48" height="48">
            <div>
                <p class="meta">{{ comment.name }} &middot; {{ comment.created_at }}</p>
                <p>{{ comment.body | escape | linebreaksbr | safe }}</p>
            </div>
        </div>
        {% endfor %}
    {% else %}
        <p>No comments yet.</p>
    {% endif %}
</section>

<section class="comment-form">
    <h2>Leave a comment</h2>
    <form method="post" action="{{ entry.url }}">
        {% for field in form.fields %}
        <p>
            <label for="id_{{ field.name }}">{{ field.label }}</label>
            {% if field.error %}<span class="error">{{ field.error }}</span>{% endif %}
            {% if field.kind == "textarea" %}
            <textarea id="id_{{ field.name }}" name="{{ field.name }}"{% if field.required %} required{% endif %}>{{ field.value }}</textarea>
            {% else %}
            <input type="{{ field.kind }}" id="id_{{ field.name }}" name="{{ field.name }}" value="{{ field.value }}"{% if field.max_length %} maxlength="{{ field.max_length }}"{% endif %}{% if field.required %} required{% endif %}>
            {% endif %}
        </p>
        {% endfor %}
        <button type="submit">Post comment</button>
    </form>
</section>
{% endblock %}
"##;

const ERROR_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ status }} {{ reason }}{% endblock %}
{% block content %}
<h1>{{ status }} {{ reason }}</h1>
<p>{{ message }}</p>
<p><a href="/">Back to the homepage</a></p>
{% endblock %}
{% block sidebar %}{% endblock %}
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_parse() {
        let names: Vec<_> = TEMPLATES.get_template_names().collect();
        for name in [
            "base.html",
            "recent_entries.html",
            "home.html",
            "entry_detail.html",
            "error.html",
        ] {
            assert!(names.contains(&name), "missing template {name}");
        }
    }

    #[test]
    fn recent_entries_fragment_without_entries() {
        let mut context = Context::new();
        context.insert("recent_entries", &Vec::<String>::new());
        let html = render("recent_entries.html", &context).unwrap();
        assert!(html.contains("No recent entries"));
    }

    #[test]
    fn home_escapes_entry_content() {
        let mut context = Context::new();
        context.insert("recent_entries", &Vec::<String>::new());
        context.insert(
            "entries",
            &vec![serde_json::json!({
                "url": "/2024/1/1/1-x/",
                "title": "<script>",
                "body": "line one\nline two",
                "created_at": "January 1, 2024",
                "comment_count": 1,
            })],
        );
        let html = render("home.html", &context).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("1 comment<"));
    }

    #[test]
    fn error_page_has_status_and_no_sidebar() {
        let html = render_error_page(StatusCode::NOT_FOUND, "Entry with id 0 not found").unwrap();
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Entry with id 0 not found"));
        assert!(!html.contains("Recent entries"));
    }
}
