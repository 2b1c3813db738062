//! Recipe viewer markup
//!
//! Items are rendered through their own escaping template and then placed
//! into the page as already-safe content.

use askama::Template;

/// One page item with empty fields already dropped
#[derive(Template, Debug, Clone)]
#[template(
    ext = "html",
    source = r#"<div class="item">
{%- match step %}{% when Some with (text) %}<div class="item-step">{{ step_prefix }}{{ text }}</div>{% when None %}{% endmatch -%}
{%- match narrate %}{% when Some with (text) %}<div class="item-narr">{{ narrate_prefix }}{{ text }}</div>{% when None %}{% endmatch -%}
</div>"#
)]
pub struct ItemView<'a> {
    pub step: Option<&'a str>,
    pub narrate: Option<&'a str>,
    pub step_prefix: &'a str,
    pub narrate_prefix: &'a str,
}

/// Table of contents control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// 0-based page index
    pub index: usize,
    /// 1-based label
    pub label: String,
    pub current: bool,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
<meta charset="UTF-8">
<title>{{ title }}</title>
</head>
<body>
<nav id="toc">
{%- for entry in toc %}
  <button type="button" data-i="{{ entry.index }}"{% if entry.current %} aria-current="page"{% endif %}>{{ entry.label }}</button>
{%- endfor %}
</nav>
<main id="content">
{%- if empty %}
<div class="item">{{ no_data }}</div>
{%- else %}
{{ content|safe }}
{%- endif %}
</main>
<footer>
  <button id="btnPrev" type="button"{% if prev_disabled %} disabled{% endif %}>{{ prev_label }}</button>
  <span id="pageInfo">{{ counter }}</span>
  <button id="btnNext" type="button"{% if next_disabled %} disabled{% endif %}>{{ next_label }}</button>
</footer>
</body>
</html>
"#
)]
pub struct RecipePage<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub toc: &'a [TocEntry],
    pub empty: bool,
    pub no_data: &'a str,
    /// Concatenated [`ItemView`] markup
    pub content: &'a str,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub prev_label: &'a str,
    pub next_label: &'a str,
    pub counter: &'a str,
}
