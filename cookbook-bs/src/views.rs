//! Budget selector page markup
//!
//! All inserted text goes through askama's HTML escaping.

use askama::Template;

/// One catalog card with its pick action
#[derive(Debug, Clone)]
pub struct CardView {
    pub id: i64,
    pub name: String,
    pub summary: String,
    pub meta: String,
    pub tags: Vec<String>,
}

/// The currently selected recipe
#[derive(Debug, Clone)]
pub struct SelectionView {
    pub name: String,
    pub summary: String,
    pub meta: String,
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
<form id="budgetForm">
  <label for="budget">{{ budget_label }}</label>
  <input id="budget" type="number" min="0" value="{{ budget }}">
  <button type="submit">{{ filter_label }}</button>
</form>
<p id="status">{{ status }}</p>
<section id="recipeList">
{%- if show_no_match %}
  <p>{{ no_match }}</p>
{%- endif %}
{%- for card in cards %}
  <article class="card" data-id="{{ card.id }}">
    <div class="meta">{{ card.meta }}</div>
    <h3>{{ card.name }}</h3>
    <p>{{ card.summary }}</p>
    <div class="meta">
      {%- for tag in card.tags %}
      <span class="badge">{{ tag }}</span>
      {%- endfor %}
    </div>
    <button type="button" data-action="pick" data-id="{{ card.id }}">{{ pick_label }}</button>
  </article>
{%- endfor %}
</section>
<section id="selection">
{%- match selection %}
{%- when Some with (sel) %}
  <h3>{{ sel.name }}</h3>
  <p>{{ sel.summary }}</p>
  <p class="meta">{{ sel.meta }}</p>
{%- when None %}
  <p class="selection__empty">{{ selection_empty }}</p>
{%- endmatch %}
</section>
<button id="saveBtn" type="button"{% if save_disabled %} disabled{% endif %}>{{ save_label }}</button>
</body>
</html>
"#
)]
pub struct BudgetPage<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub budget_label: &'a str,
    pub filter_label: &'a str,
    pub budget: &'a str,
    pub status: &'a str,
    pub show_no_match: bool,
    pub no_match: &'a str,
    pub cards: Vec<CardView>,
    pub pick_label: &'a str,
    pub selection: Option<SelectionView>,
    pub selection_empty: &'a str,
    pub save_disabled: bool,
    pub save_label: &'a str,
}
