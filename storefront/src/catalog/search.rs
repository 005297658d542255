// storefront/src/catalog/search.rs

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::capitalize_words;
use crate::config::AppConfig;
use crate::i18n::{Dictionary, Locale};
use crate::pages::PageMeta;

const ALL: &str = "all";
const DEFAULT_SORT: &str = "newest";
const DEFAULT_PAGE: &str = "1";

/// `(dictionary key, sort value)` in display order.
const SORT_ORDERS: [(&str, &str); 3] = [("newest", "newest"), ("lowestPrice", "lowest"), ("highestPrice", "highest")];

const CATEGORY_CARDS: [(&str, &str); 4] = [
  (
    "all",
    "/images/hero-section/alternative-medicine-concept-ingredients-for-flu-2024-10-18-04-51-28-utc.jpg",
  ),
  ("honey", "/images/categories/honey.jpg"),
  ("beeswax", "/images/categories/beeswax.jpg"),
  ("honeycomb", "/images/categories/honeycomb.jpg"),
];

/// Raw `?q=&category=&sort=&page=` query of a search request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
  pub q: Option<String>,
  pub category: Option<String>,
  pub sort: Option<String>,
  pub page: Option<String>,
}

/// Current state of the catalog filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
  pub q: String,
  pub category: String,
  pub sort: String,
  pub page: String,
}

impl Default for SearchParams {
  fn default() -> Self {
    Self {
      q: ALL.to_string(),
      category: ALL.to_string(),
      sort: DEFAULT_SORT.to_string(),
      page: DEFAULT_PAGE.to_string(),
    }
  }
}

/// Defaults fill in absent parameters only; `?q=` keeps its empty value.
impl From<SearchQuery> for SearchParams {
  fn from(query: SearchQuery) -> Self {
    let defaults = Self::default();
    Self {
      q: query.q.unwrap_or(defaults.q),
      category: query.category.unwrap_or(defaults.category),
      sort: query.sort.unwrap_or(defaults.sort),
      page: query.page.unwrap_or(defaults.page),
    }
  }
}

/// Changes applied on top of the current [`SearchParams`] when building a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOverride {
  pub category: Option<String>,
  pub sort: Option<String>,
  pub page: Option<String>,
  pub query: Option<String>,
}

impl FilterOverride {
  pub fn category(category: impl Into<String>) -> Self {
    Self {
      category: Some(category.into()),
      ..Self::default()
    }
  }

  pub fn sort(sort: impl Into<String>) -> Self {
    Self {
      sort: Some(sort.into()),
      ..Self::default()
    }
  }

  pub fn page(page: impl Into<String>) -> Self {
    Self {
      page: Some(page.into()),
      ..Self::default()
    }
  }

  pub fn query(query: impl Into<String>) -> Self {
    Self {
      query: Some(query.into()),
      ..Self::default()
    }
  }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

impl SearchParams {
  /// `q`, `category`, `sort`, `page` in that order, form-url-encoded.
  ///
  /// Category, sort and page overrides only apply when non-empty. A query
  /// override applies whenever present, so `Some("")` clears the search.
  pub fn query_string(&self, overrides: &FilterOverride) -> String {
    let q = overrides.query.as_deref().unwrap_or(&self.q);
    let category = non_empty(&overrides.category).unwrap_or(&self.category);
    let sort = non_empty(&overrides.sort).unwrap_or(&self.sort);
    let page = non_empty(&overrides.page).unwrap_or(&self.page);

    form_urlencoded::Serializer::new(String::new())
      .append_pair("q", q)
      .append_pair("category", category)
      .append_pair("sort", sort)
      .append_pair("page", page)
      .finish()
  }

  pub fn filter_url(&self, locale: Locale, overrides: &FilterOverride) -> String {
    format!("/{}/search?{}", locale, self.query_string(overrides))
  }

  /// The requested page as a positive number, 1 when unparsable.
  pub fn page_number(&self) -> u32 {
    self.page.trim().parse::<u32>().ok().filter(|p| *p > 0).unwrap_or(1)
  }

  pub fn is_query_set(&self) -> bool {
    is_filter_set(&self.q)
  }

  pub fn is_category_set(&self) -> bool {
    is_filter_set(&self.category)
  }

  /// Localized title for the current filters.
  pub fn meta_title(&self, dict: &Dictionary) -> String {
    let meta = &dict.products.meta;
    let mut parts = Vec::new();
    if self.is_query_set() {
      parts.push(meta.search_title.replace("{query}", &self.q));
    }
    if self.is_category_set() {
      parts.push(meta.category_title.replace("{category}", &self.category));
    }
    if parts.is_empty() {
      meta.title.clone()
    } else {
      parts.join(" ")
    }
  }

  pub fn breadcrumbs(&self, locale: Locale, dict: &Dictionary) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb {
      label: dict.navigation.products.clone(),
      href: format!("/{}/search", locale),
    }];
    if self.category != ALL {
      crumbs.push(Breadcrumb {
        label: capitalize_words(&self.category),
        href: self.filter_url(locale, &FilterOverride::category(self.category.clone())),
      });
    }
    crumbs
  }

  pub fn sort_options(&self, locale: Locale, dict: &Dictionary) -> Vec<SortOption> {
    SORT_ORDERS
      .iter()
      .map(|(key, value)| {
        let label = match *key {
          "lowestPrice" => &dict.products.sort.lowest_price,
          "highestPrice" => &dict.products.sort.highest_price,
          _ => &dict.products.sort.newest,
        };
        SortOption {
          value: (*value).to_string(),
          label: label.clone(),
          href: self.filter_url(locale, &FilterOverride::sort(*value)),
          active: self.sort == *value,
        }
      })
      .collect()
  }

  pub fn category_cards(&self, locale: Locale, dict: &Dictionary) -> Vec<CategoryCard> {
    let text = &dict.products.categories;
    CATEGORY_CARDS
      .iter()
      .map(|(key, image)| {
        let named = match *key {
          "honey" => &text.honey,
          "beeswax" => &text.beeswax,
          "honeycomb" => &text.honeycomb,
          _ => &text.all,
        };
        let active = self.category == *key;
        CategoryCard {
          key: (*key).to_string(),
          name: named.name.clone(),
          description: named.description.clone(),
          image: (*image).to_string(),
          href: self.filter_url(locale, &FilterOverride::category(*key)),
          active,
          cta_label: if active {
            dict.products.filters.currently_viewing.clone()
          } else {
            dict.products.filters.view_products.clone()
          },
        }
      })
      .collect()
  }

  pub fn search_form(&self, locale: Locale, dict: &Dictionary) -> SearchForm {
    SearchForm {
      action: format!("/{}/search", locale),
      field_name: "q".to_string(),
      default_value: if self.q == ALL { String::new() } else { self.q.clone() },
      placeholder: dict.products.search.placeholder.clone(),
      button_label: dict.products.search.button.clone(),
    }
  }
}

fn is_filter_set(value: &str) -> bool {
  value != ALL && !value.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
  pub label: String,
  pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
  pub value: String,
  pub label: String,
  pub href: String,
  pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
  pub key: String,
  pub name: String,
  pub description: String,
  pub image: String,
  pub href: String,
  pub active: bool,
  pub cta_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchForm {
  pub action: String,
  pub field_name: String,
  pub default_value: String,
  pub placeholder: String,
  pub button_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLabels {
  pub search: String,
  pub sort: String,
  pub no_results: String,
}

/// Navigation model of the search page. Product listing is not part of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPagePayload {
  pub lang: Locale,
  pub params: SearchParams,
  pub page_number: u32,
  pub page_size: u32,
  pub meta: PageMeta,
  pub breadcrumbs: Vec<Breadcrumb>,
  pub categories: Vec<CategoryCard>,
  pub sort_options: Vec<SortOption>,
  pub search_form: SearchForm,
  pub labels: SearchLabels,
}

impl SearchPagePayload {
  pub fn build(params: SearchParams, locale: Locale, dict: &Dictionary, config: &AppConfig) -> Self {
    let canonical_path = params.filter_url(locale, &FilterOverride::default());
    Self {
      lang: locale,
      page_number: params.page_number(),
      page_size: config.page_size,
      meta: PageMeta::new(params.meta_title(dict), None, config, &canonical_path),
      breadcrumbs: params.breadcrumbs(locale, dict),
      categories: params.category_cards(locale, dict),
      sort_options: params.sort_options(locale, dict),
      search_form: params.search_form(locale, dict),
      labels: SearchLabels {
        search: dict.common.search.clone(),
        sort: dict.products.sort.label.clone(),
        no_results: dict.products.no_results.clone(),
      },
      params,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::i18n::Dictionaries;

  fn params(q: &str, category: &str, sort: &str, page: &str) -> SearchParams {
    SearchParams {
      q: q.to_string(),
      category: category.to_string(),
      sort: sort.to_string(),
      page: page.to_string(),
    }
  }

  #[test]
  fn category_override_keeps_the_other_filters() {
    let state = SearchParams::default();
    assert_eq!(
      state.query_string(&FilterOverride::category("honey")),
      "q=all&category=honey&sort=newest&page=1"
    );
  }

  #[test]
  fn empty_override_reproduces_the_state() {
    let state = params("linden honey", "honey", "lowest", "2");
    let first = state.query_string(&FilterOverride::default());
    let second = state.query_string(&FilterOverride::default());
    assert_eq!(first, second);
    assert_eq!(first, "q=linden+honey&category=honey&sort=lowest&page=2");
  }

  #[test]
  fn empty_category_sort_and_page_overrides_are_ignored() {
    let state = params("wax", "beeswax", "highest", "3");
    let overrides = FilterOverride {
      category: Some(String::new()),
      sort: Some(String::new()),
      page: Some(String::new()),
      query: None,
    };
    assert_eq!(state.query_string(&overrides), "q=wax&category=beeswax&sort=highest&page=3");
  }

  #[test]
  fn empty_query_override_clears_the_search() {
    let state = params("wax", "all", "newest", "1");
    assert_eq!(
      state.query_string(&FilterOverride::query("")),
      "q=&category=all&sort=newest&page=1"
    );
  }

  #[test]
  fn values_are_form_encoded() {
    let state = params("mesi & vaha", "all", "newest", "1");
    assert_eq!(
      state.filter_url(Locale::Et, &FilterOverride::page("2")),
      "/et/search?q=mesi+%26+vaha&category=all&sort=newest&page=2"
    );
  }

  #[test]
  fn defaults_fill_absent_parameters_only() {
    let from_query = SearchParams::from(SearchQuery {
      q: Some(String::new()),
      category: None,
      sort: Some("lowest".to_string()),
      page: None,
    });
    assert_eq!(from_query, params("", "all", "lowest", "1"));
  }

  #[test]
  fn page_number_falls_back_to_one() {
    assert_eq!(params("all", "all", "newest", "4").page_number(), 4);
    assert_eq!(params("all", "all", "newest", "0").page_number(), 1);
    assert_eq!(params("all", "all", "newest", "abc").page_number(), 1);
    assert_eq!(params("all", "all", "newest", "").page_number(), 1);
  }

  #[test]
  fn meta_title_combines_query_and_category() {
    let dict = Dictionaries::embedded().unwrap().get(Locale::En);
    assert_eq!(SearchParams::default().meta_title(&dict), "Products");
    assert_eq!(params("  ", "all", "newest", "1").meta_title(&dict), "Products");
    assert_eq!(
      params("linden", "all", "newest", "1").meta_title(&dict),
      "Search results for \"linden\""
    );
    assert_eq!(
      params("linden", "honey", "newest", "1").meta_title(&dict),
      "Search results for \"linden\" honey products"
    );
  }

  #[test]
  fn breadcrumbs_add_the_category_when_filtered() {
    let dict = Dictionaries::embedded().unwrap().get(Locale::En);
    let all = SearchParams::default().breadcrumbs(Locale::En, &dict);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].href, "/en/search");

    let honey = params("all", "honey", "newest", "1").breadcrumbs(Locale::En, &dict);
    assert_eq!(honey.len(), 2);
    assert_eq!(honey[1].label, "Honey");
    assert_eq!(honey[1].href, "/en/search?q=all&category=honey&sort=newest&page=1");
  }

  #[test]
  fn sort_options_and_cards_mark_the_active_entry() {
    let dict = Dictionaries::embedded().unwrap().get(Locale::En);
    let state = params("all", "beeswax", "lowest", "1");

    let sorts = state.sort_options(Locale::En, &dict);
    assert_eq!(sorts.iter().map(|s| s.value.as_str()).collect::<Vec<_>>(), vec!["newest", "lowest", "highest"]);
    assert_eq!(sorts.iter().filter(|s| s.active).count(), 1);
    assert!(sorts[1].active);
    assert_eq!(sorts[2].href, "/en/search?q=all&category=beeswax&sort=highest&page=1");

    let cards = state.category_cards(Locale::En, &dict);
    assert_eq!(cards.len(), 4);
    let active: Vec<_> = cards.iter().filter(|c| c.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].key, "beeswax");
    assert_eq!(active[0].cta_label, "Currently viewing");
    assert_eq!(cards[0].cta_label, "View products");
  }

  #[test]
  fn search_form_hides_the_all_placeholder() {
    let dict = Dictionaries::embedded().unwrap().get(Locale::En);
    assert_eq!(SearchParams::default().search_form(Locale::En, &dict).default_value, "");
    assert_eq!(
      params("propolis", "all", "newest", "1").search_form(Locale::En, &dict).default_value,
      "propolis"
    );
  }
}
