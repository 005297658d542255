// storefront/src/catalog/mod.rs

//! Catalog navigation: search filter links and the home page category links.

pub mod categories;
pub mod search;

pub use categories::{home_categories, HomeCategories, HomeCategoryLink};
pub use search::{FilterOverride, SearchPagePayload, SearchParams, SearchQuery};

/// Upper-cases the first letter of every space separated word.
pub fn capitalize_words(text: &str) -> String {
  text
    .split(' ')
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}
