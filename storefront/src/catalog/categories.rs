// storefront/src/catalog/categories.rs

use serde::Serialize;

use crate::i18n::dictionary::PartialNamedText;
use crate::i18n::{Dictionary, Locale};

/// `(key, image, English name, English description)`.
const HOME_CATEGORIES: [(&str, &str, &str, &str); 3] = [
  (
    "honey",
    "/images/categories/honey.jpg",
    "Honey",
    "Pure, natural honey with rich flavors and golden hues",
  ),
  (
    "beeswax",
    "/images/categories/beeswax.jpg",
    "Beeswax",
    "Natural beeswax products for home and wellness",
  ),
  (
    "honeycomb",
    "/images/categories/honeycomb.jpg",
    "Honeycomb",
    "Fresh, raw honeycomb straight from the hive",
  ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeCategoryLink {
  pub key: String,
  pub name: String,
  pub description: String,
  pub image: String,
  pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeCategories {
  pub lang: Locale,
  pub title: String,
  pub shop_now: String,
  pub categories: Vec<HomeCategoryLink>,
}

/// Category links of the home page. Entries missing from the locale's
/// dictionary fall back to English.
pub fn home_categories(locale: Locale, dict: &Dictionary) -> HomeCategories {
  let section = dict.product_categories.clone().unwrap_or_default();

  let categories = HOME_CATEGORIES
    .iter()
    .map(|(key, image, fallback_name, fallback_description)| {
      let text: Option<&PartialNamedText> = match *key {
        "honey" => section.categories.honey.as_ref(),
        "beeswax" => section.categories.beeswax.as_ref(),
        _ => section.categories.honeycomb.as_ref(),
      };
      HomeCategoryLink {
        key: (*key).to_string(),
        name: text
          .and_then(|t| t.name.clone())
          .unwrap_or_else(|| (*fallback_name).to_string()),
        description: text
          .and_then(|t| t.description.clone())
          .unwrap_or_else(|| (*fallback_description).to_string()),
        image: (*image).to_string(),
        link: format!("/{}/search?category={}", locale, key),
      }
    })
    .collect();

  HomeCategories {
    lang: locale,
    title: section.title.unwrap_or_else(|| "Product Categories".to_string()),
    shop_now: section.shop_now.unwrap_or_else(|| "Shop Now".to_string()),
    categories,
  }
}
