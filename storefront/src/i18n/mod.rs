// storefront/src/i18n/mod.rs

//! Supported locales and their embedded text bundles.

pub mod dictionary;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use dictionary::Dictionary;

use crate::errors::{AppError, Result as AppResult};
use dictionary::DatesText;

const EN_BUNDLE: &str = include_str!("../../dictionaries/en.json");
const ET_BUNDLE: &str = include_str!("../../dictionaries/et.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  En,
  Et,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::En, Locale::Et];

  pub fn as_str(self) -> &'static str {
    match self {
      Locale::En => "en",
      Locale::Et => "et",
    }
  }
}

impl FromStr for Locale {
  type Err = AppError;

  fn from_str(raw: &str) -> AppResult<Self> {
    match raw {
      "en" => Ok(Locale::En),
      "et" => Ok(Locale::Et),
      other => Err(AppError::NotFound(format!("Unsupported locale '{}'.", other))),
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One parsed bundle per supported locale.
#[derive(Debug, Clone)]
pub struct Dictionaries {
  en: Arc<Dictionary>,
  et: Arc<Dictionary>,
}

impl Dictionaries {
  /// Parses the bundles compiled into the binary.
  pub fn embedded() -> AppResult<Self> {
    Ok(Self {
      en: Arc::new(parse_bundle(Locale::En, EN_BUNDLE)?),
      et: Arc::new(parse_bundle(Locale::Et, ET_BUNDLE)?),
    })
  }

  pub fn get(&self, locale: Locale) -> Arc<Dictionary> {
    match locale {
      Locale::En => Arc::clone(&self.en),
      Locale::Et => Arc::clone(&self.et),
    }
  }
}

fn parse_bundle(locale: Locale, raw: &str) -> AppResult<Dictionary> {
  let dictionary: Dictionary = serde_json::from_str(raw)
    .map_err(|e| AppError::Config(format!("Dictionary '{}' is malformed: {}", locale, e)))?;
  if dictionary.dates.months.len() != 12 {
    return Err(AppError::Config(format!(
      "Dictionary '{}' must list 12 month names, found {}",
      locale,
      dictionary.dates.months.len()
    )));
  }
  Ok(dictionary)
}

/// Formats `date` the way the locale writes a full date, e.g. "October 16, 2026".
pub fn format_long_date(date: NaiveDate, dates: &DatesText) -> String {
  let month = dates
    .months
    .get(date.month0() as usize)
    .cloned()
    .unwrap_or_else(|| date.month().to_string());
  dates
    .long_format
    .replace("{day}", &date.day().to_string())
    .replace("{month}", &month)
    .replace("{year}", &date.year().to_string())
}
