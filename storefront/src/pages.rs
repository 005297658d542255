// storefront/src/pages.rs

//! Static page payloads and the metadata block shared by every page.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::AppConfig;
use crate::i18n::dictionary::{
  ContractDeliveryText, ContractIntroText, ContractPaymentText, ContractReceivingText, ContractWithdrawalText,
  TitledList,
};
use crate::i18n::{format_long_date, Dictionary, Locale};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub site_name: String,
  pub canonical_url: String,
}

impl PageMeta {
  pub fn new(title: String, description: Option<String>, config: &AppConfig, path: &str) -> Self {
    Self {
      title,
      description,
      site_name: config.app_name.clone(),
      canonical_url: format!("{}{}", config.app_base_url.trim_end_matches('/'), path),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
  pub title: String,
  pub description: String,
  pub email_label: String,
  pub email: Option<String>,
  pub phone_label: String,
  pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceContractPage {
  pub lang: Locale,
  pub meta: PageMeta,
  pub title: String,
  /// Localized long form of the day the page was served.
  pub date: String,
  pub intro: ContractIntroText,
  pub terms: TitledList,
  pub payment: ContractPaymentText,
  pub delivery: ContractDeliveryText,
  pub receiving: ContractReceivingText,
  pub withdrawal: ContractWithdrawalText,
  pub contact: ContactDetails,
}

impl DistanceContractPage {
  pub fn build(locale: Locale, dict: &Dictionary, config: &AppConfig, today: NaiveDate) -> Self {
    let text = &dict.distance_contract;
    Self {
      lang: locale,
      meta: PageMeta::new(
        text.meta.title.clone(),
        Some(text.meta.description.clone()),
        config,
        &format!("/{}/distance-contract", locale),
      ),
      title: text.title.clone(),
      date: format_long_date(today, &dict.dates),
      intro: text.intro.clone(),
      terms: text.terms.clone(),
      payment: text.payment.clone(),
      delivery: text.delivery.clone(),
      receiving: text.receiving.clone(),
      withdrawal: text.withdrawal.clone(),
      contact: ContactDetails {
        title: text.contact.title.clone(),
        description: text.contact.description.clone(),
        email_label: text.contact.email.clone(),
        email: config.contact_email.clone(),
        phone_label: text.contact.phone.clone(),
        phone: config.contact_phone.clone(),
      },
    }
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnauthorizedPage {
  pub lang: Locale,
  pub title: String,
  pub message: String,
  pub back_to_home: String,
  pub home_href: String,
}

impl UnauthorizedPage {
  pub fn build(locale: Locale, dict: &Dictionary) -> Self {
    Self {
      lang: locale,
      title: dict.unauthorized.title.clone(),
      message: dict.unauthorized.message.clone(),
      back_to_home: dict.unauthorized.back_to_home.clone(),
      home_href: format!("/{}/categories", locale),
    }
  }
}
