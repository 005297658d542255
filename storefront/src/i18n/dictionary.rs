// storefront/src/i18n/dictionary.rs

//! Typed shape of the JSON text bundles under `dictionaries/`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
  pub navigation: NavigationText,
  pub common: CommonText,
  pub products: ProductsText,
  pub order: OrderText,
  /// Home page category section. Entries may be missing; callers fall back to English.
  #[serde(default)]
  pub product_categories: Option<ProductCategoriesText>,
  #[serde(rename = "distance_contract")]
  pub distance_contract: DistanceContractText,
  pub unauthorized: UnauthorizedText,
  pub dates: DatesText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaText {
  pub title: String,
  pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigationText {
  pub home: String,
  pub products: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonText {
  pub search: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsText {
  pub meta: ProductsMetaText,
  pub search: SearchBoxText,
  pub sort: SortText,
  pub categories: CategoryCardsText,
  pub filters: FiltersText,
  pub no_results: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsMetaText {
  pub title: String,
  /// Contains a `{query}` placeholder.
  pub search_title: String,
  /// Contains a `{category}` placeholder.
  pub category_title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchBoxText {
  pub placeholder: String,
  pub button: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortText {
  pub label: String,
  pub newest: String,
  pub lowest_price: String,
  pub highest_price: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedText {
  pub name: String,
  pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCardsText {
  pub all: NamedText,
  pub honey: NamedText,
  pub beeswax: NamedText,
  pub honeycomb: NamedText,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersText {
  pub currently_viewing: String,
  pub view_products: String,
}

/// Order page text, handed to the client as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderText {
  pub meta: MetaText,
  pub title: String,
  pub shipping: OrderShippingText,
  pub payment: OrderPaymentText,
  pub items: OrderItemsText,
  pub summary: OrderSummaryText,
  pub buttons: OrderButtonsText,
  pub paypal: PaypalText,
  pub stripe: StripeText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderShippingText {
  pub title: String,
  pub phone: String,
  pub delivered_at: String,
  pub shipped_at: String,
  pub not_shipped: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPaymentText {
  pub title: String,
  pub method: String,
  pub paid_at: String,
  pub not_paid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemsText {
  pub title: String,
  pub image: String,
  pub name: String,
  pub quantity: String,
  pub price: String,
  pub total: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummaryText {
  pub title: String,
  pub items: String,
  pub shipping: String,
  pub tax: String,
  pub total: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderButtonsText {
  pub processing: String,
  pub mark_as_paid: String,
  pub mark_as_delivered: String,
  pub mark_as_shipped: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaypalText {
  pub loading: String,
  pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeText {
  pub submit: String,
  pub errors: StripeErrorsText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeErrorsText {
  pub unexpected: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoriesText {
  pub title: Option<String>,
  pub shop_now: Option<String>,
  #[serde(default)]
  pub categories: HomeCategoriesText,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeCategoriesText {
  pub honey: Option<PartialNamedText>,
  pub beeswax: Option<PartialNamedText>,
  pub honeycomb: Option<PartialNamedText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialNamedText {
  pub name: Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceContractText {
  pub meta: MetaText,
  pub title: String,
  pub intro: ContractIntroText,
  pub terms: TitledList,
  pub payment: ContractPaymentText,
  pub delivery: ContractDeliveryText,
  pub receiving: ContractReceivingText,
  pub withdrawal: ContractWithdrawalText,
  pub contact: ContractContactText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractIntroText {
  pub description1: String,
  pub description2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitledList {
  pub title: String,
  pub list: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractPaymentText {
  pub title: String,
  pub description: String,
  pub methods: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractDeliveryText {
  pub title: String,
  pub methods: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractReceivingText {
  pub title: String,
  pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractWithdrawalText {
  pub title: String,
  pub description: String,
  pub conditions: TitledList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractContactText {
  pub title: String,
  pub description: String,
  /// Label shown next to the contact e-mail address.
  pub email: String,
  /// Label shown next to the contact phone number.
  pub phone: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnauthorizedText {
  pub title: String,
  pub message: String,
  pub back_to_home: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatesText {
  /// January first.
  pub months: Vec<String>,
  /// Uses `{day}`, `{month}` and `{year}` placeholders.
  pub long_format: String,
}
