// storefront/src/models/shipping_address.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
  #[default]
  Home,
  Omniva,
}

impl DeliveryMethod {
  /// Fixed delivery fee in the store currency.
  pub fn price(self) -> Decimal {
    match self {
      DeliveryMethod::Home => Decimal::new(1000, 2),
      DeliveryMethod::Omniva => Decimal::new(280, 2),
    }
  }
}

/// An Omniva parcel locker picked at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OmnivaLocation {
  pub id: String,
  pub name: String,
  pub address: String,
  pub city: String,
  pub country: String,
  #[serde(rename = "type")]
  pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
  pub full_name: String,
  pub street_address: String,
  pub city: String,
  pub postal_code: String,
  pub country: String,
  pub phone_number: String,
  pub delivery_method: DeliveryMethod,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub omniva_location_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub omniva_location_details: Option<OmnivaLocation>,
  pub agree_to_terms: bool,
  pub agree_to_privacy_policy: bool,
  pub remember_details: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lat: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub lng: Option<f64>,
}

impl ShippingAddress {
  /// Reads whatever JSON was persisted into the fixed address shape.
  ///
  /// Missing or mistyped fields take their defaults: empty strings, `false`,
  /// `home` delivery. Anything other than an object yields the default address.
  pub fn normalize(raw: &Value) -> Self {
    let Some(obj) = raw.as_object() else {
      return Self::default();
    };

    let delivery_method = match text(obj, "deliveryMethod").to_ascii_lowercase().as_str() {
      "omniva" => DeliveryMethod::Omniva,
      _ => DeliveryMethod::Home,
    };

    let omniva_location_details = obj.get("omnivaLocationDetails").and_then(Value::as_object).map(|loc| OmnivaLocation {
      id: text(loc, "id"),
      name: text(loc, "name"),
      address: text(loc, "address"),
      city: text(loc, "city"),
      country: text(loc, "country"),
      kind: text(loc, "type"),
    });

    Self {
      full_name: text(obj, "fullName"),
      street_address: text(obj, "streetAddress"),
      city: text(obj, "city"),
      postal_code: text(obj, "postalCode"),
      country: text(obj, "country"),
      phone_number: text(obj, "phoneNumber"),
      delivery_method,
      omniva_location_id: Some(text(obj, "omnivaLocationId")).filter(|id| !id.is_empty()),
      omniva_location_details,
      agree_to_terms: flag(obj, "agreeToTerms"),
      agree_to_privacy_policy: flag(obj, "agreeToPrivacyPolicy"),
      remember_details: flag(obj, "rememberDetails"),
      lat: obj.get("lat").and_then(Value::as_f64),
      lng: obj.get("lng").and_then(Value::as_f64),
    }
  }
}

fn text(obj: &Map<String, Value>, key: &str) -> String {
  match obj.get(key) {
    Some(Value::String(s)) => s.clone(),
    Some(Value::Number(n)) => n.to_string(),
    _ => String::new(),
  }
}

fn flag(obj: &Map<String, Value>, key: &str) -> bool {
  obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}
