// storefront/tests/stripe_gateway_tests.rs

//! Drives `StripeGateway` against a local stand-in for the Stripe API.

use actix_web::dev::ServerHandle;
use actix_web::{rt, web, App, HttpRequest, HttpResponse, HttpServer};
use parking_lot::Mutex;
use secrecy::SecretString;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use storefront::models::Currency;
use storefront::services::payment_gateway::PaymentIntentStatus;
use storefront::services::{GatewayError, PaymentGateway, PaymentIntentRequest, StripeGateway};

#[derive(Debug, Clone)]
struct SeenRequest {
  authorization: Option<String>,
  idempotency_key: Option<String>,
  form: HashMap<String, String>,
}

type Seen = Arc<Mutex<Vec<SeenRequest>>>;

fn header(req: &HttpRequest, name: &str) -> Option<String> {
  req.headers().get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

/// `amount=402` answers with a card error, `amount=503` with a non-JSON
/// outage page, anything else with a fresh intent.
async fn fake_payment_intents(
  req: HttpRequest,
  form: web::Form<HashMap<String, String>>,
  seen: web::Data<Seen>,
) -> HttpResponse {
  let form = form.into_inner();
  seen.lock().push(SeenRequest {
    authorization: header(&req, "authorization"),
    idempotency_key: header(&req, "idempotency-key"),
    form: form.clone(),
  });

  match form.get("amount").map(String::as_str) {
    Some("402") => HttpResponse::PaymentRequired().json(json!({
      "error": {"type": "card_error", "code": "card_declined", "message": "Your card was declined."}
    })),
    Some("503") => HttpResponse::ServiceUnavailable().body("upstream maintenance"),
    amount => HttpResponse::Ok().json(json!({
      "id": "pi_test_123",
      "object": "payment_intent",
      "amount": amount.and_then(|a| a.parse::<i64>().ok()).unwrap_or_default(),
      "currency": form.get("currency").cloned().unwrap_or_default(),
      "status": "requires_payment_method",
      "client_secret": "pi_test_123_secret_abc",
      "metadata": {"orderId": form.get("metadata[orderId]").cloned().unwrap_or_default()},
      "livemode": false
    })),
  }
}

async fn start_fake_stripe() -> (String, Seen, ServerHandle) {
  let seen: Seen = Arc::new(Mutex::new(Vec::new()));
  let data = web::Data::new(seen.clone());
  let server = HttpServer::new(move || {
    App::new()
      .app_data(data.clone())
      .route("/v1/payment_intents", web::post().to(fake_payment_intents))
  })
  .workers(1)
  .bind(("127.0.0.1", 0))
  .expect("bind fake stripe");
  let addr = server.addrs()[0];
  let server = server.run();
  let handle = server.handle();
  rt::spawn(server);
  (format!("http://{}/", addr), seen, handle)
}

fn request(amount: i64) -> PaymentIntentRequest {
  PaymentIntentRequest {
    amount,
    currency: Currency::parse("EUR").unwrap(),
    metadata: BTreeMap::from([("orderId".to_string(), "ORD-1".to_string())]),
    idempotency_key: format!("order-ORD-1-pi-{}-EUR", amount),
  }
}

fn gateway(base: &str) -> StripeGateway {
  StripeGateway::new(base, SecretString::from("sk_test_local".to_string())).unwrap()
}

#[actix_web::test]
async fn creates_intent_with_form_body_and_idempotency_key() {
  let (base, seen, handle) = start_fake_stripe().await;

  let intent = gateway(&base).create_payment_intent(&request(1999)).await.unwrap();

  assert_eq!(intent.id, "pi_test_123");
  assert_eq!(intent.amount, 1999);
  assert_eq!(intent.currency, "eur");
  assert_eq!(intent.status, PaymentIntentStatus::RequiresPaymentMethod);
  assert_eq!(intent.client_secret.as_deref(), Some("pi_test_123_secret_abc"));
  assert_eq!(intent.metadata.get("orderId").map(String::as_str), Some("ORD-1"));

  let seen = seen.lock().clone();
  assert_eq!(seen.len(), 1);
  assert_eq!(seen[0].authorization.as_deref(), Some("Bearer sk_test_local"));
  assert_eq!(seen[0].idempotency_key.as_deref(), Some("order-ORD-1-pi-1999-EUR"));
  assert_eq!(seen[0].form.get("amount").map(String::as_str), Some("1999"));
  assert_eq!(seen[0].form.get("currency").map(String::as_str), Some("eur"));
  assert_eq!(seen[0].form.get("metadata[orderId]").map(String::as_str), Some("ORD-1"));

  handle.stop(false).await;
}

#[actix_web::test]
async fn stripe_error_envelope_becomes_rejection() {
  let (base, _seen, handle) = start_fake_stripe().await;

  let err = gateway(&base).create_payment_intent(&request(402)).await.unwrap_err();

  assert_eq!(
    err,
    GatewayError::Rejected {
      status: 402,
      code: Some("card_declined".to_string()),
      message: "Your card was declined.".to_string(),
    }
  );
  assert!(!err.is_retryable());

  handle.stop(false).await;
}

#[actix_web::test]
async fn non_json_server_error_is_retryable() {
  let (base, _seen, handle) = start_fake_stripe().await;

  let err = gateway(&base).create_payment_intent(&request(503)).await.unwrap_err();

  match &err {
    GatewayError::Rejected { status, code, message } => {
      assert_eq!(*status, 503);
      assert!(code.is_none());
      assert_eq!(message, "upstream maintenance");
    }
    other => panic!("expected rejection, got {:?}", other),
  }
  assert!(err.is_retryable());

  handle.stop(false).await;
}

#[actix_web::test]
async fn unreachable_api_is_unavailable() {
  // Nothing listens on the discard port.
  let err = gateway("http://127.0.0.1:9").create_payment_intent(&request(500)).await.unwrap_err();
  assert!(matches!(err, GatewayError::Unavailable(_)));
  assert!(err.is_retryable());
}
