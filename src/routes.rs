//! Routing definitions.
//!
//! This module wires the handlers into the Axum router and attaches the
//! tracing middleware. Router construction is separate from `main` so tests
//! can drive the full HTTP surface against a mock backend.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::login_page))
        .route("/home", get(handlers::pages::home))
        .route("/login", post(handlers::session::login))
        .route("/logout", post(handlers::session::logout))
        .route("/payment", post(handlers::payments::payment))
        .route("/deposit", post(handlers::payments::deposit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        models::transaction::{TransactionRecord, TransactionRequest},
        services::backend::{BackendError, BankBackend},
    };
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// In-memory stand-in for the three upstream services. Records every
    /// submitted transaction so tests can assert on outbound calls.
    #[derive(Clone, Default)]
    struct MockBackend {
        balance: i64,
        history: Vec<TransactionRecord>,
        reject_submissions: bool,
        submitted: Arc<Mutex<Vec<TransactionRequest>>>,
    }

    #[async_trait]
    impl BankBackend for MockBackend {
        async fn fetch_balance(&self, _account_id: &str) -> Result<i64, BackendError> {
            Ok(self.balance)
        }

        async fn fetch_history(
            &self,
            _account_id: &str,
        ) -> Result<Vec<TransactionRecord>, BackendError> {
            Ok(self.history.clone())
        }

        async fn submit_transaction(
            &self,
            request: &TransactionRequest,
        ) -> Result<(), BackendError> {
            if self.reject_submissions {
                return Err(BackendError::Rejected(StatusCode::BAD_REQUEST));
            }
            self.submitted.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    fn test_config() -> Config {
        Config {
            port: 0,
            transactions_api_addr: "transactions:8080".into(),
            balances_api_addr: "balances:8080".into(),
            history_api_addr: "history:8080".into(),
            local_routing_num: "883745000".into(),
            session_token: "12345".into(),
            demo_account_id: "12345".into(),
            session_ttl_seconds: 300,
        }
    }

    fn test_app(backend: MockBackend) -> Router {
        app(AppState::new(test_config(), Arc::new(backend)))
    }

    fn sample_record() -> TransactionRecord {
        TransactionRecord {
            from_routing_num: "45678".into(),
            from_account_num: "012345654321".into(),
            to_routing_num: "883745000".into(),
            to_account_num: "12345".into(),
            amount: 5000,
            timestamp: 1609502400,
        }
    }

    fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_form(path: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    const SESSION: &str = "token=12345";

    #[tokio::test]
    async fn home_without_session_redirects_to_login() {
        let response = test_app(MockBackend::default())
            .oneshot(get("/home", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn home_with_bad_token_redirects_to_login() {
        let response = test_app(MockBackend::default())
            .oneshot(get("/home", Some("token=nope")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn home_with_session_renders_balance_and_history() {
        let backend = MockBackend {
            balance: 640,
            history: vec![sample_record()],
            ..Default::default()
        };
        let response = test_app(backend)
            .oneshot(get("/home", Some(SESSION)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("$6.40"));
        assert!(page.contains("012345654321"));
    }

    #[tokio::test]
    async fn login_page_redirects_home_when_already_signed_in() {
        let response = test_app(MockBackend::default())
            .oneshot(get("/", Some(SESSION)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/home");
    }

    #[tokio::test]
    async fn login_issues_cookie_and_redirects_home() {
        let response = test_app(MockBackend::default())
            .oneshot(post_form("/login", None, "username=x&password=y"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/home");

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(cookie.contains("token=12345"));
        assert!(cookie.contains("Max-Age=300"));
    }

    #[tokio::test]
    async fn logout_clears_cookie_and_home_redirects_afterwards() {
        let app = test_app(MockBackend::default());

        let response = app
            .clone()
            .oneshot(post_form("/logout", Some(SESSION), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(cookie.contains("Max-Age=0"));

        // A browser honoring Max-Age=0 drops the cookie, so the next home
        // load arrives without one
        let response = app.oneshot(get("/home", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn payment_without_session_is_401_and_submits_nothing() {
        let backend = MockBackend {
            balance: 100_000,
            ..Default::default()
        };
        let submitted = backend.submitted.clone();
        let response = test_app(backend)
            .oneshot(post_form("/payment", None, "recipient=1111111111&amount=10.00"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn payment_with_equal_balance_is_declined() {
        // balance == amount must NOT pass the strictly-greater check
        let backend = MockBackend {
            balance: 1000,
            ..Default::default()
        };
        let submitted = backend.submitted.clone();
        let response = test_app(backend)
            .oneshot(post_form(
                "/payment",
                Some(SESSION),
                "recipient=1111111111&amount=10.00",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/home?alert=insufficient_funds");
        assert!(submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn payment_with_sufficient_balance_is_submitted() {
        let backend = MockBackend {
            balance: 1001,
            ..Default::default()
        };
        let submitted = backend.submitted.clone();
        let response = test_app(backend)
            .oneshot(post_form(
                "/payment",
                Some(SESSION),
                "recipient=1111111111&amount=10.00",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/home");

        let submitted = submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(
            submitted[0],
            TransactionRequest {
                from_routing_num: "883745000".into(),
                from_account_num: "12345".into(),
                to_routing_num: "883745000".into(),
                to_account_num: "1111111111".into(),
                amount: 1000,
            }
        );
    }

    #[tokio::test]
    async fn payment_to_other_recipient_uses_free_text_account() {
        let backend = MockBackend {
            balance: 100_000,
            ..Default::default()
        };
        let submitted = backend.submitted.clone();
        let response = test_app(backend)
            .oneshot(post_form(
                "/payment",
                Some(SESSION),
                "recipient=other&other-recipient=9999999999&amount=19.99",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let submitted = submitted.lock().unwrap();
        assert_eq!(submitted[0].to_account_num, "9999999999");
        assert_eq!(submitted[0].amount, 1999);
    }

    #[tokio::test]
    async fn payment_rejected_upstream_is_surfaced() {
        let backend = MockBackend {
            balance: 100_000,
            reject_submissions: true,
            ..Default::default()
        };
        let response = test_app(backend)
            .oneshot(post_form(
                "/payment",
                Some(SESSION),
                "recipient=1111111111&amount=10.00",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/home?alert=payment_rejected");
    }

    #[tokio::test]
    async fn payment_with_bad_amount_is_400() {
        let response = test_app(MockBackend::default())
            .oneshot(post_form(
                "/payment",
                Some(SESSION),
                "recipient=1111111111&amount=ten",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deposit_submits_regardless_of_balance() {
        // zero balance, no sufficiency check applies to deposits
        let backend = MockBackend::default();
        let submitted = backend.submitted.clone();
        let body = r#"account={"account_num":"012345654321","routing_num":"45678"}&amount=5.00"#;
        let response = test_app(backend)
            .oneshot(post_form("/deposit", Some(SESSION), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/home");

        let submitted = submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(
            submitted[0],
            TransactionRequest {
                from_routing_num: "45678".into(),
                from_account_num: "012345654321".into(),
                to_routing_num: "883745000".into(),
                to_account_num: "12345".into(),
                amount: 500,
            }
        );
    }

    #[tokio::test]
    async fn deposit_without_session_is_401() {
        let backend = MockBackend::default();
        let submitted = backend.submitted.clone();
        let body = r#"account={"account_num":"012345654321","routing_num":"45678"}&amount=5.00"#;
        let response = test_app(backend)
            .oneshot(post_form("/deposit", None, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn deposit_with_malformed_account_json_is_400() {
        let response = test_app(MockBackend::default())
            .oneshot(post_form(
                "/deposit",
                Some(SESSION),
                "account=not-json&amount=5.00",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
