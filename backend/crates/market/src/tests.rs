//! Unit tests for market crate
//! Target: C0 coverage 100%, C1 coverage 80%

#[cfg(test)]
mod commission_tests {
    use crate::domain::services::*;
    use crate::domain::value_objects::CommissionRate;

    #[test]
    fn test_split_is_exact_for_whole_percents() {
        let split = split_commission(10_000, CommissionRate::new(10).unwrap());
        assert_eq!(split.commission, 1_000);
        assert_eq!(split.seller_amount, 9_000);
    }

    #[test]
    fn test_split_truncates_commission() {
        // 999 * 10% = 99.9; commission rounds down, seller keeps the rest
        let split = split_commission(999, CommissionRate::new(10).unwrap());
        assert_eq!(split.commission, 99);
        assert_eq!(split.seller_amount, 900);
    }

    #[test]
    fn test_split_sums_to_amount() {
        for amount in [0, 1, 7, 99, 100, 101, 999, 123_456_789] {
            for percent in [0, 1, 10, 33, 50, 99, 100] {
                let rate = CommissionRate::new(percent).unwrap();
                let split = split_commission(amount, rate);
                assert_eq!(
                    split.commission + split.seller_amount,
                    amount,
                    "split must conserve the amount ({amount} at {percent}%)"
                );
            }
        }
    }

    #[test]
    fn test_split_extremes() {
        let all = split_commission(500, CommissionRate::new(100).unwrap());
        assert_eq!(all.commission, 500);
        assert_eq!(all.seller_amount, 0);

        let none = split_commission(500, CommissionRate::new(0).unwrap());
        assert_eq!(none.commission, 0);
        assert_eq!(none.seller_amount, 500);
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use crate::domain::value_objects::CommissionRate;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = MarketConfig::default();

        assert_eq!(config.commission_rate, CommissionRate::new(10).unwrap());
        assert_eq!(config.withdrawal_fee, 50);
        assert_eq!(config.min_withdrawal, 1_000);
        assert_eq!(config.max_withdrawal, 500_000);
        assert!(config.escrow_enabled);
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert_eq!(config.max_login_attempts, 5);
        assert_eq!(config.login_lock_time, Duration::from_secs(900));
        assert_eq!(config.rate_limit.max_requests, 100);
        assert_eq!(config.rate_limit.window, Duration::from_secs(60));
        assert_eq!(config.csrf_cookie_name, "csrf_token");
        assert!(config.force_https);
        assert!(config.listen_port.is_none());
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_listen_port_feeds_https_check() {
        use axum::http::HeaderMap;
        use platform::cookie::is_secure_request;

        let mut config = MarketConfig::default();
        let headers = HeaderMap::new();

        // Without a forwarded-protocol header the check falls back to the
        // local port: unknown port is insecure, 443 is secure.
        assert!(!is_secure_request(&headers, config.listen_port));

        config.listen_port = Some(443);
        assert!(is_secure_request(&headers, config.listen_port));

        config.listen_port = Some(8080);
        assert!(!is_secure_request(&headers, config.listen_port));
    }

    #[test]
    fn test_development_config() {
        let config = MarketConfig::development();

        assert!(!config.force_https);
        assert!(!config.cookie_secure);
        // Everything else stays at the defaults
        assert_eq!(config.withdrawal_fee, 50);
    }

    #[test]
    fn test_ttl_helpers() {
        let config = MarketConfig::default();
        assert_eq!(config.session_ttl_ms(), 3_600_000);
        assert_eq!(config.login_lock_time_ms(), 900_000);
    }
}

#[cfg(test)]
mod models_tests {
    use crate::presentation::dto::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_create_order_request_deserialization() {
        let json = r#"{"buyerId":"00000000-0000-0000-0000-000000000000","productId":"00000000-0000-0000-0000-000000000001"}"#;
        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.buyer_id, Uuid::nil());
        assert_ne!(request.product_id, Uuid::nil());
    }

    #[test]
    fn test_payment_request_body_deserialization() {
        let json = r#"{"userId":"00000000-0000-0000-0000-000000000000","amount":5000,"paymentType":"withdrawal"}"#;
        let body: PaymentRequestBody = serde_json::from_str(json).unwrap();

        assert_eq!(body.amount, 5000);
        assert_eq!(body.payment_type, "withdrawal");
        // orderId is optional and defaults to absent
        assert!(body.order_id.is_none());
    }

    #[test]
    fn test_payment_request_body_accepts_order_id() {
        let json = r#"{"userId":"00000000-0000-0000-0000-000000000000","amount":5000,"paymentType":"deposit","orderId":"00000000-0000-0000-0000-000000000002"}"#;
        let body: PaymentRequestBody = serde_json::from_str(json).unwrap();

        assert_eq!(
            body.order_id,
            Some("00000000-0000-0000-0000-000000000002".parse().unwrap())
        );
    }

    #[test]
    fn test_transaction_request_body_deserialization() {
        let json = r#"{"userId":"00000000-0000-0000-0000-000000000000","walletType":"main","txType":"deposit","amount":750}"#;
        let body: TransactionRequestBody = serde_json::from_str(json).unwrap();

        assert_eq!(body.wallet_type, "main");
        assert_eq!(body.tx_type, "deposit");
        assert_eq!(body.amount, 750);
        assert!(body.order_id.is_none());
        assert!(body.product_id.is_none());
    }

    #[test]
    fn test_order_response_serialization_is_camel_case() {
        let response = OrderResponse {
            order_id: Uuid::nil(),
            order_number: "ORD-abc".to_string(),
            product_id: Uuid::nil(),
            amount: 1000,
            commission_amount: 100,
            seller_amount: 900,
            status: "pending".to_string(),
            escrow_status: "locked".to_string(),
            delivery_status: "pending".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("orderNumber"));
        assert!(json.contains("commissionAmount"));
        assert!(json.contains("sellerAmount"));
        assert!(json.contains("escrowStatus"));
        assert!(json.contains("deliveryStatus"));
    }

    #[test]
    fn test_product_list_query_defaults() {
        let query: ProductListQuery = serde_json::from_str("{}").unwrap();

        assert!(query.category.is_none());
        assert!(query.search.is_none());
        assert!(query.limit.is_none());
        assert!(query.offset.is_none());
    }

    #[test]
    fn test_wallet_response_serialization() {
        let response = WalletResponse {
            user_id: Uuid::nil(),
            main_balance: 123,
            earnings_balance: 456,
            total_earned: 789,
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""mainBalance":123"#));
        assert!(json.contains(r#""earningsBalance":456"#));
        assert!(json.contains(r#""totalEarned":789"#));
    }
}

#[cfg(test)]
mod envelope_tests {
    use kernel::envelope::Envelope;

    #[test]
    fn test_envelope_success_flag() {
        let ok = Envelope::ok("data");
        assert!(ok.success);
        assert_eq!(ok.code, 200);

        let created = Envelope::created("data");
        assert!(created.success);
        assert_eq!(created.code, 201);

        let failed = Envelope::new(409, "conflict");
        assert!(!failed.success);
    }

    #[test]
    fn test_envelope_shape() {
        let json =
            serde_json::to_value(Envelope::ok(serde_json::json!({"amount": 100}))).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["code"], 200);
        assert_eq!(json["data"]["amount"], 100);
    }
}

#[cfg(test)]
mod domain_tests {
    use crate::domain::entities::*;
    use crate::domain::value_objects::*;
    use kernel::id::{ProductId, UserId};

    #[test]
    fn test_order_lifecycle_states() {
        let mut order = Order::place(
            UserId::new(),
            UserId::new(),
            ProductId::new(),
            2_500,
            CommissionRate::default(),
        );

        // Fresh orders await payment with escrow locked
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.escrow_status, EscrowStatus::Locked);
        assert!(!order.can_complete());

        order.status = OrderStatus::Paid;
        assert!(order.can_complete());

        order.status = OrderStatus::Completed;
        order.escrow_status = EscrowStatus::Released;
        assert!(!order.can_complete());
    }

    #[test]
    fn test_order_invariant_holds_for_odd_amounts() {
        let order = Order::place(
            UserId::new(),
            UserId::new(),
            ProductId::new(),
            333,
            CommissionRate::default(),
        );

        assert_eq!(order.commission_amount + order.seller_amount, order.amount);
        assert_eq!(order.commission_amount, 33);
    }

    #[test]
    fn test_order_numbers_are_unique() {
        let a = OrderNumber::generate();
        let b = OrderNumber::generate();

        assert_ne!(a.as_str(), b.as_str());
        assert!(a.as_str().starts_with("ORD-"));
    }

    #[test]
    fn test_payment_reference_prefix() {
        let reference = PaymentReference::generate();
        assert!(reference.as_str().starts_with("PAY-"));
    }

    #[test]
    fn test_status_strings_match_storage() {
        assert_eq!(OrderStatus::Paid.as_str(), "paid");
        assert_eq!(EscrowStatus::Released.as_str(), "released");
        assert_eq!(DeliveryStatus::Confirmed.as_str(), "confirmed");
        assert_eq!(WalletKind::Earnings.as_str(), "earnings");
        assert_eq!(LedgerEntryKind::Sale.as_str(), "sale");
        assert_eq!(PaymentType::Withdrawal.as_str(), "withdrawal");
    }
}

#[cfg(test)]
mod record_transaction_tests {
    use std::sync::{Arc, Mutex};

    use kernel::id::{LedgerEntryId, OrderId, UserId};

    use crate::application::record_transaction::{
        RecordTransactionInput, RecordTransactionUseCase,
    };
    use crate::domain::entities::{LedgerEntry, NewLedgerEntry, Wallet};
    use crate::domain::repository::{Page, WalletRepository};
    use crate::domain::value_objects::{LedgerEntryKind, WalletKind};
    use crate::error::{MarketError, MarketResult};

    /// In-memory ledger backed by a Vec
    #[derive(Clone, Default)]
    struct InMemoryLedger {
        entries: Arc<Mutex<Vec<NewLedgerEntry>>>,
    }

    impl WalletRepository for InMemoryLedger {
        async fn wallet(&self, _user_id: UserId) -> MarketResult<Option<Wallet>> {
            Ok(None)
        }

        async fn transactions(
            &self,
            _user_id: UserId,
            _page: Page,
        ) -> MarketResult<Vec<LedgerEntry>> {
            Ok(Vec::new())
        }

        async fn log_transaction(&self, entry: &NewLedgerEntry) -> MarketResult<LedgerEntryId> {
            self.entries.lock().unwrap().push(entry.clone());
            Ok(LedgerEntryId::new())
        }
    }

    fn deposit_input(user_id: UserId, amount: i64) -> RecordTransactionInput {
        RecordTransactionInput {
            user_id,
            wallet: WalletKind::Main,
            kind: LedgerEntryKind::Deposit,
            amount,
            order_id: None,
            product_id: None,
        }
    }

    #[test]
    fn test_records_entry_through_repository() {
        let ledger = Arc::new(InMemoryLedger::default());
        let use_case = RecordTransactionUseCase::new(ledger.clone());

        let user_id = UserId::new();
        let order_id = OrderId::new();

        tokio_test::block_on(use_case.execute(RecordTransactionInput {
            user_id,
            wallet: WalletKind::Earnings,
            kind: LedgerEntryKind::Withdrawal,
            amount: 2_500,
            order_id: Some(order_id),
            product_id: None,
        }))
        .unwrap();

        let entries = ledger.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id, user_id);
        assert_eq!(entries[0].wallet, WalletKind::Earnings);
        assert_eq!(entries[0].kind, LedgerEntryKind::Withdrawal);
        assert_eq!(entries[0].amount, 2_500);
        assert_eq!(entries[0].order_id, Some(order_id));
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let ledger = Arc::new(InMemoryLedger::default());
        let use_case = RecordTransactionUseCase::new(ledger.clone());

        for amount in [0, -1, -5_000] {
            let result = tokio_test::block_on(use_case.execute(deposit_input(UserId::new(), amount)));
            assert!(matches!(result, Err(MarketError::InvalidAmount)));
        }

        assert!(ledger.entries.lock().unwrap().is_empty());
    }
}

#[cfg(test)]
mod csrf_tests {
    use platform::csrf::*;

    #[test]
    fn test_token_roundtrip() {
        let token = issue_csrf_token(None);
        assert!(verify_csrf_token(&token, &token));
    }

    #[test]
    fn test_token_reuse_within_session() {
        let token = issue_csrf_token(None);
        assert_eq!(issue_csrf_token(Some(&token)), token);
    }

    #[test]
    fn test_rejects_foreign_and_truncated_tokens() {
        let token = issue_csrf_token(None);
        let other = issue_csrf_token(None);

        assert!(!verify_csrf_token(&token, &other));
        assert!(!verify_csrf_token(&token, &token[1..]));
        assert!(!verify_csrf_token("", &token));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(MarketError, StatusCode)> = vec![
            (MarketError::ProductUnavailable, StatusCode::CONFLICT),
            (
                MarketError::InvalidOrderState,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (MarketError::NotFound("Wallet"), StatusCode::NOT_FOUND),
            (
                MarketError::BadRequest("Unknown payment type"),
                StatusCode::BAD_REQUEST,
            ),
            (MarketError::InvalidAmount, StatusCode::UNPROCESSABLE_ENTITY),
            (
                MarketError::WithdrawalOutOfRange {
                    min: 1_000,
                    max: 500_000,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                MarketError::InsufficientBalance,
                StatusCode::PAYMENT_REQUIRED,
            ),
            (MarketError::Maintenance, StatusCode::SERVICE_UNAVAILABLE),
            (MarketError::CsrfRejected, StatusCode::FORBIDDEN),
            (
                MarketError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert!(
            MarketError::ProductUnavailable
                .to_string()
                .contains("out of stock")
        );
        assert!(
            MarketError::WithdrawalOutOfRange {
                min: 1_000,
                max: 500_000
            }
            .to_string()
            .contains("1000")
        );
        assert!(MarketError::NotFound("Wallet").to_string().contains("Wallet"));
    }
}
