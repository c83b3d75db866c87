use aegis_paymaster::{PaymasterConfig, PaymasterError, Sponsorship, VerifyingPaymaster};
use aegis_primitives::{NormalizeError, UserOperationRequest};
use ethers::types::{Bytes, U256};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn user_operation() -> UserOperationRequest {
    UserOperationRequest {
        sender: "0x9c5754De1443984659E1b3a8d1931D83475ba29C".parse().unwrap(),
        nonce: 3.into(),
        call_data: "0xb61d27f6".parse().unwrap(),
        call_gas_limit: Some(33_100.into()),
        verification_gas_limit: Some(100_000.into()),
        pre_verification_gas: Some(21_000.into()),
        max_fee_per_gas: Some(1_695_000_030_u64.into()),
        max_priority_fee_per_gas: Some(1_695_000_000.into()),
        ..Default::default()
    }
}

fn paymaster(server: &MockServer, strict: bool) -> VerifyingPaymaster {
    VerifyingPaymaster::new(PaymasterConfig::new(&server.uri(), strict))
}

#[tokio::test]
async fn success_returns_paymaster_data_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({
            "method": "pm_sponsorUserOperation",
            "id": 1234,
            "jsonrpc": "2.0"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statusCode": 200,
            "data": { "paymasterAndData": "0xabc123" }
        })))
        .mount(&server)
        .await;

    let sponsorship = paymaster(&server, true)
        .get_paymaster_and_data(&user_operation(), None)
        .await
        .unwrap();

    assert_eq!(sponsorship, Sponsorship::Sponsored("0xabc123".parse().unwrap()));
    assert_eq!(sponsorship.paymaster_and_data(), "0xabc123".parse::<Bytes>().unwrap());
}

#[tokio::test]
async fn request_carries_canonical_unsigned_operation() {
    let server = MockServer::start().await;

    // the mock only matches when signature and paymasterAndData were reset,
    // regardless of what the caller filled in
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "params": [{
                "sender": "0x9c5754De1443984659E1b3a8d1931D83475ba29C",
                "nonce": 3,
                "callGasLimit": 33_100,
                "signature": "0x",
                "paymasterAndData": "0x"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statusCode": 200,
            "data": { "paymasterAndData": "0xabc123" }
        })))
        .mount(&server)
        .await;

    let mut uo = user_operation();
    uo.signature = Some("0xc0ffee".parse().unwrap());
    uo.paymaster_and_data = "0xdeadbeef".parse().unwrap();

    let sponsorship =
        paymaster(&server, true).get_paymaster_and_data(&uo, None).await.unwrap();
    assert!(sponsorship.is_sponsored());
}

#[tokio::test]
async fn lenient_mode_downgrades_server_error_to_self_funded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let sponsorship = paymaster(&server, false)
        .get_paymaster_and_data(&user_operation(), None)
        .await
        .unwrap();

    assert!(!sponsorship.is_sponsored());
    assert_eq!(sponsorship.paymaster_and_data(), Bytes::default());
}

#[tokio::test]
async fn lenient_mode_reports_the_remote_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "quota exceeded"
        })))
        .mount(&server)
        .await;

    let sponsorship = paymaster(&server, false)
        .get_paymaster_and_data(&user_operation(), None)
        .await
        .unwrap();

    match sponsorship {
        Sponsorship::SelfFunded { reason } => assert!(reason.contains("quota exceeded")),
        other => panic!("unexpected sponsorship: {other:?}"),
    }
}

#[tokio::test]
async fn strict_mode_fails_with_the_remote_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "insufficient funds"
        })))
        .mount(&server)
        .await;

    let err = paymaster(&server, true)
        .get_paymaster_and_data(&user_operation(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, PaymasterError::Sponsorship { .. }));
    assert!(err.to_string().contains("insufficient funds"));
}

#[tokio::test]
async fn strict_mode_fails_with_reason_unknown_when_body_is_unusable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statusCode": 500
        })))
        .mount(&server)
        .await;

    let err = paymaster(&server, true)
        .get_paymaster_and_data(&user_operation(), None)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("reason unknown"));
}

#[tokio::test]
async fn transport_failure_follows_the_fallback_policy() {
    // nothing listens here; the connection is refused
    let lenient = VerifyingPaymaster::new(PaymasterConfig::new("http://127.0.0.1:9", false));
    let sponsorship =
        lenient.get_paymaster_and_data(&user_operation(), None).await.unwrap();
    assert!(!sponsorship.is_sponsored());

    let strict = VerifyingPaymaster::new(PaymasterConfig::new("http://127.0.0.1:9", true));
    let err = strict.get_paymaster_and_data(&user_operation(), None).await.unwrap_err();
    assert!(matches!(err, PaymasterError::Sponsorship { .. }));
}

#[tokio::test]
async fn oversized_numeric_field_fails_in_any_mode() {
    let server = MockServer::start().await;

    let mut uo = user_operation();
    uo.max_fee_per_gas = Some(U256::from(u64::MAX) + 1);

    let err = paymaster(&server, false)
        .get_paymaster_and_data(&uo, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PaymasterError::Normalize(NormalizeError::Overflow { field: "maxFeePerGas", .. })
    ));
}

#[tokio::test]
async fn service_data_is_forwarded_in_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "params": [{}, { "mode": "SPONSORED", "webhookData": {} }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "statusCode": 200,
            "data": { "paymasterAndData": "0x01" }
        })))
        .mount(&server)
        .await;

    let service_data = serde_json::json!({ "mode": "SPONSORED", "webhookData": {} });
    let sponsorship = paymaster(&server, true)
        .get_paymaster_and_data(&user_operation(), Some(service_data))
        .await
        .unwrap();

    assert!(sponsorship.is_sponsored());
}
