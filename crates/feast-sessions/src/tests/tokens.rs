//! Token issue/verify tests.

use super::helpers::*;
use crate::*;
use jsonwebtoken::{encode, EncodingKey, Header};

#[test]
fn test_issue_and_verify() {
    let service = create_test_session_service();
    let before = current_timestamp();

    let token = service.issue_token("alice", "Alice Smith").unwrap();
    let claims = service.verify_token(token.as_str()).unwrap();

    assert_eq!(claims.acct, "alice");
    assert_eq!(claims.name, "Alice Smith");
    assert!(claims.exp >= before + 3600);
    assert!(claims.exp <= current_timestamp() + 3600);
}

#[test]
fn test_token_is_three_part_jws() {
    let service = create_test_session_service();
    let token = service.issue_token("bob_1", "Bob Jones").unwrap();

    assert_eq!(token.as_str().split('.').count(), 3);
}

#[test]
fn test_public_key_only_verifier() {
    let service = create_test_session_service();
    let token = service.issue_token("alice", "Alice Smith").unwrap();

    let verifier = TokenVerifier::from_public_pem(SIGNING_PUBLIC).unwrap();
    let claims = verifier.verify(token.as_str()).unwrap();
    assert_eq!(claims.acct, "alice");
}

#[test]
fn test_service_verifier_half_checks_tokens() {
    let service = create_test_session_service();
    let token = service.issue_token("alice", "Alice Smith").unwrap();

    let verifier = service.verifier().clone();
    assert_eq!(verifier.verify(token.as_str()).unwrap().acct, "alice");

    let foreign = SessionService::new(SigningKeyPair::from_pem(OTHER_PRIVATE, OTHER_PUBLIC).unwrap())
        .issue_token("alice", "Alice Smith")
        .unwrap();
    assert!(matches!(
        verifier.verify(foreign.as_str()),
        Err(SessionError::InvalidSignature)
    ));
}

#[test]
fn test_expired_token_rejected() {
    let service = create_test_session_service();
    let claims = TokenClaims {
        exp: current_timestamp() - 10,
        acct: "alice".to_string(),
        name: "Alice Smith".to_string(),
    };
    let token = service.issuer.sign_claims(&claims).unwrap();

    let result = service.verify_token(&token);
    assert!(matches!(result, Err(SessionError::TokenExpired)));
}

#[test]
fn test_zero_ttl_expires_immediately() {
    let service = SessionService::with_ttl(signing_keys(), 0);
    let token = service.issue_token("alice", "Alice Smith").unwrap();

    std::thread::sleep(std::time::Duration::from_millis(1100));
    assert!(matches!(
        service.verify_token(token.as_str()),
        Err(SessionError::TokenExpired)
    ));
}

#[test]
fn test_foreign_key_signature_rejected() {
    let foreign = SessionService::new(SigningKeyPair::from_pem(OTHER_PRIVATE, OTHER_PUBLIC).unwrap());
    let token = foreign.issue_token("mallory", "Mallory Evil").unwrap();

    let service = create_test_session_service();
    let result = service.verify_token(token.as_str());
    assert!(matches!(result, Err(SessionError::InvalidSignature)));
}

#[test]
fn test_tampered_payload_rejected() {
    let service = create_test_session_service();
    let token = service.issue_token("alice", "Alice Smith").unwrap();

    let other = service.issue_token("root", "Root User").unwrap();
    let mut parts: Vec<&str> = token.as_str().split('.').collect();
    let other_parts: Vec<&str> = other.as_str().split('.').collect();
    parts[1] = other_parts[1];
    let tampered = parts.join(".");

    assert!(matches!(
        service.verify_token(&tampered),
        Err(SessionError::InvalidSignature)
    ));
}

#[test]
fn test_symmetric_algorithm_rejected() {
    let claims = TokenClaims {
        exp: current_timestamp() + 3600,
        acct: "alice".to_string(),
        name: "Alice Smith".to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"shared-secret"),
    )
    .unwrap();

    let service = create_test_session_service();
    let result = service.verify_token(&token);
    assert!(matches!(result, Err(SessionError::InvalidAlgorithm { .. })));
}

#[test]
fn test_garbage_token_is_malformed() {
    let service = create_test_session_service();

    for token in ["", "not-a-token", "a.b.c"] {
        let result = service.verify_token(token);
        assert!(
            matches!(result, Err(SessionError::MalformedToken(_))),
            "token {:?} gave {:?}",
            token,
            result
        );
    }
}
