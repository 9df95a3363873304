use std::str::FromStr;
use std::sync::Arc;

use axum::response::Response;
use bigdecimal::BigDecimal;
use serde_json::Value;

use crate::applications::domain::{ApplicationDetails, LoanApplication};
use crate::applications::intake::ApplicationForm;
use crate::applications::registry::ApplicationRegistry;

pub(super) fn decimal(raw: &str) -> BigDecimal {
    BigDecimal::from_str(raw).expect("valid decimal")
}

pub(super) fn details() -> ApplicationDetails {
    ApplicationDetails {
        applicant_name: "Test User".to_string(),
        loan_amount: decimal("10000.00"),
        loan_purpose: "Test Purpose".to_string(),
        annual_income: decimal("50000.00"),
        credit_score: 700,
        employment_status: "Full-time".to_string(),
        additional_notes: Some("Test notes".to_string()),
    }
}

pub(super) fn application() -> LoanApplication {
    LoanApplication::new(details())
}

pub(super) fn form() -> ApplicationForm {
    ApplicationForm {
        applicant_name: Some("Test User".to_string()),
        loan_amount: Some(decimal("10000.00")),
        loan_purpose: Some("Test Purpose".to_string()),
        annual_income: Some(decimal("50000.00")),
        credit_score: Some(700),
        employment_status: Some("Full-time".to_string()),
        additional_notes: Some("Test notes".to_string()),
    }
}

pub(super) fn empty_registry() -> Arc<ApplicationRegistry> {
    Arc::new(ApplicationRegistry::new())
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
