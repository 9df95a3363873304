use super::common::*;
use crate::applications::intake::{ApplicationForm, ValidationErrors};
use serde_json::json;

#[test]
fn valid_form_produces_details() {
    let details = form().validate().expect("form is valid");
    assert_eq!(details, super::common::details());
}

#[test]
fn text_fields_are_trimmed_and_blank_notes_dropped() {
    let mut form = form();
    form.applicant_name = Some("  Test User ".to_string());
    form.additional_notes = Some("   ".to_string());

    let details = form.validate().expect("form is valid");
    assert_eq!(details.applicant_name, "Test User");
    assert_eq!(details.additional_notes, None);
}

#[test]
fn empty_form_reports_every_required_field() {
    let errors = ApplicationForm::default()
        .validate()
        .expect_err("empty form is rejected");

    assert_eq!(
        errors.messages(),
        vec![
            "Applicant name is required",
            "Loan amount is required",
            "Loan purpose is required",
            "Annual income is required",
            "Credit score is required",
            "Employment status is required",
        ]
    );
}

#[test]
fn blank_text_is_treated_as_missing() {
    let mut form = form();
    form.loan_purpose = Some(" \t".to_string());

    let errors = form.validate().expect_err("blank purpose rejected");
    assert!(errors.has_field("loan_purpose"));
    assert_eq!(errors.errors.len(), 1);
}

#[test]
fn non_positive_amounts_are_rejected() {
    let mut form = form();
    form.loan_amount = Some(decimal("0"));
    form.annual_income = Some(decimal("-1500.50"));

    let errors = form.validate().expect_err("amounts rejected");
    assert_eq!(
        errors.messages(),
        vec!["Loan amount must be positive", "Annual income must be positive"]
    );
}

#[test]
fn credit_score_range_is_not_enforced() {
    let mut form = form();
    form.credit_score = Some(120);
    let details = form.validate().expect("out of range score still accepted");
    assert_eq!(details.credit_score, 120);
}

#[test]
fn into_application_starts_with_zero_votes() {
    let application = form().into_application().expect("valid form");
    assert_eq!(application.total_votes(), 0);
    assert_eq!(application.details().applicant_name, "Test User");
}

#[test]
fn form_accepts_decimal_strings_and_numbers() {
    let form: ApplicationForm = serde_json::from_value(json!({
        "applicant_name": "Jane Roe",
        "loan_amount": "12500.75",
        "loan_purpose": "Education",
        "annual_income": 54000,
        "credit_score": 710,
        "employment_status": "Full-time"
    }))
    .expect("form deserializes");

    let details = form.validate().expect("form is valid");
    assert_eq!(details.loan_amount, decimal("12500.75"));
    assert_eq!(details.annual_income, decimal("54000"));
    assert_eq!(details.additional_notes, None);
}

#[test]
fn validation_errors_display_joined_messages() {
    let errors: ValidationErrors = ApplicationForm {
        applicant_name: None,
        employment_status: None,
        ..form()
    }
    .validate()
    .expect_err("missing fields");

    assert_eq!(
        errors.to_string(),
        "Applicant name is required; Employment status is required"
    );
}

#[test]
fn bind_accepts_well_typed_bodies() {
    let body = serde_json::to_value(form()).expect("form encodes");
    let bound = ApplicationForm::bind(body).expect("body binds");
    assert_eq!(bound, form());
}

#[test]
fn bind_treats_null_as_missing() {
    let errors = ApplicationForm::bind(json!({
        "applicant_name": null,
        "loan_amount": true,
        "loan_purpose": "Education",
        "annual_income": 1000,
        "credit_score": 700,
        "employment_status": "Full-time"
    }))
    .expect_err("mistyped amount rejected");

    assert_eq!(
        errors.messages(),
        vec!["Applicant name is required", "Loan amount must be a number"]
    );
}

#[test]
fn bind_rejects_fractional_credit_scores() {
    let mut body = serde_json::to_value(form()).expect("form encodes");
    body["credit_score"] = json!(701.5);

    let errors = ApplicationForm::bind(body).expect_err("fractional score rejected");
    assert_eq!(errors.messages(), vec!["Credit score must be a whole number"]);
}
