use bigdecimal::{BigDecimal, Zero};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::domain::{ApplicationDetails, LoanApplication};

/// Raw submission as bound from a client request, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub applicant_name: Option<String>,
    pub loan_amount: Option<BigDecimal>,
    pub loan_purpose: Option<String>,
    pub annual_income: Option<BigDecimal>,
    pub credit_score: Option<i32>,
    pub employment_status: Option<String>,
    pub additional_notes: Option<String>,
}

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}", join_messages(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.errors.iter().map(|error| error.message).collect()
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.message)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Field names in form order, used to keep reported errors stable.
const FIELD_ORDER: [&str; 7] = [
    "applicant_name",
    "loan_amount",
    "loan_purpose",
    "annual_income",
    "credit_score",
    "employment_status",
    "additional_notes",
];

fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|known| *known == field)
        .unwrap_or(FIELD_ORDER.len())
}

impl ApplicationForm {
    /// Bind a JSON body field by field.
    ///
    /// A value of the wrong type becomes a field error instead of failing the whole body, and
    /// the remaining fields are still checked so every problem is reported at once.
    pub fn bind(body: Value) -> Result<Self, ValidationErrors> {
        let Value::Object(fields) = body else {
            return Err(ValidationErrors {
                errors: vec![FieldError {
                    field: "application",
                    message: "Application must be a JSON object",
                }],
            });
        };

        let mut errors = Vec::new();
        let form = Self {
            applicant_name: bind_field(
                &fields,
                "applicant_name",
                "Applicant name must be text",
                &mut errors,
            ),
            loan_amount: bind_field(
                &fields,
                "loan_amount",
                "Loan amount must be a number",
                &mut errors,
            ),
            loan_purpose: bind_field(
                &fields,
                "loan_purpose",
                "Loan purpose must be text",
                &mut errors,
            ),
            annual_income: bind_field(
                &fields,
                "annual_income",
                "Annual income must be a number",
                &mut errors,
            ),
            credit_score: bind_field(
                &fields,
                "credit_score",
                "Credit score must be a whole number",
                &mut errors,
            ),
            employment_status: bind_field(
                &fields,
                "employment_status",
                "Employment status must be text",
                &mut errors,
            ),
            additional_notes: bind_field(
                &fields,
                "additional_notes",
                "Additional notes must be text",
                &mut errors,
            ),
        };

        if errors.is_empty() {
            return Ok(form);
        }

        if let Err(remaining) = form.validate() {
            for error in remaining.errors {
                if !errors.iter().any(|bound: &FieldError| bound.field == error.field) {
                    errors.push(error);
                }
            }
        }
        errors.sort_by_key(|error| field_rank(error.field));
        Err(ValidationErrors { errors })
    }

    /// Check required fields and positive amounts, collecting all failures.
    pub fn validate(self) -> Result<ApplicationDetails, ValidationErrors> {
        let mut errors = Vec::new();

        let applicant_name = required_text(
            self.applicant_name,
            "applicant_name",
            "Applicant name is required",
            &mut errors,
        );
        let loan_amount = positive_amount(
            self.loan_amount,
            "loan_amount",
            "Loan amount is required",
            "Loan amount must be positive",
            &mut errors,
        );
        let loan_purpose = required_text(
            self.loan_purpose,
            "loan_purpose",
            "Loan purpose is required",
            &mut errors,
        );
        let annual_income = positive_amount(
            self.annual_income,
            "annual_income",
            "Annual income is required",
            "Annual income must be positive",
            &mut errors,
        );
        if self.credit_score.is_none() {
            errors.push(FieldError {
                field: "credit_score",
                message: "Credit score is required",
            });
        }
        let employment_status = required_text(
            self.employment_status,
            "employment_status",
            "Employment status is required",
            &mut errors,
        );

        match (
            applicant_name,
            loan_amount,
            loan_purpose,
            annual_income,
            self.credit_score,
            employment_status,
        ) {
            (
                Some(applicant_name),
                Some(loan_amount),
                Some(loan_purpose),
                Some(annual_income),
                Some(credit_score),
                Some(employment_status),
            ) if errors.is_empty() => Ok(ApplicationDetails {
                applicant_name,
                loan_amount,
                loan_purpose,
                annual_income,
                credit_score,
                employment_status,
                additional_notes: self
                    .additional_notes
                    .map(|notes| notes.trim().to_string())
                    .filter(|notes| !notes.is_empty()),
            }),
            _ => Err(ValidationErrors { errors }),
        }
    }

    /// Validate and wrap the result in a fresh record with zeroed counters.
    pub fn into_application(self) -> Result<LoanApplication, ValidationErrors> {
        self.validate().map(LoanApplication::new)
    }
}

fn bind_field<T>(
    fields: &Map<String, Value>,
    field: &'static str,
    message: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<T>
where
    T: DeserializeOwned,
{
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(bound) => Some(bound),
            Err(_) => {
                errors.push(FieldError { field, message });
                None
            }
        },
    }
}

fn required_text(
    value: Option<String>,
    field: &'static str,
    message: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.map(|text| text.trim().to_string()) {
        Some(text) if !text.is_empty() => Some(text),
        _ => {
            errors.push(FieldError { field, message });
            None
        }
    }
}

fn positive_amount(
    value: Option<BigDecimal>,
    field: &'static str,
    missing: &'static str,
    not_positive: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<BigDecimal> {
    match value {
        Some(amount) if amount > BigDecimal::zero() => Some(amount),
        Some(_) => {
            errors.push(FieldError {
                field,
                message: not_positive,
            });
            None
        }
        None => {
            errors.push(FieldError {
                field,
                message: missing,
            });
            None
        }
    }
}
