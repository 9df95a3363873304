use bigdecimal::BigDecimal;
use tracing::info;

use super::domain::{ApplicationDetails, LoanApplication};
use super::registry::ApplicationRegistry;

struct Sample {
    applicant_name: &'static str,
    loan_amount: u32,
    loan_purpose: &'static str,
    annual_income: u32,
    credit_score: i32,
    employment_status: &'static str,
    additional_notes: &'static str,
}

const SAMPLES: [Sample; 4] = [
    Sample {
        applicant_name: "John Smith",
        loan_amount: 25_000,
        loan_purpose: "Home Improvement",
        annual_income: 65_000,
        credit_score: 720,
        employment_status: "Full-time",
        additional_notes: "Looking to renovate kitchen and bathroom. Stable employment for 5 years.",
    },
    Sample {
        applicant_name: "Sarah Johnson",
        loan_amount: 15_000,
        loan_purpose: "Debt Consolidation",
        annual_income: 48_000,
        credit_score: 680,
        employment_status: "Full-time",
        additional_notes: "Want to consolidate credit card debt to lower interest rate.",
    },
    Sample {
        applicant_name: "Mike Davis",
        loan_amount: 35_000,
        loan_purpose: "Vehicle Purchase",
        annual_income: 72_000,
        credit_score: 750,
        employment_status: "Full-time",
        additional_notes: "Need reliable transportation for work. Current car is 15 years old.",
    },
    Sample {
        applicant_name: "Emily Chen",
        loan_amount: 8_000,
        loan_purpose: "Education",
        annual_income: 32_000,
        credit_score: 650,
        employment_status: "Part-time",
        additional_notes: "Pursuing certification program to advance career. Currently working part-time while studying.",
    },
];

/// Details of the demo applications used to bootstrap an empty registry.
pub fn sample_details() -> Vec<ApplicationDetails> {
    SAMPLES
        .iter()
        .map(|sample| ApplicationDetails {
            applicant_name: sample.applicant_name.to_string(),
            loan_amount: BigDecimal::from(sample.loan_amount),
            loan_purpose: sample.loan_purpose.to_string(),
            annual_income: BigDecimal::from(sample.annual_income),
            credit_score: sample.credit_score,
            employment_status: sample.employment_status.to_string(),
            additional_notes: Some(sample.additional_notes.to_string()),
        })
        .collect()
}

/// Register every demo application, returning how many were added.
pub fn seed(registry: &ApplicationRegistry) -> usize {
    let details = sample_details();
    let count = details.len();
    for detail in details {
        registry.submit(LoanApplication::new(detail));
    }
    info!(count, "seeded sample loan applications");
    count
}
