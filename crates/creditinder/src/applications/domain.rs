use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper for submitted loan applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApplicationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Applicant supplied fields once intake validation has accepted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    pub applicant_name: String,
    pub loan_amount: BigDecimal,
    pub loan_purpose: String,
    pub annual_income: BigDecimal,
    pub credit_score: i32,
    pub employment_status: String,
    pub additional_notes: Option<String>,
}

/// A single loan application and its crowd vote counters.
///
/// Everything except the counters is fixed at construction. The counters are atomics so a
/// record shared through `Arc` can be voted on from any number of threads without a lock.
#[derive(Debug)]
pub struct LoanApplication {
    id: ApplicationId,
    details: ApplicationDetails,
    submitted_at: DateTime<Utc>,
    approval_votes: AtomicU64,
    rejection_votes: AtomicU64,
}

impl LoanApplication {
    pub fn new(details: ApplicationDetails) -> Self {
        Self::with_id(ApplicationId::generate(), details)
    }

    pub fn with_id(id: ApplicationId, details: ApplicationDetails) -> Self {
        Self {
            id,
            details,
            submitted_at: Utc::now(),
            approval_votes: AtomicU64::new(0),
            rejection_votes: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> &ApplicationId {
        &self.id
    }

    pub fn details(&self) -> &ApplicationDetails {
        &self.details
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn record_approval(&self) {
        self.approval_votes.fetch_add(1, Ordering::AcqRel);
    }

    pub fn record_rejection(&self) {
        self.rejection_votes.fetch_add(1, Ordering::AcqRel);
    }

    pub fn approval_votes(&self) -> u64 {
        self.approval_votes.load(Ordering::Acquire)
    }

    pub fn rejection_votes(&self) -> u64 {
        self.rejection_votes.load(Ordering::Acquire)
    }

    /// Reads both counters once so derived values agree with each other.
    pub fn tally(&self) -> VoteTally {
        VoteTally {
            approvals: self.approval_votes(),
            rejections: self.rejection_votes(),
        }
    }

    pub fn total_votes(&self) -> u64 {
        self.tally().total()
    }

    pub fn approval_percentage(&self) -> f64 {
        self.tally().approval_percentage()
    }

    pub fn view(&self) -> ApplicationView {
        let tally = self.tally();
        ApplicationView {
            id: self.id.clone(),
            details: self.details.clone(),
            submitted_at: self.submitted_at,
            approval_votes: tally.approvals,
            rejection_votes: tally.rejections,
            total_votes: tally.total(),
            approval_percentage: tally.approval_percentage(),
        }
    }
}

/// Point-in-time read of a record's vote counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub approvals: u64,
    pub rejections: u64,
}

impl VoteTally {
    pub fn total(self) -> u64 {
        self.approvals + self.rejections
    }

    /// Share of approvals in percent; `0.0` when nobody has voted yet.
    pub fn approval_percentage(self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.approvals as f64 / total as f64 * 100.0
    }
}

/// Serializable copy of a record exposed to HTTP clients and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationView {
    pub id: ApplicationId,
    #[serde(flatten)]
    pub details: ApplicationDetails,
    pub submitted_at: DateTime<Utc>,
    pub approval_votes: u64,
    pub rejection_votes: u64,
    pub total_votes: u64,
    pub approval_percentage: f64,
}
