//! Loan application intake, crowd voting, and the concurrent registry backing both.

pub mod domain;
pub mod intake;
pub mod registry;
pub mod router;
pub mod samples;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationDetails, ApplicationId, ApplicationView, LoanApplication, VoteTally};
pub use intake::{ApplicationForm, FieldError, ValidationErrors};
pub use registry::ApplicationRegistry;
pub use router::{application_router, VoteParams, APPLICATIONS_PATH};
