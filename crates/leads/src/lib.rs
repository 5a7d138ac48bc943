//! `maturity-leads` — respondent contact profile captured before scoring.

pub mod profile;

pub use profile::LeadProfile;
