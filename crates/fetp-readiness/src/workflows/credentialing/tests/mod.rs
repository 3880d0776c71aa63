mod common;
mod eligibility;
mod readiness;
