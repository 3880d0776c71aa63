mod eligibility;
mod governance;
mod modalities;
mod snapshot;
pub mod views;

pub use eligibility::eligibility_table;
pub use governance::GovernanceProfile;
pub use modalities::modality_profile;
pub use snapshot::country_snapshot;
