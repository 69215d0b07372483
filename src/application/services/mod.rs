pub mod campaign_service;

pub use campaign_service::{CampaignService, ReadOnlyCampaignService};
