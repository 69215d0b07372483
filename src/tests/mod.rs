pub mod campaign_tests;
pub mod lifecycle_tests;
pub mod validation_tests;
