pub mod lifecycle;
pub mod models;

pub use lifecycle::RequestState;
pub use models::*;
