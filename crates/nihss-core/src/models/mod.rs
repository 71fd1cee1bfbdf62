pub mod assessment;
pub mod item;
pub mod request;
pub mod score_set;
pub mod severity;
