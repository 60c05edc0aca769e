pub mod messages;
pub mod portfolio;
