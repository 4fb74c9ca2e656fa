pub mod auth;
pub mod dashboard;
pub mod results;
pub mod users;
