pub mod repositories;
pub mod token;
