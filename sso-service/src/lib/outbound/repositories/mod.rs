pub mod application;
pub mod user;

pub use application::PostgresAppRepository;
pub use user::PostgresUserRepository;
