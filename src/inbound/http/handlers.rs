pub mod health_check;
pub mod home;
pub mod submit;

pub use health_check::health_check;
pub use home::home;
pub use submit::submit;
