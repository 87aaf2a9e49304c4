pub mod converter;
pub mod home;
pub mod login;
pub mod records;

pub use converter::*;
pub use home::*;
pub use login::*;
pub use records::*;
