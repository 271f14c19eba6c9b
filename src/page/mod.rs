mod contact;
mod home;
mod not_found;
mod projects;

pub use contact::*;
pub use home::*;
pub use not_found::*;
pub use projects::*;
