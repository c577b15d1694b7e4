pub mod blog;
pub mod waitlist;

pub use blog::*;
pub use waitlist::*;
