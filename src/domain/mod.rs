mod blog_post;
mod contact_name;
mod email_address;
pub mod front_matter;
mod new_post;
pub mod post_date;
mod slug;
mod waitlist;

pub use blog_post::BlogPost;
pub use contact_name::ContactName;
pub use email_address::EmailAddress;
pub use front_matter::{ParsedDocument, parse_document};
pub use new_post::{CreatePostPayload, DEFAULT_AUTHOR, FieldIssue, NewPost};
pub use slug::Slug;
pub use waitlist::{NewWaitlistEntry, WaitlistEntryUpdate, WaitlistStatus, WaitlistUseCase};
