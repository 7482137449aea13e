pub mod email;
pub mod user_id;
pub mod user_name;
pub mod user_password;

pub use email::Email;
pub use user_id::UserId;
pub use user_name::UserName;
pub use user_password::{RawPassword, UserPassword};
