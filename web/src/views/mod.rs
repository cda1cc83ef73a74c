mod home;
pub use home::Home;

mod auth;
pub use auth::Auth;

mod signup;
pub use signup::Signup;

mod account;
pub use account::Account;

mod chat;
pub use chat::Chat;

mod admin;
pub use admin::Admin;
