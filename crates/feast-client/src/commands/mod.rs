pub mod login;
pub mod watch;
