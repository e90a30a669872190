pub mod prelude;

pub mod user_actions;
pub mod users;
