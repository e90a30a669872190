pub use super::user_actions::Entity as UserActions;
pub use super::users::Entity as Users;
