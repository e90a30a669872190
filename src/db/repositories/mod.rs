pub mod account;
pub mod action;
