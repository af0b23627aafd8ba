pub mod health;
pub mod validate;
