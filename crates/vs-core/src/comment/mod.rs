//! Comment module
//!
//! User comments attached to discs, with a fluent builder and validation.

pub mod builder;
pub mod model;
pub mod validator;

pub use builder::CommentBuilder;
pub use model::*;
pub use validator::CommentValidator;
