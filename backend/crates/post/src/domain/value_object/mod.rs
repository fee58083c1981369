//! Value Object Module

pub mod post_text;

pub use kernel::id::{CommentId, PostId, UserId};
