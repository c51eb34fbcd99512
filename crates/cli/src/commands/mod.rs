pub mod demo;
pub mod get;
pub mod post;
