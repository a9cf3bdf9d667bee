#![doc(html_root_url = "https://docs.rs/enliven/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod behaviors;
pub mod config;
pub mod effects;
pub mod scroll;
pub mod search;
pub mod validate;

pub use behaviors::{attach, PageBehaviors};
pub use config::BehaviorConfig;
