pub mod breeds;
pub mod catalog;
pub mod cli;
pub mod contact;
pub mod download;
pub mod parser;
pub mod writer;

pub use breeds::{find_breed_by_label, BreedEntry, BreedType, SourceTag, BREEDS};
pub use cli::{Cli, Commands};
