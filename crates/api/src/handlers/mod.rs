pub mod comments;
pub mod entries;
pub mod pages;
