pub mod catalog;
pub mod credentialing;
