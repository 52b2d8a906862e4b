// Movie Vault - Library Entry Point

pub mod constants;
pub mod error;
pub mod db;
pub mod movie;
pub mod scoring;
