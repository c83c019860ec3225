//! Core domain models for pkgstars
//!
//! This module contains the fundamental types used throughout the application:
//! - Parsed URL information
//! - Package information from the registry
//! - Repository information from the hosting provider
//! - The attractiveness result record

mod attractiveness;
mod package_metadata;
mod parsed_url;
mod repository_metadata;

pub use attractiveness::Attractiveness;
pub use package_metadata::PackageMetadata;
pub use parsed_url::{ParsedUrl, CANONICAL_HOST};
pub use repository_metadata::{RepositoryMetadata, RepositoryStats};
