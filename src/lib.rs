//! pkgstars - Go package attractiveness library
//!
//! This library resolves a Go package name into a single popularity score:
//! - pkg.go.dev supplies the importer count and the repository URL
//! - An alias table maps project sites to their GitHub repository
//! - The GitHub API supplies stars, forks and followers
//! - The score is the integer part of the Euclidean norm of those signals

pub mod alias;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod hosting;
pub mod http;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod rate_limit;
pub mod registry;
pub mod score;
