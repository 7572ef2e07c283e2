// Infrastructure layer module
// Contains store adapters and roster file loading
// Follows Hexagonal Architecture

pub mod repositories;
