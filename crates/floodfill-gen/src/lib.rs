//! Grid construction collaborators for floodfill: seeded random generation
//! and externally supplied state matrices.

pub mod config;
pub mod mapgen;

pub use config::MazeConfig;
pub use mapgen::MapGen;
