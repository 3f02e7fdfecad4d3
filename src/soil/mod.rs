//! Engine input model
//!
//! - `description.rs` - SoilDescription (soil, project, optional bore log)
//! - `environment.rs` - EnvironmentDescription (tags, seismic/wind, sulfate/chloride)
//! - `soil_type.rs` - SoilType tags, default property table, composition inference

pub mod description;
pub mod environment;
pub mod soil_type;

pub use description::{BuildingType, SoilDescription, DEFAULT_SITE_AREA};
pub use environment::{ChlorideRisk, EnvironmentDescription, EnvironmentTag, SulfateExposure};
pub use soil_type::{infer_soil_type, SoilDefaults, SoilType};
