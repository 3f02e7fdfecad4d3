//! Bore-log utilities
//!
//! - `layer.rs` - one stratum of a bore log
//! - `profile.rs` - governing layer lookup and synthesized profiles
//! - `bore_log.rs` - normalized rows with default properties filled in
//! - `validation.rs` - advisory depth/property checks for edited logs

pub mod bore_log;
pub mod layer;
pub mod profile;
pub mod validation;

pub use bore_log::{build_bore_log, BoreLogRow};
pub use layer::SoilLayer;
pub use profile::{
    governing_layer, layer_at_depth, resolve_profile, synthesize_layers, Profile, ProfileSource,
};
pub use validation::{repair_continuity, validate_layers, LayerIssue};
