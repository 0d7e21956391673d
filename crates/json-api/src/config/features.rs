//! Feature Toggles

use clap::Args;

/// Optional route groups and middleware.
#[derive(Debug, Args)]
pub struct FeatureConfig {
    /// Mount the `/debug` administrative routes.
    #[arg(
        long,
        env = "DEBUG_ROUTES_ENABLED",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub debug_routes_enabled: bool,

    /// Allow cross-origin requests from any origin.
    #[arg(
        long,
        env = "CORS_ALLOW_ANY_ORIGIN",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub cors_allow_any_origin: bool,
}
