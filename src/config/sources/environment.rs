//! Environment variable source: ITEMTREE prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add environment variable overlay to builder.
/// `ITEMTREE__GESTURE__COMMIT_ON_HOVER=false` maps to `gesture.commit_on_hover`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("ITEMTREE")
            .separator("__")
            .try_parsing(true),
    )
}
