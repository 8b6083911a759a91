//! Environment source: `ADDRESSBOOK__SECTION__KEY` variables.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub const ENV_PREFIX: &str = "ADDRESSBOOK";

/// Add environment overrides, e.g. `ADDRESSBOOK__STORAGE__DATA_FILE`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    )
}
