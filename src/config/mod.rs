// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module.
//!
//! Loads prb.toml from the working tree, home directory, or XDG config
//! directory, falling back to defaults when none exists.

mod default;
mod loader;
mod schema;

pub use default::{write_default_config, DEFAULT_CONFIG};
pub use loader::{find_config_file, find_config_file_from, load_config, load_config_from};
pub use schema::{GithubConfig, OpenAiConfig, PolicySection, PrbConfig, ReviewConfig};
