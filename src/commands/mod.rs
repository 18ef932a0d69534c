//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `publish` - Locate, rename and publish a build artifact
//! - `show` - Display information

pub mod publish;
pub mod show;

pub use publish::cmd_publish;
pub use show::cmd_show;
