//! CLI subcommand implementations for the Contour binary.

pub mod outline_cmd;
pub mod serve;
