mod init;
mod resolve;

pub use init::cmd_init;
pub use resolve::{ResolveReport, build_report, cmd_resolve};
