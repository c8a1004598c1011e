use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod jwt;
pub mod tos;
pub use jwt::*;
pub use tos::*;

#[derive(Parser)]
#[command(
    name = "beacond",
    version,
    about = "beacond operator tooling: terms-of-use consent and Engine API JWT secrets"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Node home directory (env: BEACOND_HOME, default: ~/.beacond)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Accept the terms of use without prompting (env: BEACOND_ACCEPT_TOS)
    #[arg(long, global = true)]
    pub accept_tos: bool,

    /// Path to the hex-encoded Engine API JWT secret (env: BEACOND_JWT_SECRET, default: <home>/jwt.hex)
    #[arg(long, global = true)]
    pub jwt_secret: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Engine API JWT secret management
    Jwt(JwtArgs),
    /// Terms of use acceptance
    Tos(TosArgs),
    Version,
}

impl Command {
    /// Whether the terms of use must be accepted before the command runs.
    pub fn requires_consent(&self) -> bool {
        !matches!(
            self,
            Self::Version
                | Self::Tos(TosArgs {
                    cmd: TosCmd::Status(_)
                })
        )
    }
}
