use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct JwtArgs {
    #[command(subcommand)]
    pub cmd: JwtCmd,
}

#[derive(Subcommand, Debug)]
pub enum JwtCmd {
    /// Generate a new 32-byte secret for authenticating with the execution client
    Generate(JwtGenerateArgs),

    /// Print an Authorization header for the configured secret
    Header,

    /// Verify a token against the configured secret
    Verify(JwtVerifyArgs),
}

#[derive(Args, Debug)]
pub struct JwtGenerateArgs {
    /// Where to write the secret (default: the configured --jwt-secret path)
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    /// Force overwrite an existing secret
    #[arg(long, short)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct JwtVerifyArgs {
    /// Token to verify, with or without the "Bearer " prefix
    #[arg(long)]
    pub token: String,
}
