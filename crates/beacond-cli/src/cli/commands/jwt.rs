//! `beacond jwt` - Engine API secret management.

use beacond_core::{EngineAuth, JwtError, JwtSecret, NodeConfig};

use crate::cli::args::{JwtCmd, JwtGenerateArgs, JwtVerifyArgs};
use crate::exit_codes::{self, SUCCESS};

pub fn cmd_jwt(cmd: JwtCmd, config: &NodeConfig) -> i32 {
    let result = match cmd {
        JwtCmd::Generate(args) => run_generate(args, config),
        JwtCmd::Header => run_header(config),
        JwtCmd::Verify(args) => run_verify(args, config),
    };

    match result {
        Ok(()) => SUCCESS,
        Err(e) => {
            eprintln!("fatal: {e}");
            exit_codes::for_jwt_error(&e)
        }
    }
}

fn run_generate(args: JwtGenerateArgs, config: &NodeConfig) -> Result<(), JwtError> {
    let path = args
        .output_path
        .unwrap_or_else(|| config.jwt_secret_path());

    JwtSecret::random().write(&path, args.force)?;

    println!(
        "Successfully wrote new JSON-RPC authentication secret to: {}",
        path.display()
    );
    Ok(())
}

fn run_header(config: &NodeConfig) -> Result<(), JwtError> {
    let auth = EngineAuth::from_file(config.jwt_secret_path())?;
    let headers = auth.headers()?;

    for value in headers.get_all("authorization") {
        println!("Authorization: {}", String::from_utf8_lossy(value.as_bytes()));
    }
    Ok(())
}

fn run_verify(args: JwtVerifyArgs, config: &NodeConfig) -> Result<(), JwtError> {
    let secret = JwtSecret::load(config.jwt_secret_path())?;
    let token = args.token.trim();
    let token = token.strip_prefix("Bearer ").unwrap_or(token);

    let claims = secret.verify(token)?;
    println!("token valid (iat {})", claims.iat);
    Ok(())
}
