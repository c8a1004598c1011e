use beacond_core::NodeConfig;

use super::super::args::*;
use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let config = NodeConfig::from_env().with_overrides(
        cli.global.home,
        cli.global.accept_tos,
        cli.global.jwt_secret,
    );

    // Consent gate runs before any gated command does work.
    if cli.cmd.requires_consent() {
        let code = super::tos::verify_tos(&config);
        if code != SUCCESS {
            return Ok(code);
        }
    }

    match cli.cmd {
        Command::Jwt(args) => Ok(super::jwt::cmd_jwt(args.cmd, &config)),
        Command::Tos(args) => match args.cmd {
            TosCmd::Status(status_args) => super::tos::cmd_status(status_args, &config),
            TosCmd::Accept => {
                eprintln!("Terms of use accepted.");
                Ok(SUCCESS)
            }
        },
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
