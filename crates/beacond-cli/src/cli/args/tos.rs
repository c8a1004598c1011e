use clap::{Args, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct TosArgs {
    #[command(subcommand)]
    pub cmd: TosCmd,
}

#[derive(Subcommand, Debug)]
pub enum TosCmd {
    /// Show whether the terms of use have been accepted (never prompts)
    Status(TosStatusArgs),

    /// Accept the terms of use now (prompts unless --accept-tos is given)
    Accept,
}

#[derive(Args, Debug)]
pub struct TosStatusArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
