use anyhow::Result;
use chat_emoji::cli::{self, Cli};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let code = cli::run(cli)?;

    log::logger().flush();
    if code != 0 {
        // Non-zero exit: use process::exit so the shell sees the correct exit code
        std::process::exit(code);
    }
    Ok(())
}
