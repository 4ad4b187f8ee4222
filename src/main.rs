use clap::Parser;
use secretfile::cli::{commands, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt { ref message } => commands::encrypt(&cli, message),
        Commands::Decrypt => commands::decrypt(&cli),
        Commands::NewKey => commands::new_key(),
    };

    if let Err(e) = result {
        secretfile::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
