mod pack;
mod unpack;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pack a directory into a PAK file
    Pack(PackCommand),
    /// Unpack a PAK file into a directory
    Unpack(UnpackCommand),
    /// Write one entry of a PAK file to stdout
    Cat(CatCommand),
    /// List the entries of a PAK file
    List(ListCommand),
}

#[derive(Debug, Args)]
struct PackCommand {
    /// Input directory path
    input: String,
    /// Output PAK file path, must end with `.pak`
    output: String,
    /// Also write a `<output>.map` report
    #[arg(short, long)]
    map: bool,
    /// Fail instead of replacing an existing output file
    #[arg(long)]
    no_override: bool,
}

#[derive(Debug, Args)]
struct UnpackCommand {
    /// Input PAK file path
    input: String,
    /// Output directory path
    output: Option<String>,
    /// Fail instead of replacing existing files
    #[arg(long)]
    no_override: bool,
}

#[derive(Debug, Args)]
struct CatCommand {
    /// Input PAK file path
    input: String,
    /// Entry name, e.g. "dir/file.txt"
    name: String,
}

#[derive(Debug, Args)]
struct ListCommand {
    /// Input PAK file path
    input: String,
    /// Print header and index as JSON
    #[arg(long)]
    json: bool,
}

fn check_pak_extension(path: &str) -> anyhow::Result<()> {
    if !path.ends_with(".pak") {
        anyhow::bail!("The pak file must end with .pak: `{}`", path);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match &cli.command {
        Command::Pack(cmd) => pack::package(cmd),
        Command::Unpack(cmd) => unpack::unpack(cmd),
        Command::Cat(cmd) => unpack::cat(cmd),
        Command::List(cmd) => unpack::list(cmd),
    }
}
