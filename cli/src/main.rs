use clap::Parser;
use color_eyre::eyre::Result;
use pentacross_cli::cli::Args;
use pentacross_cli::pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    let document = pipeline::run(&args).await?;
    let json = serde_json::to_string_pretty(&document)?;

    match &args.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
