use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = bridge_api::Args::parse();

	bridge_api::run(args).await
}
