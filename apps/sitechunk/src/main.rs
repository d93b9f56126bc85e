use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = sitechunk::Args::parse();

	sitechunk::run(args).await
}
