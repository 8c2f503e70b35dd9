use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = docket_api::Args::parse();
	docket_api::run(args).await
}
