use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = qna_api::Args::parse();

	qna_api::run(args).await
}
