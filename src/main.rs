use {
    clap::Parser,
    postrs::app::{PostsApp, cli::Cli},
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if cli.run_generators()? {
        return Ok(());
    }

    PostsApp::init(cli)?.run().await
}
