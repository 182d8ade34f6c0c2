use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = redmine::cli::Cli::parse();
    redmine::logging::init(cli.verbose);

    if let Err(err) = redmine::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
