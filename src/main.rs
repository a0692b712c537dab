use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cinegraph", version, about = "GraphQL aggregation layer over the TMDB REST API")]
struct Cli {
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the GraphQL schema as SDL and exit
    #[arg(long)]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", cinegraph::build_schema().sdl());
        return Ok(());
    }

    cinegraph::run(cli.port).await?;
    Ok(())
}
