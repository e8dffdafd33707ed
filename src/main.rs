use clap::Parser;
use codecat::collector::CollectorConfig;
use codecat::collect_files;
use codecat::logger::initialize_logger;
use codecat::targets::TargetSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[arg(default_value = ".", help = "Directory to collect files from")]
    root: PathBuf,
    #[arg(short = 'o', long, default_value = "html_files.txt")]
    output: PathBuf,
    #[arg(short = 's', long, default_value = "false")]
    no_stats: bool,
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    let collector_config = CollectorConfig {
        root_dir: cli_args.root,
        output_file: cli_args.output.clone(),
        targets: TargetSet::default(),
        no_stats: cli_args.no_stats,
    };

    if let Err(e) = collect_files(collector_config).await {
        eprintln!("Error collecting files: {}", e);
        std::process::exit(1);
    }

    println!("Done ✅ Saved to {}", cli_args.output.display());
}
