pub mod analyze;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Compute region metrics once and print them as JSON
    Analyze {
        #[arg(
            short,
            long,
            value_delimiter = ',',
            required = true,
            help = "Comma-separated regions to analyze"
        )]
        regions: Vec<String>,
        #[arg(short, long, help = "Latency threshold in milliseconds")]
        threshold_ms: i64,
    },
    /// List the regions in the embedded dataset with their record counts
    Regions,
}

pub async fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Analyze {
            regions,
            threshold_ms,
        } => analyze::handle_analyze_command(regions, threshold_ms),
        Commands::Regions => analyze::handle_regions_command(),
    }
}
