use clap::Args;
use departure_optimizer::{clustering::k_means::KMeans, planner::RoutePlanner};
use departure_providers::tomtom_api::TomTomClient;

use crate::{
    config::Config,
    input::{StopsArgs, collect_points},
};

#[derive(Args)]
pub struct OrderArgs {
    #[command(flatten)]
    stops: StopsArgs,
}

pub async fn run(args: OrderArgs, config: &Config) -> anyhow::Result<()> {
    let points = collect_points(&args.stops, config).await?;

    let planner = RoutePlanner::new(
        KMeans::default(),
        TomTomClient::new(config.tomtom_params()),
        args.stops.route_params(),
        args.stops.clusters,
    );

    let ordered = planner.optimize_order(&points).await?;

    for (position, point) in ordered.iter().enumerate() {
        println!("{:>2}. {}", position + 1, point);
    }

    Ok(())
}
