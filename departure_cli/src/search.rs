use std::time::Duration;

use clap::Args;
use comfy_table::Table;
use departure_optimizer::{
    clustering::k_means::KMeans,
    departure::{
        departure_search::DepartureSearchParams,
        departure_time::today,
        hour_window::HourWindow,
        search_state::CandidateEvaluation,
    },
    planner::RoutePlanner,
};
use departure_providers::tomtom_api::TomTomClient;
use indicatif::{MultiProgress, ProgressBar};
use tracing::info;

use crate::{
    config::Config,
    input::{StopsArgs, collect_points},
    parsers,
    prompt::prompt_hour_window,
};

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    stops: StopsArgs,

    /// First candidate departure hour, prompted for when missing
    #[arg(short, long, requires = "end")]
    start: Option<i8>,

    /// Hour after the last candidate, prompted for when missing
    #[arg(short, long, requires = "start")]
    end: Option<i8>,

    /// Pause before every optimizer request (e.g. "1s", "500ms")
    #[arg(long, value_parser = parsers::parse_delay, default_value = "1s")]
    delay: Duration,

    /// Day to plan for, defaults to today in Kyiv
    #[arg(long)]
    date: Option<jiff::civil::Date>,
}

fn evaluations_table(evaluations: &[CandidateEvaluation]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Departure",
        "Travel (min)",
        "Service (min)",
        "Total (min)",
        "Distance (km)",
    ]);

    for evaluation in evaluations {
        table.add_row(vec![
            format!("{:02}:00", evaluation.hour),
            format!("{:.2}", evaluation.summary.travel_time_in_seconds / 60.0),
            format!("{:.2}", evaluation.summary.service_time_in_seconds / 60.0),
            format!("{:.2}", evaluation.total_time_in_seconds() / 60.0),
            evaluation
                .summary
                .length_in_meters
                .map(|meters| format!("{:.1}", meters / 1000.0))
                .unwrap_or_else(|| String::from("-")),
        ]);
    }

    table
}

pub async fn run(
    args: SearchArgs,
    config: &Config,
    progress: &MultiProgress,
) -> anyhow::Result<()> {
    let points = collect_points(&args.stops, config).await?;

    let window = match (args.start, args.end) {
        (Some(start), Some(end)) => HourWindow::new(start, end)?,
        _ => prompt_hour_window(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let mut params = DepartureSearchParams::new()?;
    params.request_delay = args.delay;
    let date = args.date.unwrap_or_else(|| today(&params.time_zone));

    let planner = RoutePlanner::new(
        KMeans::default(),
        TomTomClient::new(config.tomtom_params()),
        args.stops.route_params(),
        args.stops.clusters,
    );

    info!(
        "Waiting {:?} before each request to avoid HTTP 429",
        params.request_delay
    );

    let spinner = progress.add(ProgressBar::new_spinner());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message(format!("Evaluating {} departure hours", window.hours().len()));

    let outcome = planner
        .best_departure(&points, window, date, &params)
        .await;
    spinner.finish_and_clear();
    let outcome = outcome?;

    println!("{}", evaluations_table(&outcome.evaluations));

    match outcome.best {
        Some(best) => {
            println!(
                "Optimal departure time: {}",
                best.local_time(&params.time_zone)?
            );
            println!(
                "Total time (travel + service): {:.2} minutes",
                best.total_time_in_minutes()
            );
        }
        None => println!("No optimal departure time found"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use departure_providers::waypoint_optimization::RouteSummary;

    use super::*;

    #[derive(Parser)]
    struct SearchCli {
        #[command(flatten)]
        search: SearchArgs,
    }

    #[test]
    fn test_start_and_end_go_together() {
        assert!(SearchCli::try_parse_from(["departure", "--start", "9"]).is_err());
        assert!(SearchCli::try_parse_from(["departure", "-e", "12"]).is_err());

        let cli = SearchCli::try_parse_from(["departure", "-s", "9", "-e", "12"]).unwrap();
        assert_eq!(cli.search.start, Some(9));
        assert_eq!(cli.search.end, Some(12));

        let cli = SearchCli::try_parse_from(["departure"]).unwrap();
        assert_eq!((cli.search.start, cli.search.end), (None, None));
        assert_eq!(cli.search.delay, Duration::from_secs(1));
    }

    #[test]
    fn test_evaluations_table() {
        let evaluations = [
            CandidateEvaluation {
                hour: 9,
                depart_at: String::from("2024-06-15T09:00:00+03:00"),
                summary: RouteSummary {
                    travel_time_in_seconds: 1800.0,
                    service_time_in_seconds: 3000.0,
                    length_in_meters: Some(25_000.0),
                },
            },
            CandidateEvaluation {
                hour: 10,
                depart_at: String::from("2024-06-15T10:00:00+03:00"),
                summary: RouteSummary {
                    travel_time_in_seconds: 1200.0,
                    service_time_in_seconds: 3000.0,
                    length_in_meters: None,
                },
            },
        ];

        let rendered = evaluations_table(&evaluations).to_string();

        assert!(rendered.contains("09:00"));
        assert!(rendered.contains("80.00"));
        assert!(rendered.contains("25.0"));
        assert!(rendered.contains("70.00"));
    }
}
