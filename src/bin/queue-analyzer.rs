use mmc_sim::config::{self, Command, FormatArg};
use mmc_sim::error::Result;
use mmc_sim::output::{Formatter, HumanFormatter, JsonFormatter, Report};
use mmc_sim::{analytic, distribution, sim};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = config::parse_args();

    let report = match &cli.command {
        Command::Analyze(queue) => {
            let config = queue.build_config()?;
            Report::SteadyState(analytic::analyze(&config)?)
        }
        Command::Simulate {
            queue,
            horizon,
            seed,
        } => {
            let mut config = queue.build_config()?;
            if let Some(horizon) = horizon {
                config.horizon = *horizon;
            }
            if let Some(seed) = seed {
                config.seed = Some(*seed);
            }
            Report::Simulation(sim::run_simulation(&config)?)
        }
        Command::States { queue, max_states } => {
            let config = queue.build_config()?;
            let max_states = max_states.unwrap_or(config.max_states);
            Report::Distribution(distribution::state_distribution(&config, max_states)?)
        }
    };

    let formatter = formatter_for(&cli.format);
    let output = formatter.write(&report)?;
    print!("{}", output);

    Ok(())
}

fn formatter_for(format: &FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}
