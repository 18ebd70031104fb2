use aeroperf::config::loader::load_aircraft_config;
use aeroperf::render::{format_summary, save_chart, save_sweep_csv, ChartStyle};
use aeroperf::{AircraftConfig, ControlPanel, Parameter, PerfError};
use log::{error, info};
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  set <parameter> <value>   move a slider and recompute
  show                      print the current summary
  params                    list parameters with their ranges
  chart <file.png>          save the drag/thrust chart
  csv <file.csv>            save the velocity sweep
  help                      this text
  quit";

fn print_params(panel: &ControlPanel) {
    for parameter in Parameter::ALL {
        let slider = parameter.slider();
        println!(
            "  {:<10} {:>10.4} {:<3} [{} .. {}, step {}]",
            parameter.to_string(),
            panel.get(parameter),
            parameter.unit(),
            slider.min,
            slider.max,
            slider.step
        );
    }
}

/// Runs one command line. Returns `false` when the session should end.
fn handle_command(panel: &mut ControlPanel, line: &str) -> Result<bool, PerfError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => {}
        ["set", name, raw] => {
            let parameter: Parameter = name.parse()?;
            let value: f64 = raw
                .parse()
                .map_err(|_| PerfError::InvalidValue(raw.to_string()))?;
            let snapped = panel.set(parameter, value);
            if snapped != value {
                println!("{} snapped to {}", parameter, snapped);
            }
        }
        ["show"] => println!("{}", format_summary(panel.report())),
        ["params"] => print_params(panel),
        ["chart", path] => {
            save_chart(panel.report(), &ChartStyle::default(), path)?;
            println!("Chart written to {}", path);
        }
        ["csv", path] => {
            save_sweep_csv(&panel.report().sweep, path)?;
            println!("Sweep written to {}", path);
        }
        ["help"] => println!("{}", HELP),
        ["quit"] | ["exit"] => return Ok(false),
        _ => println!("Unrecognised command '{}'. Type 'help'.", line.trim()),
    }
    Ok(true)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1) {
        Some(path) => load_aircraft_config(&path)?,
        None => AircraftConfig::default(),
    };
    info!("Starting control panel with {:?}", config);

    let mut panel = ControlPanel::new(config);
    panel.subscribe(|report| println!("\n{}\n", format_summary(report)));

    println!("{}\n", format_summary(panel.report()));
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match handle_command(&mut panel, &line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => error!("{}", e),
        }
    }

    Ok(())
}
