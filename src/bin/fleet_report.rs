use std::error::Error;

use simple_logger::SimpleLogger;

use sorties::*;

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let fleet = fleet()?;
    log::info!("computing emissions for {} aircraft...", fleet.len());
    let table = build_results_table(&fleet)?;
    log::info!("computed {} results", table.len());

    print_report(&table)?;

    Ok(())
}
