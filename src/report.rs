use crate::emissions::{comparison_unit, ComparisonUnit, Emissions, EmissionsError, ResultsTable};
use crate::quantity::{METRIC_TON, METRIC_TON_PER_HOUR, MONTH, WEEK, YEAR};

static BAR_WIDTH: usize = 50;

/// One `"<name>: <value> <unit>"` line, in years, months or weeks of
/// average car driving depending on the size of the ratio.
fn comparison_line(name: &str, emissions: &Emissions) -> Result<String, EmissionsError> {
    let ratio = emissions.co2_ratio_to_annual_driving;
    let years = ratio.get(YEAR)?;
    Ok(match comparison_unit(years) {
        ComparisonUnit::Years => format!("{name}: {years:.2} years"),
        ComparisonUnit::Months => format!("{name}: {:.2} months", ratio.get(MONTH)?),
        ComparisonUnit::Weeks => format!("{name}: {:.2} weeks", ratio.get(WEEK)?),
    })
}

pub fn comparison_lines(table: &ResultsTable) -> Result<Vec<String>, EmissionsError> {
    table
        .iter()
        .map(|(name, emissions)| comparison_line(name, emissions))
        .collect()
}

/// Renders a horizontal bar chart: a title line, one bar per row in input
/// order, and the y-axis label as a trailing legend.
pub fn bar_chart(title: &str, ylabel: &str, rows: &[(&str, f64)]) -> String {
    let max = rows.iter().map(|(_, value)| *value).fold(0.0f64, f64::max);
    let name_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for (name, value) in rows {
        let length = if max > 0.0 {
            (value / max * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{name:<name_width$} | {} {value:.2}\n",
            "█".repeat(length)
        ));
    }
    out.push_str(&format!("({ylabel})\n"));
    out
}

pub fn per_hour_chart(table: &ResultsTable) -> Result<String, EmissionsError> {
    let rows = table
        .iter()
        .map(|(name, emissions)| Ok((name, emissions.co2_per_hour.get(METRIC_TON_PER_HOUR)?)))
        .collect::<Result<Vec<_>, EmissionsError>>()?;
    Ok(bar_chart(
        "Metric Ton CO2/hr, per plane",
        "Metric Ton CO2/hr",
        &rows,
    ))
}

pub fn per_mission_chart(table: &ResultsTable) -> Result<String, EmissionsError> {
    let rows = table
        .iter()
        .map(|(name, emissions)| Ok((name, emissions.co2_per_mission.get(METRIC_TON)?)))
        .collect::<Result<Vec<_>, EmissionsError>>()?;
    Ok(bar_chart(
        "Metric Ton CO2 per mission, per plane",
        "Metric Ton CO2 per mission",
        &rows,
    ))
}

/// Prints the comparison lines and both charts to the console.
pub fn print_report(table: &ResultsTable) -> Result<(), EmissionsError> {
    for line in comparison_lines(table)? {
        println!("{line}");
    }
    println!();
    println!("{}", per_hour_chart(table)?);
    println!("{}", per_mission_chart(table)?);
    Ok(())
}
