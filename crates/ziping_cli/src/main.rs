use clap::{Parser, Subcommand};
use ziping::{
    AnalysisRecord, Analyzer, ChartRequest, CivilDateTime, FortuneRecord, Gender, ZiHourPolicy,
};

#[derive(Parser)]
#[command(name = "ziping", about = "Four-pillars chart analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the four pillars for a birth instant
    Chart {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Longitude in degrees east for true-solar-time correction
        #[arg(long)]
        longitude: Option<f64>,
        /// Late Zi hour keeps the current day's stem
        #[arg(long)]
        late_zi_same_day: bool,
    },
    /// Full analysis: chart, strength, pattern, fortune periods
    Analyze {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// Longitude in degrees east for true-solar-time correction
        #[arg(long)]
        longitude: Option<f64>,
        /// Number of fortune periods (1-12)
        #[arg(long, default_value = "10")]
        periods: u8,
        /// Emit the versioned JSON record instead of text
        #[arg(long)]
        json: bool,
    },
    /// Fortune periods only
    Fortune {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// Number of fortune periods (1-12)
        #[arg(long, default_value = "10")]
        periods: u8,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_civil(s: &str) -> Result<CivilDateTime, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(CivilDateTime::new(year, month, day, hour, minute, second))
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s.to_ascii_lowercase().as_str() {
        "male" | "m" => Ok(Gender::Male),
        "female" | "f" => Ok(Gender::Female),
        other => Err(format!("expected male or female, got {other}")),
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Chart {
            date,
            longitude,
            late_zi_same_day,
        } => {
            let birth = parse_civil(&date)?;
            let policy = if late_zi_same_day {
                ZiHourPolicy::LateZiSameDay
            } else {
                ZiHourPolicy::LateZiNextDay
            };
            let mut request = ChartRequest::new(birth, Gender::Male);
            if let Some(lon) = longitude {
                request = request.with_longitude(lon);
            }
            let analysis = Analyzer::new()
                .zi_policy(policy)
                .analyze(&request)
                .map_err(|e| e.to_string())?;
            let chart = analysis.chart;
            println!("{chart}");
            for (label, pillar) in ["year", "month", "day", "hour"]
                .iter()
                .zip(chart.pillars())
            {
                let hidden: Vec<String> = pillar
                    .hidden_components()
                    .iter()
                    .map(|h| format!("{} {:.1}", h.stem.name(), h.weight))
                    .collect();
                println!("  {label:<6}{pillar}  [{}]", hidden.join(", "));
            }
        }
        Commands::Analyze {
            date,
            gender,
            longitude,
            periods,
            json,
        } => {
            let birth = parse_civil(&date)?;
            let gender = parse_gender(&gender)?;
            let mut request = ChartRequest::new(birth, gender);
            if let Some(lon) = longitude {
                request = request.with_longitude(lon);
            }
            let analysis = Analyzer::new()
                .period_count(periods)
                .analyze(&request)
                .map_err(|e| e.to_string())?;
            if json {
                let record = AnalysisRecord::from(&analysis);
                let out = serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?;
                println!("{out}");
            } else {
                println!("chart:    {}", analysis.chart);
                println!(
                    "strength: {} {} ({}), support {:.2} vs pressure {:.2}",
                    analysis.strength.polarity.name(),
                    analysis.strength.element.english_name(),
                    analysis.strength.level.name(),
                    analysis.strength.support_score,
                    analysis.strength.pressure_score,
                );
                println!(
                    "pattern:  {} ({})",
                    analysis.pattern.structure.name(),
                    analysis.pattern.verdict.name(),
                );
                println!(
                    "fortune:  {} from age {:.1} (boundary {})",
                    analysis.fortune.direction.name(),
                    analysis.fortune.onset_age,
                    analysis.fortune.boundary.term.name(),
                );
                for p in &analysis.fortune.periods {
                    println!(
                        "  {:>2}. {}  {:5.1} - {:5.1}",
                        p.order, p.pillar, p.start_age, p.end_age
                    );
                }
            }
        }
        Commands::Fortune {
            date,
            gender,
            periods,
            json,
        } => {
            let birth = parse_civil(&date)?;
            let gender = parse_gender(&gender)?;
            let request = ChartRequest::new(birth, gender);
            let analysis = Analyzer::new()
                .period_count(periods)
                .analyze(&request)
                .map_err(|e| e.to_string())?;
            if json {
                let record = FortuneRecord::from(&analysis.fortune);
                let out = serde_json::to_string_pretty(&record).map_err(|e| e.to_string())?;
                println!("{out}");
            } else {
                println!(
                    "{} from age {:.1}",
                    analysis.fortune.direction.name(),
                    analysis.fortune.onset_age
                );
                for p in &analysis.fortune.periods {
                    println!(
                        "  {:>2}. {}  {:5.1} - {:5.1}",
                        p.order, p.pillar, p.start_age, p.end_age
                    );
                }
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_civil_accepts_z_suffix() {
        let dt = parse_civil("2000-06-10T12:00:00Z").unwrap();
        assert_eq!((dt.year, dt.month, dt.day), (2000, 6, 10));
        assert_eq!((dt.hour, dt.minute), (12, 0));
    }

    #[test]
    fn parse_civil_rejects_garbage() {
        assert!(parse_civil("2000-06-10").is_err());
        assert!(parse_civil("noon").is_err());
    }

    #[test]
    fn parse_gender_aliases() {
        assert_eq!(parse_gender("male").unwrap(), Gender::Male);
        assert_eq!(parse_gender("F").unwrap(), Gender::Female);
        assert!(parse_gender("x").is_err());
    }
}
