use std::fmt::Display;

use astro_config::FrameConfig;
use astro_snapshot::{SnapshotEngine, SnapshotOptions};
use astro_time::{jd_to_centuries, normalize_timestamp};
use astro_vedic_base::{
    deg_to_dms, lahiri_ayanamsha_deg, nakshatra_from_longitude, navamsa_from_longitude,
    navamsa_longitude, rashi_from_longitude,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astro", about = "Sidereal snapshot engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full snapshot for a timestamp, as JSON
    Snapshot {
        /// ISO-8601 timestamp; without an offset it is read as Asia/Kolkata time
        ts: String,
        /// Include aspects between the charted bodies
        #[arg(long)]
        aspects: bool,
        /// Aspect orb in degrees (default: configured default orb)
        #[arg(long)]
        orb: Option<f64>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Fixed frame configuration and its fingerprint
    Config {
        #[arg(long)]
        pretty: bool,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Navamsa (D9) from sidereal longitude
    Navamsa {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Lahiri ayanamsa at a timestamp
    Ayanamsa {
        ts: String,
    },
    /// UTC and local civil time for a timestamp
    Normalize {
        ts: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(err: impl Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T, pretty: bool) {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match text {
        Ok(text) => println!("{text}"),
        Err(e) => fail(e),
    }
}

/// Options for a snapshot request; the configured orb fills in when
/// aspects are requested without one.
fn snapshot_options(config: &FrameConfig, aspects: bool, orb: Option<f64>) -> SnapshotOptions {
    SnapshotOptions {
        include_aspects: aspects,
        orb: if aspects {
            Some(orb.unwrap_or(config.defaults.default_orb_deg))
        } else {
            orb
        },
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let config = FrameConfig::default();

    match cli.command {
        Commands::Snapshot {
            ts,
            aspects,
            orb,
            pretty,
        } => {
            let options = snapshot_options(&config, aspects, orb);
            let engine = SnapshotEngine::new(config);
            match engine.compute(&ts, &options) {
                Ok(snapshot) => print_json(&snapshot, pretty),
                Err(e) => fail(format!("{} ({})", e, e.kind().code())),
            }
        }

        Commands::Config { pretty } => {
            let out = json!({
                "config": config.canonical_json(),
                "config_hash": config.fingerprint(),
            });
            print_json(&out, pretty);
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (#{}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra.number(),
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }

        Commands::Navamsa { lon } => {
            let pos = navamsa_from_longitude(lon);
            println!(
                "D1 {} -> D9 {} (navamsa {} of 9, D9 longitude {:.4} deg){}",
                pos.rashi.name(),
                pos.navamsa.name(),
                pos.segment + 1,
                navamsa_longitude(lon),
                if pos.vargottama { " vargottama" } else { "" }
            );
        }

        Commands::Ayanamsa { ts } => {
            let instant = normalize_timestamp(&ts, config.timezone()).unwrap_or_else(|e| fail(e));
            let aya = lahiri_ayanamsha_deg(jd_to_centuries(instant.jd_tt()));
            let dms = deg_to_dms(aya);
            println!(
                "Lahiri: {:.6} deg ({} deg {} min {:.2} sec)",
                aya, dms.degrees, dms.minutes, dms.seconds
            );
        }

        Commands::Normalize { ts } => {
            let instant = normalize_timestamp(&ts, config.timezone()).unwrap_or_else(|e| fail(e));
            println!("UTC:    {}", instant.utc.to_rfc3339());
            println!(
                "Local:  {} ({})",
                instant.local.to_rfc3339(),
                config.timezone().name()
            );
            println!("JD UT:  {:.6}", instant.jd_ut());
            println!("JD TT:  {:.6}", instant.jd_tt());
            println!("Delta T: {:.2} s", instant.delta_t_seconds());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orb_fills_in() {
        let cfg = FrameConfig::default();
        let opts = snapshot_options(&cfg, true, None);
        assert_eq!(opts.orb, Some(3.0));
        assert_eq!(snapshot_options(&cfg, true, Some(1.5)).orb, Some(1.5));
        assert!(!snapshot_options(&cfg, false, None).include_aspects);
    }

    #[test]
    fn parses_snapshot_flags() {
        let cli = Cli::try_parse_from([
            "astro",
            "snapshot",
            "2026-02-07T12:15:00+05:30",
            "--aspects",
            "--orb",
            "2.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Snapshot {
                ts,
                aspects,
                orb,
                pretty,
            } => {
                assert_eq!(ts, "2026-02-07T12:15:00+05:30");
                assert!(aspects);
                assert_eq!(orb, Some(2.5));
                assert!(!pretty);
            }
            _ => panic!("expected snapshot"),
        }
    }

    #[test]
    fn negative_longitude_accepted() {
        assert!(Cli::try_parse_from(["astro", "rashi", "-10"]).is_ok());
    }
}
