//! Wedding site preview CLI
//!
//! Runs the site's interaction models outside the browser:
//! - Show the countdown at any instant
//! - Simulate an RSVP submission and print its timeline
//! - Print a generated particle field
//! - Write the default config file

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use kk_wedding::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kk-wedding")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Preview the Kaya & Kevin wedding site interactions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: built-in settings)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the countdown
    Countdown {
        /// Instant to count from, RFC 3339 (default: now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Simulate an RSVP submission
    Rsvp {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Leave out to simulate no selection
        #[arg(long)]
        attendance: Option<AttendanceArg>,
    },

    /// Print generated hero particles as JSON
    Particles {
        /// Seed for the random source (default: current time)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AttendanceArg {
    Yes,
    No,
}

impl From<AttendanceArg> for Attendance {
    fn from(arg: AttendanceArg) -> Self {
        match arg {
            AttendanceArg::Yes => Attendance::Yes,
            AttendanceArg::No => Attendance::No,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SiteConfig::load_with_env(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SiteConfig::from_env()?,
    };

    init_logging(&config);

    match cli.command {
        Commands::Countdown { at } => {
            let now = match at.as_deref() {
                None | Some("now") => Utc::now(),
                Some(s) => DateTime::parse_from_rfc3339(s)
                    .with_context(|| format!("invalid timestamp: {}", s))?
                    .with_timezone(&Utc),
            };

            let countdown = Countdown::new(config.countdown.target_instant()?);
            let remaining = countdown.remaining(now);

            println!("Until {}", countdown.target().to_rfc3339());
            for field in CountdownField::ALL {
                println!("  {:<8} {}", label(field), remaining.formatted(field));
            }
            if countdown.is_over(now) {
                println!();
                println!("The big day has arrived.");
            }
        }

        Commands::Rsvp {
            first_name,
            last_name,
            email,
            attendance,
        } => {
            let mut rng = SmallRng::seed_from_u64(0);
            let presence = PagePresence {
                rsvp_form: true,
                ..Default::default()
            };
            let mut site = Site::init(config, presence, &mut rng)?;
            let mut scheduler = ManualScheduler::new();

            let draft = RsvpDraft {
                first_name,
                last_name,
                email,
                attendance: attendance.map(Attendance::from),
            };

            match site.submit_rsvp(&draft, &mut scheduler) {
                Ok(effects) => {
                    for effect in effects {
                        print_effect(0, &effect);
                    }
                }
                Err(e) => {
                    println!("{:>6}ms  toast: {}", 0, e);
                    std::process::exit(1);
                }
            }

            while let Some((at, deferred)) = scheduler.fire_next() {
                match site.on_deferred(deferred, &mut scheduler) {
                    DeferredOutcome::Rsvp(effects) => {
                        for effect in effects {
                            print_effect(at, &effect);
                        }
                        let toast = site.toast.view();
                        if toast.visible && deferred == Deferred::RevealConfirmation {
                            println!("{:>6}ms  toast: {}", at, toast.text);
                        }
                    }
                    DeferredOutcome::ToastHidden => println!("{:>6}ms  toast hidden", at),
                    DeferredOutcome::RemoveSparkle(_) => {}
                }
            }
        }

        Commands::Particles { seed } => {
            let seed = seed.unwrap_or_else(|| Utc::now().timestamp_millis() as u64);
            let mut rng = SmallRng::seed_from_u64(seed);
            let particles = generate_particles(&mut rng, &config.particles);
            println!("{}", serde_json::to_string_pretty(&particles)?);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &SiteConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("kk_wedding={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn label(field: CountdownField) -> &'static str {
    match field {
        CountdownField::Days => "Days",
        CountdownField::Hours => "Hours",
        CountdownField::Minutes => "Minutes",
        CountdownField::Seconds => "Seconds",
    }
}

fn print_effect(at: u64, effect: &RsvpEffect) {
    match effect {
        RsvpEffect::SetSubmitLabel(text) => println!("{:>6}ms  submit label: {}", at, text),
        RsvpEffect::FadeOutForm { duration_ms } => {
            println!("{:>6}ms  form fades out over {}ms", at, duration_ms)
        }
        RsvpEffect::SwapToConfirmation => println!("{:>6}ms  form hidden, confirmation shown", at),
        RsvpEffect::SetConfirmMessage(message) => println!("{:>6}ms  message: {}", at, message),
    }
}
