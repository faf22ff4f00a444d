use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use gf_gas::{Catalog, ValidationPolicy};
use gf_project::{
    ProjectResult, Scenario, evaluate, load_scenario, natural_gas_scenario, read_scenario,
    validate_scenario,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gf-cli")]
#[command(about = "GasFlow CLI - gas stream properties and mixing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Mix the streams of a scenario and print the mixture characteristics
    Mix {
        /// Path to a YAML or JSON scenario (built-in natural gas scenario if omitted)
        scenario_path: Option<PathBuf>,
        /// Override the scenario's validation policy
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        /// Also print every inlet stream
        #[arg(long)]
        all: bool,
    },
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the YAML or JSON scenario
        scenario_path: PathBuf,
    },
    /// List the standard component catalog
    Catalog {
        /// Substring filter on chemical names
        query: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Reject non-physical inputs and degenerate flux
    Strict,
    /// Carry NaN/Inf through the arithmetic
    Permissive,
}

impl From<PolicyArg> for ValidationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => ValidationPolicy::Strict,
            PolicyArg::Permissive => ValidationPolicy::Permissive,
        }
    }
}

fn main() -> ProjectResult<()> {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => cmd_mix(None, None, false),
        Some(Commands::Mix {
            scenario_path,
            policy,
            all,
        }) => cmd_mix(scenario_path.as_deref(), policy.map(Into::into), all),
        Some(Commands::Validate { scenario_path }) => cmd_validate(&scenario_path),
        Some(Commands::Catalog { query }) => {
            cmd_catalog(query.as_deref().unwrap_or_default());
            Ok(())
        }
    }
}

fn open_scenario(
    path: Option<&Path>,
    policy: Option<ValidationPolicy>,
) -> ProjectResult<Scenario> {
    let mut scenario = match path {
        Some(path) => read_scenario(path)?,
        None => natural_gas_scenario(),
    };
    // The override also governs range checks during validation
    if let Some(policy) = policy {
        scenario.policy = policy.into();
    }
    validate_scenario(&scenario)?;
    if let Some(path) = path {
        info!(path = %path.display(), streams = scenario.streams.len(), "loaded scenario");
    }
    Ok(scenario)
}

/// Mix a scenario and render the report text, inlets first when `all` is set.
fn render_mix(
    path: Option<&Path>,
    policy: Option<ValidationPolicy>,
    all: bool,
) -> ProjectResult<String> {
    let scenario = open_scenario(path, policy)?;
    let evaluation = evaluate(&scenario, None)?;
    info!(
        scenario = %scenario.name,
        streams = evaluation.streams.len(),
        "mixed scenario"
    );

    let mut out = String::new();
    if all {
        for (id, gas) in &evaluation.streams {
            out.push_str(&format!("Characteristics of {}\n{}\n", id, gas.report()));
        }
    }
    out.push_str(&format!(
        "Characteristics of mixture\n{}",
        evaluation.mixture.report()
    ));
    Ok(out)
}

fn cmd_mix(
    path: Option<&Path>,
    policy: Option<ValidationPolicy>,
    all: bool,
) -> ProjectResult<()> {
    print!("{}", render_mix(path, policy, all)?);
    Ok(())
}

fn cmd_validate(path: &Path) -> ProjectResult<()> {
    println!("Validating scenario: {}", path.display());
    let scenario = load_scenario(path)?;
    println!("✓ Scenario is valid");
    println!("  Streams: {}", scenario.streams.len());
    Ok(())
}

fn cmd_catalog(query: &str) {
    let catalog = Catalog::standard();
    let hits = catalog.filter(query);

    if hits.is_empty() {
        println!("No chemicals match '{}'", query);
        return;
    }

    println!("{:<4} {:<6} {:>14} {:>8}", "#", "Name", "M [kg/mol]", "k");
    for (index, chemical) in hits {
        println!(
            "{:<4} {:<6} {:>14} {:>8}",
            index,
            chemical.name(),
            chemical.molar_mass(),
            chemical.heat_capacity_ratio()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use gf_gas::GasError;
    use gf_project::ProjectError;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    fn write_scenario(name: &str, yaml: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, yaml).unwrap();
        path
    }

    const ZERO_FLUX: &str = r#"
version: 1
name: stalled
streams:
  - id: a
    temperature_k: 300.0
    pressure_atm: 2.0
    mass_flux_kg_per_s: 0.0
    mass_fractions: { C1: 1.0 }
  - id: b
    temperature_k: 320.0
    pressure_atm: 1.5
    mass_flux_kg_per_s: 0.0
    mass_fractions: { N2: 1.0 }
"#;

    #[test]
    fn no_subcommand_mixes_builtin_scenario() {
        let cli = Cli::try_parse_from(["gf-cli"]).unwrap();
        assert!(cli.command.is_none());

        let text = render_mix(None, None, false).unwrap();
        let mixture = evaluate(&natural_gas_scenario(), None).unwrap().mixture;
        assert_eq!(
            text,
            format!("Characteristics of mixture\n{}", mixture.report())
        );

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 5 + 11);
        assert_eq!(lines[0], "Characteristics of mixture");
        assert_eq!(lines[2], "Pressure: 4 atm");
        assert_eq!(lines[3], "Mass flux: 30 kg/s");
        assert_eq!(lines[5], "Composition:");
    }

    #[test]
    fn all_flag_prints_inlets_before_mixture() {
        let cli =
            Cli::try_parse_from(["gf-cli", "mix", "--policy", "permissive", "--all"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Mix {
                scenario_path: None,
                policy: Some(PolicyArg::Permissive),
                all: true,
            })
        ));

        let text = render_mix(None, None, true).unwrap();
        let gas1 = text.find("Characteristics of gas1").unwrap();
        let gas2 = text.find("Characteristics of gas2").unwrap();
        let mixture = text.find("Characteristics of mixture").unwrap();
        assert!(gas1 < gas2 && gas2 < mixture);
        assert!(text.contains("Pressure: 6 atm"));
    }

    #[test]
    fn policy_override_permits_zero_flux() {
        let path = write_scenario("gf_cli_zero_flux.yaml", ZERO_FLUX);

        let err = render_mix(Some(&path), None, false).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::Gas(GasError::DegenerateFlux { .. })
        ));

        let text = render_mix(Some(&path), Some(ValidationPolicy::Permissive), false).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Characteristics of mixture");
        assert_eq!(lines[1], "Temperature: NaN K");
        assert_eq!(lines[2], "Pressure: 1.5 atm");
        assert_eq!(lines[3], "Mass flux: 0 kg/s");
        assert_eq!(lines[4], "Density: NaN kg/m^3");
    }

    #[test]
    fn shipped_scenario_renders() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../scenarios/sour_gas_three_inlets.yaml");
        let text = render_mix(Some(&path), None, false).unwrap();
        assert!(text.starts_with("Characteristics of mixture\n"));
        assert!(text.contains("Pressure: 9.5 atm"));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn mixing_a_file_logs_the_load() {
        let path = write_scenario(
            "gf_cli_logged.yaml",
            &ZERO_FLUX.replace("mass_flux_kg_per_s: 0.0", "mass_flux_kg_per_s: 1.0"),
        );
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            render_mix(Some(&path), None, false).unwrap();
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("loaded scenario"));
        assert!(logs.contains("mixed scenario"));
    }
}
