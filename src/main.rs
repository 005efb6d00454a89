use clap::{Parser, Subcommand};
use env_logger::Env;
use substance::substance as model;
use substance::units;

#[derive(Parser)]
#[command(name = "substance")]
#[command(about = "SI unit conversion and substance parameter tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the multiplier that converts a unit to SI base units
    Multiplier {
        /// Unit expression (e.g., "km/h", "g/cm^3")
        unit: String,
    },

    /// Convert a value to SI base units
    Convert {
        value: f64,

        /// Unit the value is given in
        unit: String,

        /// Express the result in this unit instead of SI
        #[arg(long)]
        to: Option<String>,
    },

    /// List the parameters of a substance file
    Show {
        /// Substance TOML file
        path: String,
    },

    /// Export a substance file as JSON
    Export {
        /// Substance TOML file
        path: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Multiplier { unit } => print_multiplier(&unit),
        Commands::Convert { value, unit, to } => convert(value, &unit, to.as_deref()),
        Commands::Show { path } => show_substance(&path),
        Commands::Export { path, output } => export_substance(&path, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_multiplier(unit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let multiplier = units::resolve_multiplier(unit)?;
    println!("{}", multiplier);
    Ok(())
}

fn convert(value: f64, unit: &str, to: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let parameter = model::Parameter::new("value", value, unit, "")?;

    match to {
        Some(target) => println!("{} {}", parameter.convert_to(target)?, target),
        None => println!("{}", parameter.get()),
    }

    Ok(())
}

fn show_substance(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (substance, report) = model::load_substance_from_file(path)?;
    eprint!("{}", report);

    println!("Substance: {}", substance.name);
    println!("\nParameters ({}):", substance.parameters.len());
    for parameter in substance.sorted_parameters() {
        if parameter.description.is_empty() {
            println!("  - {} (SI: {})", parameter, parameter.get());
        } else {
            println!(
                "  - {} (SI: {}) {}",
                parameter,
                parameter.get(),
                parameter.description
            );
        }
    }

    Ok(())
}

fn export_substance(path: &str, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let (substance, report) = model::load_substance_from_file(path)?;
    eprint!("{}", report);

    let json = serde_json::to_string_pretty(&substance)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Substance exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
