use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use xs2a_model::config::Settings;
use xs2a_model::{format_error_payload, logging, patterns, Codec, ModelError, ServiceType};

const USAGE: &str = "\
xs2a-model - XS2A data model diagnostics

USAGE:
    xs2a-model [--config <file>] <command>

COMMANDS:
    validate <Type> <file|-> [--tpp] [--service ais|pis|piis|sbs]
    describe <Type>
    catalog [--csv]
    fingerprint
";

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let config_path = take_option(&mut args, "--config")?;
    let settings = Settings::load(config_path.as_deref().map(Path::new))?;
    logging::init(&settings.logging)?;

    let codec = Codec::new(settings.validation);

    match args.first().map(String::as_str) {
        Some("validate") => {
            let mut rest = args[1..].to_vec();
            run_validate(&codec, &mut rest)
        }
        Some("describe") => run_describe(&codec, &args[1..]),
        Some("catalog") => run_catalog(&codec, &args[1..]),
        Some("fingerprint") => run_fingerprint(&codec),
        Some("--version") | Some("version") => {
            println!("xs2a-model {}", xs2a_model::VERSION);
            Ok(())
        }
        Some(other) if other != "help" && other != "--help" => {
            eprint!("Unknown command: {}\n\n{}", other, USAGE);
            process::exit(2);
        }
        _ => {
            print!("{}", USAGE);
            Ok(())
        }
    }
}

/// Removes `--name <value>` from the argument list.
fn take_option(args: &mut Vec<String>, name: &str) -> Result<Option<String>> {
    let Some(index) = args.iter().position(|a| a == name) else {
        return Ok(None);
    };
    if index + 1 >= args.len() {
        bail!("{} needs a value", name);
    }
    let value = args.remove(index + 1);
    args.remove(index);
    Ok(Some(value))
}

/// Removes a bare `--name` flag, reporting whether it was present.
fn take_flag(args: &mut Vec<String>, name: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != name);
    args.len() != before
}

fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read payload from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
    }
}

fn run_validate(codec: &Codec, args: &mut Vec<String>) -> Result<()> {
    let tpp = take_flag(args, "--tpp");
    let service = match take_option(args, "--service")? {
        Some(name) => match ServiceType::from_name(&name) {
            Some(service) => service,
            None => bail!("Unknown service '{}' (expected ais, pis, piis or sbs)", name),
        },
        None => ServiceType::Pis,
    };

    let [type_name, source] = args.as_slice() else {
        bail!("validate needs <Type> <file|->\n\n{}", USAGE);
    };

    let payload = read_input(source)?;
    match codec.validate_json(type_name, &payload) {
        Ok(()) => {
            println!("✓ {} is valid", type_name);
            Ok(())
        }
        Err(ModelError::Invalid { errors, .. }) => {
            if tpp {
                let body = format_error_payload(service, &errors)?;
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("✗ {} violation(s) in {}", errors.len(), type_name);
                for error in &errors {
                    println!("  {}: {}", error.path, error.message);
                }
            }
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn run_describe(codec: &Codec, args: &[String]) -> Result<()> {
    let Some(type_name) = args.first() else {
        bail!("describe needs <Type>\n\n{}", USAGE);
    };
    let Some(entry) = codec.registry().get(type_name) else {
        bail!("Unknown type: {}", type_name);
    };

    println!("{}", entry.name);
    for spec in entry.fields() {
        println!(
            "  {:<40} {:<45} {}",
            spec.wire_name,
            spec.kind.label(),
            spec.describe_rules()
        );
    }
    Ok(())
}

fn run_catalog(codec: &Codec, args: &[String]) -> Result<()> {
    let registry = codec.registry();

    if args.iter().any(|a| a == "--csv") {
        registry.write_csv(io::stdout().lock())?;
        return Ok(());
    }

    for name in registry.names() {
        let fields = registry.get(name).map_or(0, |entry| entry.fields().len());
        println!("{:<60} {:>3} fields", name, fields);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{} schemas", registry.count());

    println!("\nPatterns:");
    for pattern in patterns::all() {
        println!("  {:<20} {}", pattern.name(), pattern.source());
    }
    Ok(())
}

fn run_fingerprint(codec: &Codec) -> Result<()> {
    println!("{}", codec.registry().fingerprint()?);
    Ok(())
}
