use clap::{Parser, Subcommand};
use issue_form::{Checklist, FormConfig, FormGenerator, FormSnapshot, LogoCatalog, PipelineError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Generates the two-page equipment issue record from a form snapshot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON configuration file; built-in defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the selectable PNG logos
    #[arg(long, global = true)]
    logos: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a snapshot to PDF
    Render {
        snapshot: PathBuf,
        /// Directory the derived file name is written into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Exact output path, overriding the derived file name
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Logo file name, overriding the snapshot's selection
        #[arg(long)]
        logo: Option<String>,
    },
    /// List the available logos
    Logos,
    /// Print the file name a snapshot would be exported under
    Filename { snapshot: PathBuf },
    /// Print the completeness checklist for a snapshot
    Checklist { snapshot: PathBuf },
}

fn load_config(args: &Args) -> Result<FormConfig, PipelineError> {
    let mut config = match &args.config {
        Some(path) => FormConfig::from_file(path)?,
        None => FormConfig::default(),
    };
    if let Some(dir) = &args.logos {
        config.logos_dir = dir.clone();
    }
    Ok(config)
}

fn load_snapshot(path: &Path) -> Result<FormSnapshot, PipelineError> {
    let json = fs::read_to_string(path)?;
    FormSnapshot::from_json_str(&json)
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "issue_form=info");
        }
    }
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;

    match &args.command {
        Command::Render {
            snapshot,
            out_dir,
            output,
            logo,
        } => {
            let mut snapshot = load_snapshot(snapshot)?;
            if let Some(logo) = logo {
                snapshot.selected_logo = logo.clone();
            }
            let generator = FormGenerator::new(config)?;
            let form = generator.generate(&snapshot)?;

            let path = match output {
                Some(path) => path.clone(),
                None => {
                    fs::create_dir_all(out_dir)?;
                    out_dir.join(&form.filename)
                }
            };
            fs::write(&path, &form.bytes)?;

            if let Some(err) = &form.report.logo_error {
                eprintln!("Logo could not be drawn: {}", err);
            }
            if form.report.extra_accounts_dropped > 0 {
                eprintln!(
                    "{} extra account row(s) did not fit on the credentials page",
                    form.report.extra_accounts_dropped
                );
            }
            println!("{}", path.display());
        }
        Command::Logos => {
            let catalog = LogoCatalog::from_dir(&config.logos_dir, config.default_logo.clone());
            let default = catalog.default_selection();
            for name in catalog.available() {
                let marker = if Some(&name) == default.as_ref() { "*" } else { " " };
                println!("{} {}", marker, name);
            }
        }
        Command::Filename { snapshot } => {
            println!("{}", issue_form::export_filename(&load_snapshot(snapshot)?));
        }
        Command::Checklist { snapshot } => {
            let checklist = Checklist::for_snapshot(&load_snapshot(snapshot)?);
            print!("{}", checklist);
        }
    }
    Ok(())
}
