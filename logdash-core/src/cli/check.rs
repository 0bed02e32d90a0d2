use crate::conf::{ConfigError, Overrides, RunSettings};
use std::path::PathBuf;

pub fn run_check(config: Option<PathBuf>) -> anyhow::Result<()> {
    let overrides = Overrides {
        config,
        ..Overrides::default()
    };

    let result = RunSettings::resolve(&overrides)
        .and_then(|settings| settings.sources().map(|sources| (settings, sources)));

    match result {
        Ok((settings, sources)) => {
            match &settings.config_file {
                Some(path) => println!("✔ Config loaded from {}", path.display()),
                None => println!("✔ No config file, using defaults"),
            }
            println!("✔ {} sources", sources.len());
            for source in &sources {
                println!("    {}", source.display());
            }
            println!("✔ output: {}", settings.output_dir.display());
            println!("✔ watch interval: {}s", settings.interval.as_secs());
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{err}");
    if let Some(hint) = err.hint() {
        eprintln!();
        eprintln!("{hint}");
    }
}
