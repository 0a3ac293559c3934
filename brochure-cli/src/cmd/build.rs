use anyhow::Result;
use brochure_core::build_site;
use clap::{Arg, ArgMatches, Command};

use crate::config::load_build_config;

pub fn add_build_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Site configuration file")
                .default_value("./brochure.toml"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for the generated site")
                .default_value("./out"),
        )
}

pub fn make_subcommand() -> Command {
    add_build_args(Command::new("build"))
        .about("Build the site archive and write it to the output directory")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = load_build_config(args)?;
    let build_config = config.build_config();

    let archive = build_site(config.site_config())?;
    archive.write_to_dir(&build_config.output)?;

    println!(
        "Site built successfully: {} files in {}",
        archive.len(),
        build_config.output
    );

    Ok(())
}
