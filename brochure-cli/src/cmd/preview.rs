use anyhow::Result;
use axum::Router;
use brochure_core::{SiteConfig, build_site};
use clap::{Arg, ArgMatches, Command};
use notify_debouncer_mini::{DebounceEventResult, new_debouncer};
use std::{path::PathBuf, time::Duration};
use tower_http::services::ServeDir;

use crate::config::load_preview_config;

pub fn make_subcommand() -> Command {
    super::build::add_build_args(Command::new("preview"))
        .about("Build the site and serve it locally, rebuilding when the config changes")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to serve on")
                .default_value("3000"),
        )
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Host to bind to")
                .default_value("127.0.0.1"),
        )
        .arg(
            Arg::new("open")
                .long("open")
                .help("Open browser automatically")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = load_preview_config(args)?;
    let build_config = config.build_config();

    let output_dir = PathBuf::from(&build_config.output);
    let config_file = PathBuf::from(&build_config.config);
    let host = build_config.host.clone();
    let port = build_config.port;
    let open = build_config.open;

    let archive = build_site(config.site_config())?;
    archive.write_to_dir(&output_dir)?;
    println!(
        "Site built successfully: {} files in {}",
        archive.len(),
        output_dir.display()
    );

    let addr = format!("{host}:{port}");
    let url = format!("http://{addr}");

    let serve_dir = output_dir.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = serve_output(serve_dir, addr).await {
            eprintln!("Preview server error: {}", e);
        }
    });

    println!("Previewing at {url}");
    if open {
        let _ = open::that(&url);
    }

    let watcher_handle = tokio::spawn(async move {
        if let Err(e) = watch_config(config_file, output_dir).await {
            eprintln!("Config watcher error: {}", e);
        }
    });

    // Wait for both tasks
    let _ = tokio::try_join!(server_handle, watcher_handle)?;

    Ok(())
}

async fn serve_output(dir: PathBuf, addr: String) -> Result<()> {
    let app = Router::new().fallback_service(ServeDir::new(dir));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch the site config file and rebuild the whole archive on any change.
/// A full rebuild is cheap and idempotent, so there is nothing incremental
/// to get wrong.
async fn watch_config(config_file: PathBuf, output_dir: PathBuf) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |res: DebounceEventResult| {
            if let Ok(events) = res {
                for event in events {
                    let _ = tx.blocking_send(event.path);
                }
            }
        },
    )?;

    if config_file.exists() {
        debouncer
            .watcher()
            .watch(&config_file, notify::RecursiveMode::NonRecursive)?;
        println!("Watching config file: {}", config_file.display());
    } else {
        println!(
            "Config file {} not found; serving the last build only",
            config_file.display()
        );
    }

    while let Some(_path) = rx.recv().await {
        match SiteConfig::read(&config_file) {
            Ok(site) => match build_site(&site) {
                Ok(archive) => match archive.write_to_dir(&output_dir) {
                    Ok(()) => println!("Site rebuilt successfully"),
                    Err(e) => eprintln!("Write error: {}", e),
                },
                Err(e) => eprintln!("Build error: {}", e),
            },
            Err(e) => eprintln!("Config error: {}", e),
        }
    }

    Ok(())
}
