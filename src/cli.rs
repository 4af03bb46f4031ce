use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use feedback_db_sqlite::Connections;

use crate::{config::Config, gateways};

#[derive(Debug, Parser)]
#[command(author, version, about = "Comments, ratings and contact messages for websites")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// SQLite database URL, takes precedence over all other settings
    #[arg(long, value_name = "URL")]
    db_url: Option<String>,

    /// Allow cross origin requests
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let enable_cors = args.enable_cors || cfg.webserver.enable_cors;

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    feedback_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let notify_gw = gateways::notification_gateway(&cfg.email)?;
    let web_cfg = feedback_webserver::Cfg {
        admin_token: cfg.webserver.admin_token,
        contact_recipient: cfg.contact.recipient,
    };
    feedback_webserver::run(connections, enable_cors, web_cfg, Box::new(notify_gw)).await;
    Ok(())
}
