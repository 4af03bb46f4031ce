use anyhow::{anyhow, Result};
use feedback_entities::email::EmailAddress;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "feedback.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const DEFAULT_MAILGUN_API_URL: &str = "https://api.eu.mailgun.net/v3";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub contact: Contact,
    pub email: Email,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub admin_token: Option<String>,
}

pub struct Contact {
    pub recipient: Option<EmailAddress>,
}

pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Debug, Clone)]
pub enum EmailGateway {
    MailGun {
        api_url: String,
        api_key: String,
        domain: String,
        sender_address: EmailAddress,
    },
    Sendmail {
        sender_address: EmailAddress,
    },
    /// For local testing purposes
    EmailToJsonFile {
        /// File system directory for writing emails into JSON files.
        dir: PathBuf,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            contact,
            email,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The database connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors, admin_token } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            admin_token: admin_token.filter(|token| !token.trim().is_empty()),
        };

        let raw::Contact { recipient } = contact.unwrap_or_default();
        let recipient = recipient
            .filter(|r| !r.trim().is_empty())
            .map(|r| r.parse::<EmailAddress>())
            .transpose()
            .map_err(|err| anyhow!("Invalid contact recipient: {err}"))?;
        let contact = Contact { recipient };

        let email_gateway = match email.and_then(|m| m.gateway) {
            Some(gw_name) => {
                let toml_name = gw_name.name();
                let gateway = gateway.unwrap_or_default();
                let missing_cfg = || anyhow!("Missing {toml_name} gateway configuration");

                let gw = match gw_name {
                    raw::EmailGateway::Mailgun => {
                        let raw::MailGun {
                            api_key,
                            api_url,
                            domain,
                            sender_address,
                        } = gateway.mailgun.ok_or_else(missing_cfg)?;
                        let sender_address = sender_address.parse()?;
                        let api_url =
                            api_url.unwrap_or_else(|| DEFAULT_MAILGUN_API_URL.to_string());
                        EmailGateway::MailGun {
                            api_url,
                            api_key,
                            domain,
                            sender_address,
                        }
                    }
                    raw::EmailGateway::Sendmail => {
                        let raw::Sendmail { sender_address } =
                            gateway.sendmail.ok_or_else(missing_cfg)?;
                        let sender_address = sender_address.parse()?;
                        EmailGateway::Sendmail { sender_address }
                    }
                    raw::EmailGateway::EmailToJsonFile => {
                        let raw::EmailToJsonFile { dir } =
                            gateway.email_to_json_file.ok_or_else(missing_cfg)?;
                        EmailGateway::EmailToJsonFile { dir }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let email = Email {
            gateway: email_gateway,
        };

        Ok(Self {
            db,
            webserver,
            contact,
            email,
        })
    }
}
