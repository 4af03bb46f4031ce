use std::sync::Arc;

use feedback_core::gateways::notify::NotificationGateway;
use feedback_db_sqlite::Connections;
use feedback_entities::email::EmailAddress;
use rocket::{config::Config as RocketCfg, Catcher, Rocket, Route};

pub mod api;
mod guards;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// Bearer token for replying, deleting and resetting.
    ///
    /// Administrative requests are not restricted if no token is configured.
    pub admin_token: Option<String>,
    /// The operator mailbox that receives contact messages
    pub contact_recipient: Option<EmailAddress>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    notify: Box<dyn NotificationGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { notify } = gateways;

    if cfg.admin_token.is_none() {
        warn!("No admin token configured: administrative requests are not restricted");
    }
    if cfg.contact_recipient.is_none() {
        warn!("No contact recipient configured: contact messages can't be delivered");
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let notify_gw = guards::Notify(Arc::from(notify));

    let mut instance = r
        .manage(db)
        .manage(notify_gw)
        .manage(cfg)
        .register("/", catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

fn catchers() -> Vec<Catcher> {
    api::catchers()
}

pub async fn run(
    db: Connections,
    enable_cors: bool,
    cfg: Cfg,
    notify: Box<dyn NotificationGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { notify };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                log::error!("Invalid CORS options: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
