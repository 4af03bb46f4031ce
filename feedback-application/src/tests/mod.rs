pub mod prelude {
    use std::sync::Mutex;

    pub use feedback_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub(crate) use crate::sqlite;

    #[derive(Default)]
    pub struct DummyNotifyGW {
        sent: Mutex<Vec<(EmailAddress, ContactMessage)>>,
    }

    impl DummyNotifyGW {
        pub fn sent(&self) -> Vec<(EmailAddress, ContactMessage)> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl feedback_core::gateways::notify::NotificationGateway for DummyNotifyGW {
        fn notify(
            &self,
            event: feedback_core::gateways::notify::NotificationEvent<'_>,
        ) -> anyhow::Result<()> {
            use feedback_core::gateways::notify::NotificationEvent as E;
            let E::ContactMessageReceived { recipient, message } = event;
            self.sent
                .lock()
                .unwrap()
                .push((recipient.clone(), message.clone()));
            Ok(())
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: DummyNotifyGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            feedback_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                notify: DummyNotifyGW::default(),
            }
        }

        pub fn create_comment(&self, page_id: &str) -> String {
            flows::create_comment(
                &self.db_connections,
                usecases::NewComment {
                    name: "Mallory".into(),
                    message: "A comment".into(),
                    page_id: page_id.into(),
                },
            )
            .unwrap()
            .id
            .into()
        }

        pub fn create_rating(&self, page_id: &str, value: f64) -> String {
            flows::create_rating(
                &self.db_connections,
                usecases::NewRating {
                    name: "Mallory".into(),
                    value: Some(value),
                    page_id: page_id.into(),
                },
            )
            .unwrap()
            .id
            .into()
        }

        pub fn count_comments(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_comments()
                .unwrap()
        }
    }
}
