use std::{
    collections::HashMap,
    future::Future,
    sync::{Arc, Mutex, OnceLock},
};

use regex::Regex;

use crate::{
    notification::{Notification, NotificationHandler},
    store::StoreClient,
    Activity, ClientConfig, Error, Result, SplitTest,
};

/// A client for the Vanity server.
///
/// In order to create a client instance, first create [`ClientConfig`].
///
/// # Examples
/// ```
/// # use vanity::{ClientConfig, Notification};
/// let client = ClientConfig::from_host("vanity.internal:443", "secret token")
///     .to_client(|notification: Notification| eprintln!("{:?}", notification))
///     .unwrap();
/// let signup = client.split("signup").unwrap();
/// ```
pub struct Client {
    connection: Arc<Connection>,
    splits: Mutex<HashMap<String, SplitTest>>,
}

/// State shared by the client and all its split tests.
pub(crate) struct Connection {
    /// `None` when disconnected.
    store: Option<StoreClient>,
    runtime: Option<tokio::runtime::Handle>,
    notifications: Box<dyn NotificationHandler + Send + Sync>,
}

impl Client {
    /// Number of alternatives of split tests created with [`Client::split`].
    pub const DEFAULT_ALTERNATIVES: u32 = 2;

    /// Create a new `Client` using the specified configuration.
    ///
    /// Errors and conflicts of fire-and-forget requests go to `notifications`. Pass
    /// [`NoopNotificationHandler`](crate::NoopNotificationHandler) to explicitly ignore them.
    pub fn new(
        config: ClientConfig,
        notifications: impl NotificationHandler + Send + Sync + 'static,
    ) -> Result<Self> {
        let store = if config.is_connected() {
            let ClientConfig {
                base_url, token, ..
            } = &config;
            Some(StoreClient::new(
                base_url.as_deref().unwrap_or_default(),
                token.clone().unwrap_or_default(),
            )?)
        } else {
            log::debug!(target: "vanity", "no base_url or token configured, running disconnected");
            None
        };

        Ok(Client {
            connection: Arc::new(Connection {
                store,
                runtime: config.runtime,
                notifications: Box::new(notifications),
            }),
            splits: Mutex::new(HashMap::new()),
        })
    }

    /// Whether this client talks to a server.
    pub fn is_connected(&self) -> bool {
        self.connection.store.is_some()
    }

    /// Get the split test `id`, creating it with two alternatives if this client hasn't seen it
    /// yet.
    ///
    /// Identifiers may only contain alphanumeric, underscore and hyphen.
    pub fn split(&self, id: &str) -> Result<SplitTest> {
        self.get_or_create(id, None)
    }

    /// Get the split test `id`, creating it with `alternatives` alternatives if this client
    /// hasn't seen it yet.
    ///
    /// Fails if the split test already exists with a different number of alternatives.
    pub fn split_with_alternatives(&self, id: &str, alternatives: u32) -> Result<SplitTest> {
        self.get_or_create(id, Some(alternatives))
    }

    fn get_or_create(&self, id: &str, alternatives: Option<u32>) -> Result<SplitTest> {
        let mut splits = self
            .splits
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(split) = splits.get(id) {
            return match alternatives {
                Some(requested) if requested != split.alternatives() => {
                    Err(Error::AlternativeCountMismatch {
                        id: id.to_owned(),
                        existing: split.alternatives(),
                        requested,
                    })
                }
                _ => Ok(split.clone()),
            };
        }

        if !split_test_id_pattern().is_match(id) {
            return Err(Error::InvalidSplitTestId(id.to_owned()));
        }
        let alternatives = alternatives.unwrap_or(Self::DEFAULT_ALTERNATIVES);
        if alternatives < 2 {
            return Err(Error::TooFewAlternatives(alternatives));
        }

        log::debug!(target: "vanity", split_test = id, alternatives; "created split test");
        let split = SplitTest::new(id.to_owned(), alternatives, Arc::clone(&self.connection));
        splits.insert(id.to_owned(), split.clone());
        Ok(split)
    }

    /// Add activity to the activity stream, without waiting for the server.
    ///
    /// Failures go to the notification handler. Does nothing when disconnected.
    ///
    /// ```no_run
    /// # use vanity::{Activity, Client};
    /// # fn example(client: &Client) {
    /// client.activity(Activity::new("Assaf", "shared").object("http://bit.ly/GLUa9S"));
    /// # }
    /// ```
    pub fn activity(&self, activity: Activity) {
        if self.connection.store.is_none() {
            return;
        }

        let connection = Arc::clone(&self.connection);
        self.connection.spawn(async move {
            if let Some(store) = connection.store() {
                if let Err(err) = store.post_activity(&activity).await {
                    connection.notify(Notification::Error(err));
                }
            }
        });
    }

    /// Add activity to the activity stream and wait for the server to accept it.
    pub async fn post_activity(&self, activity: Activity) -> Result<()> {
        match self.connection.store() {
            Some(store) => store.post_activity(&activity).await,
            None => Ok(()),
        }
    }
}

impl Connection {
    pub fn store(&self) -> Option<&StoreClient> {
        self.store.as_ref()
    }

    /// Failures are already logged where they happen.
    pub fn notify(&self, notification: Notification) {
        self.notifications.notify(notification);
    }

    /// Run `task` on the configured runtime, or the current one.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = match &self.runtime {
            Some(handle) => handle.clone(),
            None => match tokio::runtime::Handle::try_current() {
                Ok(handle) => handle,
                Err(_) => {
                    log::warn!(target: "vanity", "no tokio runtime, request not sent");
                    self.notify(Notification::Error(Error::NoRuntime));
                    return;
                }
            },
        };
        // Nobody waits for the task. Its outcome is reported through notifications.
        drop(handle.spawn(task));
    }
}

fn split_test_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_-]+$").expect("split test id pattern should always compile")
    })
}
