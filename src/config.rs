use crate::{Client, NotificationHandler, Result};

/// Configuration for [`Client`].
///
/// Configuration is fixed once the client is created. To connect elsewhere, create another
/// client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub(crate) base_url: Option<String>,
    pub(crate) token: Option<String>,
    pub(crate) runtime: Option<tokio::runtime::Handle>,
}

impl ClientConfig {
    /// Connect to the Vanity server at `base_url`, authenticating with `token`.
    ///
    /// ```
    /// # use vanity::ClientConfig;
    /// ClientConfig::new("https://vanity.internal", "secret token");
    /// ```
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        ClientConfig {
            base_url: Some(base_url.into()),
            token: Some(token.into()),
            runtime: None,
        }
    }

    /// Connect over plain HTTP to `host`, which may include a port (e.g. `vanity.internal:443`).
    pub fn from_host(host: &str, token: impl Into<String>) -> Self {
        ClientConfig::new(format!("http://{}", host), token)
    }

    /// A client that never talks to a server.
    ///
    /// All requests resolve locally: `show` returns the hashed (or forced) alternative,
    /// `completed` and `activity` do nothing, `get` returns `None` and `stats` fails with
    /// [`Error::Disconnected`](crate::Error::Disconnected). Handy in development and tests.
    pub fn disconnected() -> Self {
        ClientConfig::default()
    }

    /// Run fire-and-forget requests on this runtime instead of the one current at call time.
    pub fn runtime(&mut self, handle: tokio::runtime::Handle) -> &mut Self {
        self.runtime = Some(handle);
        self
    }

    /// Whether a client built from this configuration will talk to a server.
    pub fn is_connected(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        present(&self.base_url) && present(&self.token)
    }

    /// Create a new [`Client`] using the specified configuration.
    ///
    /// ```
    /// # use vanity::{Client, ClientConfig, NoopNotificationHandler};
    /// let client: Client = ClientConfig::disconnected()
    ///     .to_client(NoopNotificationHandler)
    ///     .unwrap();
    /// ```
    pub fn to_client(
        self,
        notifications: impl NotificationHandler + Send + Sync + 'static,
    ) -> Result<Client> {
        Client::new(self, notifications)
    }
}
