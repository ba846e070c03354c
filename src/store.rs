//! An HTTP client for the Vanity server, the authoritative store of split test assignments.
use reqwest::{StatusCode, Url};

use crate::{
    models::{AssignRequest, AssignResponse, ParticipantResponse, SplitStats},
    Activity, Error, Result,
};

/// Result of an assign request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AssignOutcome {
    /// Store accepted the request. Holds the alternative from the response body, if any.
    Accepted(Option<u32>),
    /// Store already had a different alternative for the participant.
    Conflict(u32),
}

pub(crate) struct StoreClient {
    // Client holds a connection pool internally, so we're reusing the client between requests.
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl StoreClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<StoreClient> {
        let base_url = Url::parse(base_url).map_err(Error::InvalidBaseUrl)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        Ok(StoreClient {
            client: reqwest::Client::new(),
            base_url,
            token: token.into(),
        })
    }

    /// Build a URL by appending percent-encoded path segments to the base URL.
    fn url<'s>(&self, segments: impl IntoIterator<Item = &'s str>) -> Url {
        let mut url = self.base_url.clone();
        // new() rejects base URLs without a path, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `PUT /v1/split/{split_test}/{participant}`
    pub async fn assign(
        &self,
        split_test: &str,
        participant: &str,
        request: &AssignRequest,
    ) -> Result<AssignOutcome> {
        let url = self.url(["v1", "split", split_test, participant]);
        log::debug!(target: "vanity",
                    split_test,
                    participant,
                    alternative = request.alternative;
                    "sending assignment");

        let response = self
            .client
            .put(url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(network_error)?;

        if response.status() == StatusCode::CONFLICT {
            let body = response.bytes().await?;
            let stored: AssignResponse = serde_json::from_slice(&body)?;
            log::debug!(target: "vanity",
                        split_test,
                        participant,
                        alternative = stored.alternative;
                        "server reported conflicting assignment");
            return Ok(AssignOutcome::Conflict(stored.alternative));
        }

        let response = error_for_status(response).await?;
        let body = response.bytes().await?;
        // The body is optional on success. Without one, the alternative sent is the one stored.
        let stored = if body.is_empty() {
            None
        } else {
            let stored: AssignResponse = serde_json::from_slice(&body)?;
            Some(stored.alternative)
        };

        log::debug!(target: "vanity", split_test, participant; "assignment accepted");
        Ok(AssignOutcome::Accepted(stored))
    }

    /// `GET /v1/split/{split_test}/{participant}`
    ///
    /// Returns `None` if the server doesn't know the participant.
    pub async fn fetch_participant(
        &self,
        split_test: &str,
        participant: &str,
    ) -> Result<Option<ParticipantResponse>> {
        let url = self.url(["v1", "split", split_test, participant]);
        log::debug!(target: "vanity", split_test, participant; "fetching participant");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(network_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = error_for_status(response).await?;
        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// `GET /v1/split/{split_test}`
    pub async fn fetch_stats(&self, split_test: &str) -> Result<SplitStats> {
        let url = self.url(["v1", "split", split_test]);
        log::debug!(target: "vanity", split_test; "fetching split test stats");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(network_error)?;
        let response = error_for_status(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// `POST /v1/activity`
    pub async fn post_activity(&self, activity: &Activity) -> Result<()> {
        let url = self.url(["v1", "activity"]);
        log::debug!(target: "vanity", verb = activity.verb.as_str(); "posting activity");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(activity)
            .send()
            .await
            .map_err(network_error)?;
        error_for_status(response).await?;
        Ok(())
    }
}

fn network_error(err: reqwest::Error) -> Error {
    log::warn!(target: "vanity", "error while reaching the server: {:?}", err);
    Error::from(err)
}

/// Turn a 4xx/5xx response into [`Error::Server`], keeping the body for diagnostics.
async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED {
        log::warn!(target: "vanity", "client is not authorized. Check your token");
    }

    let body = response.text().await.unwrap_or_default();
    log::warn!(target: "vanity", status = status.as_u16(); "server returned error: {}", body);
    Err(Error::Server {
        status: status.as_u16(),
        body,
    })
}
