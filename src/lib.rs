//! A Rust client for Vanity, a split testing (A/B testing) service.
//!
//! # Overview
//!
//! The client revolves around [`Client`], which hands out [`SplitTest`]s by identifier. A split
//! test decides which alternative to show a participant and records when that participant
//! completes the test:
//!
//! ```
//! # use vanity::{ClientConfig, CompletedRequest, NoopNotificationHandler, ShowRequest};
//! let client = ClientConfig::disconnected()
//!     .to_client(NoopNotificationHandler)
//!     .unwrap();
//! let signup = client.split("signup").unwrap();
//!
//! let alternative = signup.show(ShowRequest::new("user-1")).unwrap();
//! // ... later, when user-1 signs up:
//! signup.completed(CompletedRequest::new("user-1")).unwrap();
//! ```
//!
//! Alternatives are picked by hashing the participant identifier, so the same participant gets the
//! same alternative without any network round trip. The Vanity server stores the first alternative
//! it sees for each participant and reports a conflict if a client later asks for another one. The
//! client adopts the server's value, so a participant never flips between alternatives.
//!
//! A client without base URL or token is disconnected: everything resolves locally and nothing
//! is sent.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum.
//!
//! Invalid arguments fail right away. Fire-and-forget requests ([`SplitTest::show`],
//! [`SplitTest::completed`], [`Client::activity`]) report network and server errors to the
//! [`NotificationHandler`] given when creating the client, along with conflicts. Confirmed
//! requests return them instead.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate for logging
//! messages, under the `vanity` target. Consider integrating a `log`-compatible logger
//! implementation for better visibility into client operations.
//!
//! # Examples
//!
//! Examples can be found in the `demos` directory of the crate repository.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod activity;
mod assignment_cache;
mod client;
mod config;
mod error;
mod models;
mod notification;
mod participant;
mod sharder;
mod store;

pub use activity::{Activity, ActivityObject, Actor, Image};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::{AlternativeStats, Outcome, ParticipantRecord, SplitStats};
pub use notification::{ConflictEvent, NoopNotificationHandler, Notification, NotificationHandler};
pub use participant::ParticipantId;
pub use sharder::{bucket, string_hash};
pub use split_test::{Assignment, CompletedRequest, ShowRequest, SplitTest};
