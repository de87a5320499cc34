// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the device's REST endpoints.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::command::DeviceCommand;
use crate::error::{Error, ProtocolError};
use crate::protocol::CommandResponse;

// ============================================================================
// HttpConfig
// ============================================================================

/// Address and default timeout of the device.
///
/// The host may be given bare (`10.100.21.50`, `esp32.local:8080`) or with a
/// scheme (`http://10.100.21.50`), which is how mock servers report their
/// address.
///
/// # Examples
///
/// ```
/// use esp32_gateway::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("10.100.21.50");
/// assert_eq!(config.base_url(), "http://10.100.21.50");
///
/// let config = HttpConfig::new("esp32.local")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://esp32.local:8080");
///
/// let config = HttpConfig::new("http://127.0.0.1:40123/");
/// assert_eq!(config.base_url(), "http://127.0.0.1:40123");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Timeout for commands that do not set their own.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

    /// Creates a new configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        let (host, use_https) = if let Some(rest) = host.strip_prefix("https://") {
            (rest.to_string(), true)
        } else if let Some(rest) = host.strip_prefix("http://") {
            (rest.to_string(), false)
        } else {
            (host, false)
        };

        let (host, port) = split_port(host.trim_end_matches('/'));
        let port = port.unwrap_or(if use_https {
            Self::DEFAULT_HTTPS_PORT
        } else {
            Self::DEFAULT_PORT
        });

        Self {
            host: host.to_string(),
            port,
            use_https,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the default request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the default timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }

        let base_url = self.base_url();
        let client = Client::builder().build().map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            timeout: self.timeout,
        })
    }
}

/// Splits a trailing `:port` off a host name.
///
/// Bare IPv6 addresses have several colons and are left untouched.
fn split_port(host: &str) -> (&str, Option<u16>) {
    if let Some((name, port)) = host.rsplit_once(':')
        && !name.contains(':')
        && let Ok(port) = port.parse()
    {
        return (name, Some(port));
    }
    (host, None)
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client bound to one device.
///
/// Each command is a single GET with its own timeout; nothing is retried.
/// Cloning is cheap and shares the connection pool.
///
/// # Examples
///
/// ```no_run
/// use esp32_gateway::command::SensorCommand;
/// use esp32_gateway::protocol::HttpConfig;
///
/// # async fn example() -> esp32_gateway::Result<()> {
/// let client = HttpConfig::new("10.100.21.50").into_client()?;
/// let body = client.send_json(&SensorCommand::Temperature).await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout used for commands that do not set their own.
    #[must_use]
    pub fn default_timeout(&self) -> Duration {
        self.timeout
    }

    fn build_url<C: DeviceCommand + ?Sized>(&self, command: &C) -> String {
        format!("{}{}", self.base_url, command.to_request_path())
    }

    /// Sends a command and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on connection failure or timeout, and on a
    /// non-success status unless the command opts out of status checks.
    pub async fn send<C: DeviceCommand + Sync>(
        &self,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        let url = self.build_url(command);
        let timeout = command.timeout().unwrap_or(self.timeout);

        tracing::debug!(url = %url, timeout = ?timeout, "Sending device request");

        let response = self
            .client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        if !status.is_success() && command.checks_status() {
            return Err(ProtocolError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(status = status.as_u16(), body = %body, "Received device response");

        Ok(CommandResponse::new(body))
    }

    /// Sends a command and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails, or `Error::Parse` if
    /// the body is not JSON.
    pub async fn send_json<C: DeviceCommand + Sync>(&self, command: &C) -> Result<Value, Error> {
        let response = self.send(command).await?;
        Ok(response.parse()?)
    }
}
