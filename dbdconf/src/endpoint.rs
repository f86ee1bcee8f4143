//! Backend database endpoint parsing.
//!
//! The database relation advertises its reachable endpoints as a
//! comma-separated list. Each entry is either a Unix socket URL
//! (`file:///run/mysql.sock`) or a TCP `host:port` pair, with IPv6 hosts
//! bracketed (`[::1]:3306`). Socket endpoints are preferred when both
//! kinds are present; within a kind the first entry wins.

use std::fmt;

use crate::error::{Error, Result};

/// One parsed database endpoint.
///
/// The TCP port is kept as the exact digit string from the relation data
/// so it flows into the `StoragePort` setter unmodified.
///
/// # Examples
///
/// ```
/// use dbdconf::endpoint::Endpoint;
///
/// let ep = Endpoint::parse("[::1]:3306").unwrap();
/// assert_eq!(ep, Endpoint::Tcp { host: "::1".into(), port: "3306".into() });
///
/// let ep = Endpoint::parse("file:///run/mysql.sock").unwrap();
/// assert_eq!(ep, Endpoint::Socket("/run/mysql.sock".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A local Unix socket path (the `file://` scheme stripped).
    Socket(String),
    /// A TCP endpoint, brackets already stripped from IPv6 hosts.
    Tcp {
        /// The host name or address.
        host: String,
        /// The port, kept as its original digit string.
        port: String,
    },
}

impl Endpoint {
    /// Parse a single endpoint string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] for an empty string or a TCP
    /// entry without a `:port` suffix.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidEndpoint {
                endpoint: raw.to_string(),
                reason: "empty endpoint".to_string(),
            });
        }

        if let Some(path) = trimmed.strip_prefix("file://") {
            return Ok(Self::Socket(path.to_string()));
        }

        let Some((host, port)) = trimmed.rsplit_once(':') else {
            return Err(Error::InvalidEndpoint {
                endpoint: raw.to_string(),
                reason: "missing ':port' suffix".to_string(),
            });
        };

        // IPv6 addresses arrive bracketed.
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        Ok(Self::Tcp {
            host: host.to_string(),
            port: port.to_string(),
        })
    }

    /// Whether this endpoint is a Unix socket.
    #[must_use]
    pub fn is_socket(&self) -> bool {
        matches!(self, Self::Socket(_))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Socket(path) => f.write_str(path),
            Self::Tcp { host, port } if host.contains(':') => write!(f, "[{host}]:{port}"),
            Self::Tcp { host, port } => write!(f, "{host}:{port}"),
        }
    }
}

/// Select the endpoint to configure from a comma-separated list.
///
/// Socket endpoints are preferred over TCP ones; within each class the
/// first entry wins and any extras are logged and ignored. Blank entries
/// are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidEndpoint`] if the list contains no usable
/// endpoint, or propagates the parse error of a malformed entry.
///
/// # Examples
///
/// ```
/// use dbdconf::endpoint::{preferred_endpoint, Endpoint};
///
/// let ep = preferred_endpoint("10.0.0.5:3306,file:///run/mysql.sock").unwrap();
/// assert!(ep.is_socket());
/// ```
pub fn preferred_endpoint(endpoints: &str) -> Result<Endpoint> {
    let mut sockets: Vec<Endpoint> = Vec::new();
    let mut tcp: Vec<Endpoint> = Vec::new();

    for entry in endpoints.split(',') {
        if entry.trim().is_empty() {
            continue;
        }
        match Endpoint::parse(entry)? {
            socket @ Endpoint::Socket(_) => sockets.push(socket),
            endpoint => tcp.push(endpoint),
        }
    }

    if sockets.len() > 1 {
        log::warn!(
            "{} socket endpoints specified, but only the first one will be used",
            sockets.len()
        );
    } else if sockets.is_empty() && tcp.len() > 1 {
        log::warn!(
            "{} tcp endpoints specified, but only the first one will be used",
            tcp.len()
        );
    }

    sockets
        .into_iter()
        .chain(tcp)
        .next()
        .ok_or_else(|| Error::InvalidEndpoint {
            endpoint: endpoints.to_string(),
            reason: "no usable endpoints".to_string(),
        })
}
