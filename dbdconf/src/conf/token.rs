//! The closed vocabulary of recognized configuration keys.
//!
//! Every key that may appear in the accounting daemon's configuration file
//! is a member of [`ConfigToken`]; anything else is rejected at parse time.
//! Each token carries a [`ValueKind`] that selects the validator applied on
//! set and the string conversion applied by the typed accessors, so the
//! per-key rules live in one dispatch table instead of one hand-written
//! accessor per key.

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Allowed values for `DebugLevel` and `DebugLevelSyslog`.
pub const DEBUG_LEVELS: &[&str] = &[
    "quiet", "fatal", "error", "info", "verbose", "debug", "debug2", "debug3", "debug4", "debug5",
];

/// Allowed values for `LogTimeFormat`.
pub const LOG_TIME_FORMATS: &[&str] = &[
    "iso8601",
    "iso8601_ms",
    "rfc5424",
    "rfc5424_ms",
    "clock",
    "short",
];

/// Allowed elements of the `DebugFlags` list.
pub const DEBUG_FLAGS: &[&str] = &[
    "DB_ARCHIVE",
    "DB_ASSOC",
    "DB_EVENT",
    "DB_JOB",
    "DB_QOS",
    "DB_QUERY",
    "DB_RESERVATION",
    "DB_RESOURCE",
    "DB_STEP",
    "DB_TRES",
    "DB_USAGE",
    "DB_WCKEY",
    "FEDERATION",
];

/// Allowed elements of the `PrivateData` list.
pub const PRIVATE_DATA: &[&str] = &[
    "accounts",
    "events",
    "jobs",
    "reservations",
    "usage",
    "users",
];

/// Allowed values for `AuthType`.
pub const AUTH_TYPES: &[&str] = &["auth/munge"];

/// Allowed values for `StorageType`.
pub const STORAGE_TYPES: &[&str] = &["accounting_storage/mysql"];

/// A recognized configuration key.
///
/// Identity is the exact key string used in the on-disk format; [`lookup`]
/// is case-sensitive. The variant order matches the daemon's manual page
/// and is not otherwise significant.
///
/// # Examples
///
/// ```
/// use dbdconf::conf::{lookup, ConfigToken};
///
/// assert_eq!(lookup("DbdPort").unwrap(), ConfigToken::DbdPort);
/// assert!(lookup("dbdport").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)] // variant names are the documented on-disk spellings
pub enum ConfigToken {
    ArchiveDir,
    ArchiveEvents,
    ArchiveJobs,
    ArchiveResvs,
    ArchiveScript,
    ArchiveSteps,
    ArchiveSuspend,
    ArchiveTXN,
    ArchiveUsage,
    AuthInfo,
    AuthAltTypes,
    AuthAltParameters,
    AuthType,
    CommitDelay,
    CommunicationParameters,
    DbdBackupHost,
    DbdAddr,
    DbdHost,
    DbdPort,
    DebugFlags,
    DebugLevel,
    DebugLevelSyslog,
    DefaultQOS,
    LogFile,
    LogTimeFormat,
    MaxQueryTimeRange,
    MessageTimeout,
    Parameters,
    PidFile,
    PluginDir,
    PrivateData,
    PurgeEventAfter,
    PurgeJobAfter,
    PurgeResvAfter,
    PurgeStepAfter,
    PurgeSuspendAfter,
    PurgeTXNAfter,
    PurgeUsageAfter,
    SlurmUser,
    StorageHost,
    StorageBackupHost,
    StorageLoc,
    StorageParameters,
    StoragePass,
    StoragePort,
    StorageType,
    StorageUser,
    TCPTimeout,
    TrackSlurmctldDown,
    TrackWCKey,
}

/// All members of the vocabulary, in declaration order.
pub const ALL_TOKENS: &[ConfigToken] = &[
    ConfigToken::ArchiveDir,
    ConfigToken::ArchiveEvents,
    ConfigToken::ArchiveJobs,
    ConfigToken::ArchiveResvs,
    ConfigToken::ArchiveScript,
    ConfigToken::ArchiveSteps,
    ConfigToken::ArchiveSuspend,
    ConfigToken::ArchiveTXN,
    ConfigToken::ArchiveUsage,
    ConfigToken::AuthInfo,
    ConfigToken::AuthAltTypes,
    ConfigToken::AuthAltParameters,
    ConfigToken::AuthType,
    ConfigToken::CommitDelay,
    ConfigToken::CommunicationParameters,
    ConfigToken::DbdBackupHost,
    ConfigToken::DbdAddr,
    ConfigToken::DbdHost,
    ConfigToken::DbdPort,
    ConfigToken::DebugFlags,
    ConfigToken::DebugLevel,
    ConfigToken::DebugLevelSyslog,
    ConfigToken::DefaultQOS,
    ConfigToken::LogFile,
    ConfigToken::LogTimeFormat,
    ConfigToken::MaxQueryTimeRange,
    ConfigToken::MessageTimeout,
    ConfigToken::Parameters,
    ConfigToken::PidFile,
    ConfigToken::PluginDir,
    ConfigToken::PrivateData,
    ConfigToken::PurgeEventAfter,
    ConfigToken::PurgeJobAfter,
    ConfigToken::PurgeResvAfter,
    ConfigToken::PurgeStepAfter,
    ConfigToken::PurgeSuspendAfter,
    ConfigToken::PurgeTXNAfter,
    ConfigToken::PurgeUsageAfter,
    ConfigToken::SlurmUser,
    ConfigToken::StorageHost,
    ConfigToken::StorageBackupHost,
    ConfigToken::StorageLoc,
    ConfigToken::StorageParameters,
    ConfigToken::StoragePass,
    ConfigToken::StoragePort,
    ConfigToken::StorageType,
    ConfigToken::StorageUser,
    ConfigToken::TCPTimeout,
    ConfigToken::TrackSlurmctldDown,
    ConfigToken::TrackWCKey,
];

/// The semantic family a token's values belong to.
///
/// The kind determines which validator runs on set and how the typed
/// accessors convert between the stored string and its semantic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free-form text, stored verbatim.
    Text,
    /// `yes` or `no`.
    Bool,
    /// A decimal digit string, read back as an integer.
    Number,
    /// A 1-5 digit port number. Digit count is the only check; the numeric
    /// range is deliberately not enforced.
    Port,
    /// One member of a fixed keyword set.
    Keyword(&'static [&'static str]),
    /// A delimiter-joined list. Elements are individually checked against
    /// `allowed` when it is `Some`.
    List {
        /// The delimiter joining list elements on disk.
        delimiter: char,
        /// The permitted elements, or `None` for unchecked lists.
        allowed: Option<&'static [&'static str]>,
    },
    /// A comma-joined list of `key=value` pairs.
    Pairs,
    /// `<digits><unit>` where unit is `hour`, `day`, or `month`.
    Duration,
    /// A duration-range expression or the literal `INFINITE`.
    QueryRange,
    /// Free-form text that must not contain the comment marker `#`.
    Password,
}

impl ConfigToken {
    /// The exact key spelling used in the on-disk format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArchiveDir => "ArchiveDir",
            Self::ArchiveEvents => "ArchiveEvents",
            Self::ArchiveJobs => "ArchiveJobs",
            Self::ArchiveResvs => "ArchiveResvs",
            Self::ArchiveScript => "ArchiveScript",
            Self::ArchiveSteps => "ArchiveSteps",
            Self::ArchiveSuspend => "ArchiveSuspend",
            Self::ArchiveTXN => "ArchiveTXN",
            Self::ArchiveUsage => "ArchiveUsage",
            Self::AuthInfo => "AuthInfo",
            Self::AuthAltTypes => "AuthAltTypes",
            Self::AuthAltParameters => "AuthAltParameters",
            Self::AuthType => "AuthType",
            Self::CommitDelay => "CommitDelay",
            Self::CommunicationParameters => "CommunicationParameters",
            Self::DbdBackupHost => "DbdBackupHost",
            Self::DbdAddr => "DbdAddr",
            Self::DbdHost => "DbdHost",
            Self::DbdPort => "DbdPort",
            Self::DebugFlags => "DebugFlags",
            Self::DebugLevel => "DebugLevel",
            Self::DebugLevelSyslog => "DebugLevelSyslog",
            Self::DefaultQOS => "DefaultQOS",
            Self::LogFile => "LogFile",
            Self::LogTimeFormat => "LogTimeFormat",
            Self::MaxQueryTimeRange => "MaxQueryTimeRange",
            Self::MessageTimeout => "MessageTimeout",
            Self::Parameters => "Parameters",
            Self::PidFile => "PidFile",
            Self::PluginDir => "PluginDir",
            Self::PrivateData => "PrivateData",
            Self::PurgeEventAfter => "PurgeEventAfter",
            Self::PurgeJobAfter => "PurgeJobAfter",
            Self::PurgeResvAfter => "PurgeResvAfter",
            Self::PurgeStepAfter => "PurgeStepAfter",
            Self::PurgeSuspendAfter => "PurgeSuspendAfter",
            Self::PurgeTXNAfter => "PurgeTXNAfter",
            Self::PurgeUsageAfter => "PurgeUsageAfter",
            Self::SlurmUser => "SlurmUser",
            Self::StorageHost => "StorageHost",
            Self::StorageBackupHost => "StorageBackupHost",
            Self::StorageLoc => "StorageLoc",
            Self::StorageParameters => "StorageParameters",
            Self::StoragePass => "StoragePass",
            Self::StoragePort => "StoragePort",
            Self::StorageType => "StorageType",
            Self::StorageUser => "StorageUser",
            Self::TCPTimeout => "TCPTimeout",
            Self::TrackSlurmctldDown => "TrackSlurmctldDown",
            Self::TrackWCKey => "TrackWCKey",
        }
    }

    /// The semantic family this token's values belong to.
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::ArchiveDir
            | Self::ArchiveScript
            | Self::AuthInfo
            | Self::DbdBackupHost
            | Self::DbdAddr
            | Self::DbdHost
            | Self::DefaultQOS
            | Self::LogFile
            | Self::PidFile
            | Self::SlurmUser
            | Self::StorageHost
            | Self::StorageBackupHost
            | Self::StorageLoc
            | Self::StorageUser => ValueKind::Text,

            Self::ArchiveEvents
            | Self::ArchiveJobs
            | Self::ArchiveResvs
            | Self::ArchiveSteps
            | Self::ArchiveSuspend
            | Self::ArchiveTXN
            | Self::ArchiveUsage
            | Self::TrackSlurmctldDown
            | Self::TrackWCKey => ValueKind::Bool,

            Self::CommitDelay | Self::MessageTimeout | Self::TCPTimeout => ValueKind::Number,

            Self::DbdPort | Self::StoragePort => ValueKind::Port,

            Self::AuthType => ValueKind::Keyword(AUTH_TYPES),
            Self::StorageType => ValueKind::Keyword(STORAGE_TYPES),
            Self::DebugLevel | Self::DebugLevelSyslog => ValueKind::Keyword(DEBUG_LEVELS),
            Self::LogTimeFormat => ValueKind::Keyword(LOG_TIME_FORMATS),

            Self::DebugFlags => ValueKind::List {
                delimiter: ',',
                allowed: Some(DEBUG_FLAGS),
            },
            Self::PrivateData => ValueKind::List {
                delimiter: ',',
                allowed: Some(PRIVATE_DATA),
            },
            Self::AuthAltTypes | Self::CommunicationParameters | Self::Parameters => {
                ValueKind::List {
                    delimiter: ',',
                    allowed: None,
                }
            }
            Self::PluginDir => ValueKind::List {
                delimiter: ':',
                allowed: None,
            },

            Self::AuthAltParameters | Self::StorageParameters => ValueKind::Pairs,

            Self::PurgeEventAfter
            | Self::PurgeJobAfter
            | Self::PurgeResvAfter
            | Self::PurgeStepAfter
            | Self::PurgeSuspendAfter
            | Self::PurgeTXNAfter
            | Self::PurgeUsageAfter => ValueKind::Duration,

            Self::MaxQueryTimeRange => ValueKind::QueryRange,

            Self::StoragePass => ValueKind::Password,
        }
    }
}

impl std::fmt::Display for ConfigToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConfigToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Look up a key name in the vocabulary.
///
/// Matching is case-sensitive and exact; the on-disk spelling is canonical.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedKey`] if `name` is not a member of the
/// vocabulary.
///
/// # Examples
///
/// ```
/// use dbdconf::conf::{lookup, ConfigToken};
///
/// assert_eq!(lookup("StorageHost").unwrap(), ConfigToken::StorageHost);
/// assert!(lookup("STORAGEHOST").is_err());
/// ```
pub fn lookup(name: &str) -> Result<ConfigToken> {
    ALL_TOKENS
        .iter()
        .copied()
        .find(|token| token.as_str() == name)
        .ok_or_else(|| Error::UnrecognizedKey {
            key: name.to_string(),
        })
}
