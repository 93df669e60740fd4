//! Validated value types.
//!
//! Every type here wraps a primitive behind a private field. `parse` is the
//! only way to build one from untrusted input; `new_unchecked` skips the
//! checks and is meant for values that were validated before (fixtures,
//! constants, data that already went through `parse`).

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::validation::{self, ValidationError};

macro_rules! validated_string {
    ($(#[$meta:meta])* $name:ident: $field:literal => $check:path) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Field name used in validation errors.
            pub const FIELD: &'static str = $field;

            /// Validates `raw` and wraps it.
            pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
                let raw = raw.into();
                $check(&raw, Self::FIELD)?;
                Ok(Self(raw))
            }

            /// Wraps `raw` without validating it.
            pub fn new_unchecked(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

validated_string! {
    /// Platform identifier of a test, e.g. `754562`.
    #[derive(Debug)]
    TestId: "test id" => validation::non_empty
}

validated_string! {
    /// Display name of a test.
    #[derive(Debug)]
    TestName: "test name" => validation::non_empty
}

validated_string! {
    /// Platform identifier of a candidate.
    #[derive(Debug)]
    CandidateId: "candidate id" => validation::non_empty
}

validated_string! {
    /// Email address used to look a candidate up.
    #[derive(Debug)]
    CandidateEmail: "candidate email" => validation::email
}

validated_string! {
    #[derive(Debug)]
    FullName: "full name" => validation::non_empty
}

validated_string! {
    /// Root URL of the HackerRank service, e.g. `https://www.hackerrank.com`.
    #[derive(Debug)]
    HackerRankSvc: "service url" => validation::non_empty
}

validated_string! {
    /// Signed download link of a candidate's PDF report. Kept byte-for-byte
    /// as the API returned it.
    #[derive(Debug)]
    ReportUrl: "report url" => validation::absolute_url
}

validated_string! {
    /// Bearer token sent in the `Authorization` header.
    ApiKey: "api key" => validation::non_empty
}

impl ApiKey {
    /// Builds the bearer token from the raw account secret, which is sent
    /// base64 encoded.
    pub fn from_secret(secret: &str) -> Result<Self, ValidationError> {
        validation::non_empty(secret, Self::FIELD)?;
        Self::parse(BASE64_STANDARD.encode(secret.as_bytes()))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Score of one attempt. Any finite number is accepted.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct TestScore(f64);

impl TestScore {
    pub fn parse(raw: f64) -> Result<Self, ValidationError> {
        if !raw.is_finite() {
            return Err(ValidationError::NonFiniteScore(raw));
        }
        Ok(Self(raw))
    }

    pub fn new_unchecked(raw: f64) -> Self {
        Self(raw)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for TestScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TestScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for TestScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}

/// Time an attempt ended, normalised to UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptTime(DateTime<Utc>);

impl AttemptTime {
    /// Offset form used by the platform, e.g. `2020-05-02T13:07:46+0000`.
    const PLATFORM_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%.f%z";

    /// Parses an RFC 3339 timestamp or the platform's `+hhmm` offset form.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, Self::PLATFORM_FORMAT))
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|_| ValidationError::InvalidTimestamp(raw.to_string()))
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for AttemptTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl Serialize for AttemptTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for AttemptTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Outcome of the platform's plagiarism check for one attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlagiarismStatus {
    Clean,
    Suspected,
}

impl From<bool> for PlagiarismStatus {
    fn from(flagged: bool) -> Self {
        if flagged {
            PlagiarismStatus::Suspected
        } else {
            PlagiarismStatus::Clean
        }
    }
}

impl fmt::Display for PlagiarismStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlagiarismStatus::Clean => write!(f, "Clean"),
            PlagiarismStatus::Suspected => write!(f, "Suspected"),
        }
    }
}
