//! Log payload normalization
//!
//! A payload is a closed variant: a plain message or a structured error.
//! Anything else is rejected at the call boundary by the type system, so no
//! payload ever normalizes to an empty message.

use std::borrow::Cow;
use std::fmt;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug)]
pub enum LogPayload {
    Message(String),
    Error(BoxedError),
}

impl LogPayload {
    /// Wrap any error type as a payload.
    pub fn error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LogPayload::Error(Box::new(err))
    }

    /// The normalized message text: an error payload's display message,
    /// a string payload verbatim.
    pub fn to_message(&self) -> Cow<'_, str> {
        match self {
            LogPayload::Message(message) => Cow::Borrowed(message),
            LogPayload::Error(err) => Cow::Owned(err.to_string()),
        }
    }
}

impl fmt::Display for LogPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_message())
    }
}

impl From<String> for LogPayload {
    fn from(message: String) -> Self {
        LogPayload::Message(message)
    }
}

impl From<&str> for LogPayload {
    fn from(message: &str) -> Self {
        LogPayload::Message(message.to_string())
    }
}

impl From<Cow<'_, str>> for LogPayload {
    fn from(message: Cow<'_, str>) -> Self {
        LogPayload::Message(message.into_owned())
    }
}

impl From<BoxedError> for LogPayload {
    fn from(err: BoxedError) -> Self {
        LogPayload::Error(err)
    }
}

impl From<std::io::Error> for LogPayload {
    fn from(err: std::io::Error) -> Self {
        LogPayload::error(err)
    }
}
