//! User-facing error notice.

/// A localized, user-facing message surfaced inline on the form.
///
/// Every failure the workflow can recover from is reduced to one of these
/// at the boundary where it occurs; internal error detail goes to the logs,
/// never to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice(String);

impl ErrorNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ErrorNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
