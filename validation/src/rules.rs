//! The fixed-order rule set.

use intake_types::InquiryDraft;

/// Minimum message length in characters, counted after trimming.
///
/// A spam / low-effort-content floor, not a content-quality guarantee.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// The form field a violated rule belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// The individual rules, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    NameRequired,
    EmailRequired,
    EmailShape,
    MessageRequired,
    MessageTooShort,
}

impl Rule {
    /// Localized message shown inline when this rule is the first violated.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NameRequired => "お名前を入力してください",
            Self::EmailRequired => "メールアドレスを入力してください",
            Self::EmailShape => "有効なメールアドレスを入力してください",
            Self::MessageRequired => "お問い合わせ内容を入力してください",
            Self::MessageTooShort => "お問い合わせ内容は10文字以上で入力してください",
        }
    }

    /// The field this rule constrains.
    pub fn field(&self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::EmailRequired | Self::EmailShape => Field::Email,
            Self::MessageRequired | Self::MessageTooShort => Field::Message,
        }
    }
}

/// The first violated rule of a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: Field,
    pub rule: Rule,
}

impl ValidationIssue {
    fn new(rule: Rule) -> Self {
        Self {
            field: rule.field(),
            rule,
        }
    }

    /// Localized message for this issue.
    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}

/// Validate a draft against the rule set.
///
/// Rules run in the order declared on [`Rule`] and evaluation stops at the
/// first violation. Category is not validated here: the closed enum makes
/// an illegal value unrepresentable.
pub fn validate(draft: &InquiryDraft) -> Result<(), ValidationIssue> {
    if draft.name.trim().is_empty() {
        return Err(ValidationIssue::new(Rule::NameRequired));
    }

    let email = draft.email.trim();
    if email.is_empty() {
        return Err(ValidationIssue::new(Rule::EmailRequired));
    }
    if !email_shape_ok(email) {
        return Err(ValidationIssue::new(Rule::EmailShape));
    }

    let message = draft.message.trim();
    if message.is_empty() {
        return Err(ValidationIssue::new(Rule::MessageRequired));
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationIssue::new(Rule::MessageTooShort));
    }

    Ok(())
}

/// Syntactic sanity check: local-part, `@`, domain with an interior dot,
/// no whitespace anywhere, no second `@`. Deliberately not RFC validation,
/// to avoid false rejections.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
