use serde::{Deserialize, Serialize};

pub type EmailId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Default)]
pub struct Email {
    pub id: EmailId,
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
    pub timestamp: String,
    pub read: bool,
    pub archived: bool,
}

impl Email {
    /// label of the button that flips the archived flag
    pub fn archive_label(&self) -> &'static str {
        if self.archived {
            "Unarchive"
        } else {
            "Archive"
        }
    }

    /// update that flips the archived flag
    pub fn archive_toggle(&self) -> EmailUpdate {
        EmailUpdate::archived(!self.archived)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mailbox {
    Inbox,
    Sent,
    Archive,
}

impl Mailbox {
    pub const ALL: [Mailbox; 3] = [Mailbox::Inbox, Mailbox::Sent, Mailbox::Archive];

    /// path segment under `/emails/`
    pub fn path(self) -> &'static str {
        match self {
            Mailbox::Inbox => "inbox",
            Mailbox::Sent => "sent",
            Mailbox::Archive => "archive",
        }
    }

    /// id of the navigation button that opens this mailbox
    pub fn button_id(self) -> &'static str {
        match self {
            Mailbox::Inbox => "inbox",
            Mailbox::Sent => "sent",
            Mailbox::Archive => "archived",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Mailbox::Inbox => "Inbox",
            Mailbox::Sent => "Sent",
            Mailbox::Archive => "Archive",
        }
    }
}

/// contents of the compose form
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Draft {
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Recipients,
    Subject,
    Body,
}

impl Draft {
    /// pre-filled reply to `email`
    pub fn reply(email: &Email) -> Self {
        Draft {
            recipients: email.sender.clone(),
            subject: reply_subject(&email.subject),
            body: format!(
                "On {} {} wrote:\n{}",
                email.timestamp, email.sender, email.body
            ),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Recipients => self.recipients = value,
            DraftField::Subject => self.subject = value,
            DraftField::Body => self.body = value,
        }
    }

    pub fn to_outgoing(&self) -> OutgoingEmail {
        OutgoingEmail {
            recipients: self.recipients.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }
}

/// prefix a subject with "Re: " unless it already carries one
pub fn reply_subject(subject: &str) -> String {
    let already_reply = subject
        .get(..3)
        .map(|prefix| prefix.eq_ignore_ascii_case("re:"))
        .unwrap_or(false);

    if already_reply {
        subject.to_string()
    } else {
        format!("Re: {subject}")
    }
}

/// body of `POST /emails`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub recipients: String,
    pub subject: String,
    pub body: String,
}

/// body of `PUT /emails/{id}`, only the set fields are sent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Default)]
pub struct EmailUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl EmailUpdate {
    pub fn mark_read() -> Self {
        EmailUpdate {
            read: Some(true),
            ..Default::default()
        }
    }

    pub fn archived(archived: bool) -> Self {
        EmailUpdate {
            archived: Some(archived),
            ..Default::default()
        }
    }
}

/// answer to `POST /emails`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Default)]
pub struct SendReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
