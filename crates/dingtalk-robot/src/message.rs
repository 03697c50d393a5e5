//! Payload shapes accepted by the custom robot webhook.
//!
//! Every message serializes to `{"msgtype": "<kind>", "<kind>": {...}}`, with a
//! sibling `at` object for the kinds that support mentions. Field values are
//! passed through untouched; the endpoint decides what it accepts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "msgtype", rename_all = "camelCase")]
pub enum Message {
    Text {
        text: Text,
        at: At,
    },
    Link {
        link: Link,
    },
    Markdown {
        markdown: Markdown,
        at: At,
    },
    ActionCard {
        #[serde(rename = "actionCard")]
        action_card: ActionCard,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub title: String,
    pub text: String,
    pub message_url: String,
    pub pic_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markdown {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCard {
    pub title: String,
    pub text: String,
    pub single_title: String,
    #[serde(rename = "singleURL")]
    pub single_url: String,
    pub btn_orientation: String,
    pub hide_avatar: String,
}

/// Mention parameters: members by mobile number, or the whole group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct At {
    pub at_mobiles: Vec<String>,
    pub is_at_all: bool,
}

impl Message {
    #[must_use]
    pub fn text(content: impl Into<String>, at_mobiles: Vec<String>, is_at_all: bool) -> Self {
        Self::Text {
            text: Text {
                content: content.into(),
            },
            at: At {
                at_mobiles,
                is_at_all,
            },
        }
    }

    #[must_use]
    pub fn link(
        title: impl Into<String>,
        text: impl Into<String>,
        message_url: impl Into<String>,
        pic_url: impl Into<String>,
    ) -> Self {
        Self::Link {
            link: Link {
                title: title.into(),
                text: text.into(),
                message_url: message_url.into(),
                pic_url: pic_url.into(),
            },
        }
    }

    #[must_use]
    pub fn markdown(
        title: impl Into<String>,
        text: impl Into<String>,
        at_mobiles: Vec<String>,
        is_at_all: bool,
    ) -> Self {
        Self::Markdown {
            markdown: Markdown {
                title: title.into(),
                text: text.into(),
            },
            at: At {
                at_mobiles,
                is_at_all,
            },
        }
    }

    /// `btn_orientation` and `hide_avatar` are the raw `"0"`/`"1"` strings the
    /// endpoint expects.
    #[must_use]
    pub fn action_card(
        title: impl Into<String>,
        text: impl Into<String>,
        single_title: impl Into<String>,
        single_url: impl Into<String>,
        btn_orientation: impl Into<String>,
        hide_avatar: impl Into<String>,
    ) -> Self {
        Self::ActionCard {
            action_card: ActionCard {
                title: title.into(),
                text: text.into(),
                single_title: single_title.into(),
                single_url: single_url.into(),
                btn_orientation: btn_orientation.into(),
                hide_avatar: hide_avatar.into(),
            },
        }
    }

    /// The `msgtype` discriminator this message is sent with.
    #[must_use]
    pub fn msgtype(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Link { .. } => "link",
            Self::Markdown { .. } => "markdown",
            Self::ActionCard { .. } => "actionCard",
        }
    }
}
