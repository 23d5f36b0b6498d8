use guestbook_core::NavigationIntent;

/// Callback payloads the pagination buttons carry through the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Previous,
    Next,
}

impl CallbackAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Previous => "prev",
            Self::Next => "next",
        }
    }

    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "prev" => Some(Self::Previous),
            "next" => Some(Self::Next),
            _ => None,
        }
    }

    pub fn intent(self) -> NavigationIntent {
        match self {
            Self::Previous => NavigationIntent::Previous,
            Self::Next => NavigationIntent::Next,
        }
    }
}

/// One inline button: a label and the callback payload it sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback: String,
}

impl InlineButton {
    fn for_action(label: &str, action: CallbackAction) -> Self {
        Self {
            label: label.to_string(),
            callback: action.as_str().to_string(),
        }
    }
}

/// Rows of inline buttons attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

/// The standard two-row previous/next keyboard under every page.
pub fn pagination_keyboard() -> Keyboard {
    Keyboard {
        rows: vec![
            vec![InlineButton::for_action("Previous", CallbackAction::Previous)],
            vec![InlineButton::for_action("Next", CallbackAction::Next)],
        ],
    }
}
