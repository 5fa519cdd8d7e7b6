//! User actions.

/// Canned button flows: a predetermined message instead of free-text input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    SupportService,
    IssueTicket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    ClearInput,
    Submit,
    Quick(QuickAction),

    TogglePanel,
    ClosePanel,

    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
}
