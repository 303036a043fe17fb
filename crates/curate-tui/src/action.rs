/// A user intent, decoupled from the raw terminal event that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NavigateBack,
    MoveDown,
    MoveUp,
    GoTop,
    GoBottom,
    PageDown,
    PageUp,
    /// Enter: advance from the landing page, submit the form, or request
    /// the curated feed, depending on the current screen.
    Confirm,
    /// Space: flip the checkbox under the cursor.
    ToggleSelect,
    /// 'a': select-all / deselect-all as a single toggling action.
    ToggleSelectAll,
    /// Tab: move between form fields.
    NextField,
    /// A character typed into the focused form field ('\x08' = backspace).
    Input(char),
    ToggleLegend,
    ToggleHelp,
    Tick,
    Resize(u16, u16),
    None,
}
