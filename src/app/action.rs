/// Side effects the event loop performs after the handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Ring the terminal bell; used when a key has nowhere to go.
    Bell,
}
