/// A key press classified for the game and menu state machines.
///
/// Keys that mean nothing to either machine arrive as `Other` and are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Confirm,
    Restart,
    Quit,
    Other,
}
