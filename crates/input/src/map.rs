//! Mapping from typed menu lines to menu actions.

use crate::types::MenuAction;

/// Map one line of operator input to a menu action.
///
/// Surrounding whitespace is ignored. Anything that is not one of the menu
/// codes (including non-numeric text) maps to `None`.
pub fn parse_choice(line: &str) -> Option<MenuAction> {
    let code: i64 = line.trim().parse().ok()?;
    MenuAction::from_code(code)
}
