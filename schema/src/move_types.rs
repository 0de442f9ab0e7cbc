use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumString;

/// Whether a move is resolved against the physical or the special stat pair.
///
/// Kept separate from the move's element: the element drives STAB and
/// effectiveness, the category only picks which attack/defense stats apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
        };
        write!(f, "{}", display_name)
    }
}
