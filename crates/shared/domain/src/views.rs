use crate::constants::CALCULATOR_VIEW;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A view the client can render at a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Calculator,
}

impl View {
    pub const ALL: &[Self] = &[Self::Calculator];

    /// Name under which the view is registered in the route table.
    #[must_use]
    pub const fn route_name(self) -> &'static str {
        match self {
            Self::Calculator => CALCULATOR_VIEW,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}
