//! Icon names carried by content records, as a closed set.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Code2,
    Bot,
    Mic,
    Palette,
    PenTool,
    Sparkles,
    Users,
    Award,
    TrendingUp,
}

/// Default for service cards.
pub const SERVICE_ICON: Icon = Icon::Code;
/// Default for statistic tiles.
pub const STATISTIC_ICON: Icon = Icon::Code2;

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Code,
        Icon::Code2,
        Icon::Bot,
        Icon::Mic,
        Icon::Palette,
        Icon::PenTool,
        Icon::Sparkles,
        Icon::Users,
        Icon::Award,
        Icon::TrendingUp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Code => "Code",
            Icon::Code2 => "Code2",
            Icon::Bot => "Bot",
            Icon::Mic => "Mic",
            Icon::Palette => "Palette",
            Icon::PenTool => "PenTool",
            Icon::Sparkles => "Sparkles",
            Icon::Users => "Users",
            Icon::Award => "Award",
            Icon::TrendingUp => "TrendingUp",
        }
    }

    /// Resolve an optional icon name, using `default` for missing or
    /// unknown names.
    pub fn resolve(name: Option<&str>, default: Icon) -> Icon {
        match name.filter(|n| !n.is_empty()) {
            None => default,
            Some(n) => n.parse().unwrap_or_else(|_| {
                warn!(icon = n, "unknown icon name");
                default
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown icon {0:?}")]
pub struct UnknownIcon(pub String);

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>(), Ok(icon));
        }
    }

    #[test]
    fn resolve_uses_default_for_missing_or_unknown() {
        assert_eq!(Icon::resolve(Some("Bot"), SERVICE_ICON), Icon::Bot);
        assert_eq!(Icon::resolve(None, SERVICE_ICON), Icon::Code);
        assert_eq!(Icon::resolve(Some(""), STATISTIC_ICON), Icon::Code2);
        assert_eq!(Icon::resolve(Some("Rocket"), STATISTIC_ICON), Icon::Code2);
    }
}
