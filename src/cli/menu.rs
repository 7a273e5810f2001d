//! Main menu commands.

use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

/// One main-menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AverageCrossTable,
    MinimumCrossTable,
    MaximumCrossTable,
    StatsByLocation,
    StatsByPropertyType,
    LocationFilters,
    PropertyTypeFilters,
    LoadData,
    Quit,
}

impl Command {
    /// Every command, in menu order (option `n` is `ALL[n - 1]`).
    pub const ALL: [Command; 9] = [
        Command::AverageCrossTable,
        Command::MinimumCrossTable,
        Command::MaximumCrossTable,
        Command::StatsByLocation,
        Command::StatsByPropertyType,
        Command::LocationFilters,
        Command::PropertyTypeFilters,
        Command::LoadData,
        Command::Quit,
    ];

    /// The menu number of this command.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::AverageCrossTable => "Print Average Rent by Location and Property Type",
            Command::MinimumCrossTable => "Print Minimum Rent by Location and Property Type",
            Command::MaximumCrossTable => "Print Maximum Rent by Location and Property Type",
            Command::StatsByLocation => "Print Min/Avg/Max by Location",
            Command::StatsByPropertyType => "Print Min/Avg/Max by Property Type",
            Command::LocationFilters => "Adjust Location Filters",
            Command::PropertyTypeFilters => "Adjust Property Type Filters",
            Command::LoadData => "Load Data",
            Command::Quit => "Quit",
        }
    }
}

/// Why a menu choice was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("Please enter a valid number only.")]
    NotANumber,
    #[error("Please select a number from 1-{max}.")]
    OutOfRange { max: usize },
}

impl FromStr for Command {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MenuError::NotANumber);
        }

        // Numeric input that does not fit is still a number, just out of range.
        s.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(MenuError::OutOfRange {
                max: Self::ALL.len(),
            })
    }
}

/// Print the main menu.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Main Menu")?;
    for cmd in Command::ALL {
        writeln!(out, "{} - {}", cmd.number(), cmd.description())?;
    }
    Ok(())
}
