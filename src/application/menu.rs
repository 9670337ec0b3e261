//! Screens and menu choices for the interactive session

use std::str::FromStr;

/// States of the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    LoggedOut,
    Dashboard,
    Writing,
    Viewing,
}

/// Options on the welcome screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeChoice {
    Register,
    Login,
    Exit,
}

impl FromStr for WelcomeChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>().map_err(|_| ())? {
            1 => Ok(WelcomeChoice::Register),
            2 => Ok(WelcomeChoice::Login),
            3 => Ok(WelcomeChoice::Exit),
            _ => Err(()),
        }
    }
}

/// Options on the dashboard once logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardChoice {
    Write,
    ViewByDate,
    ViewAll,
    MoodSummary,
    Badges,
    Logout,
}

impl FromStr for DashboardChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>().map_err(|_| ())? {
            1 => Ok(DashboardChoice::Write),
            2 => Ok(DashboardChoice::ViewByDate),
            3 => Ok(DashboardChoice::ViewAll),
            4 => Ok(DashboardChoice::MoodSummary),
            5 => Ok(DashboardChoice::Badges),
            6 => Ok(DashboardChoice::Logout),
            _ => Err(()),
        }
    }
}
