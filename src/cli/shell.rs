//! Interactive menu-driven session over any line reader and writer

use crate::application::{DashboardChoice, Screen, Session, WelcomeChoice, MOOD_WINDOW_DAYS};
use crate::cli::output::{format_badge_list, format_entry, format_entry_list, format_mood_summary};
use crate::error::Result;
use crate::infrastructure::Config;
use chrono::{Local, NaiveDate};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::debug;

const CHOOSE: &str = "Choose an option: ";
const INVALID_OPTION: &str = "Invalid option. Try again.";

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Drives the LoggedOut -> Dashboard -> Writing/Viewing state machine
pub struct Shell<R, W> {
    session: Session,
    config: Config,
    screen: Screen,
    clock: Box<dyn Fn() -> NaiveDate>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(session: Session, config: Config, input: R, output: W) -> Self {
        Shell {
            session,
            config,
            screen: Screen::LoggedOut,
            clock: Box::new(local_today),
            input,
            output,
        }
    }

    /// Replace the source of "today" used to date new entries and window the mood summary
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            let keep_going = match self.screen {
                Screen::LoggedOut => self.welcome()?,
                Screen::Dashboard => self.dashboard()?,
                Screen::Writing => self.writing()?,
                Screen::Viewing => self.viewing()?,
            };
            if !keep_going {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn welcome(&mut self) -> Result<bool> {
        writeln!(self.output, "Welcome to Personal Diary")?;
        writeln!(self.output, "1. Register\n2. Login\n3. Exit")?;
        let Some(choice) = self.prompt(CHOOSE)? else {
            return Ok(false);
        };

        match choice.parse::<WelcomeChoice>() {
            Ok(WelcomeChoice::Register) => {
                let Some((username, password)) = self.read_credentials()? else {
                    return Ok(false);
                };
                if self.session.register(&username, &password) {
                    writeln!(self.output, "User registered successfully!")?;
                } else {
                    writeln!(self.output, "User already exists.")?;
                }
            }
            Ok(WelcomeChoice::Login) => {
                let Some((username, password)) = self.read_credentials()? else {
                    return Ok(false);
                };
                if self.session.login(&username, &password) {
                    writeln!(self.output, "Login successful!")?;
                    self.go_to(Screen::Dashboard);
                } else {
                    writeln!(self.output, "Invalid username or password!")?;
                }
            }
            Ok(WelcomeChoice::Exit) => {
                writeln!(self.output, "Exiting application. Goodbye!")?;
                return Ok(false);
            }
            Err(()) => writeln!(self.output, "{}", INVALID_OPTION)?,
        }
        Ok(true)
    }

    fn dashboard(&mut self) -> Result<bool> {
        writeln!(
            self.output,
            "1. Write Diary Entry\n2. View Diary Entry by Date\n3. View All Entries\n4. Mood Summary\n5. My Badges\n6. Logout"
        )?;
        let Some(choice) = self.prompt(CHOOSE)? else {
            return Ok(false);
        };

        match choice.parse::<DashboardChoice>() {
            Ok(DashboardChoice::Write) => self.go_to(Screen::Writing),
            Ok(DashboardChoice::ViewByDate) => self.go_to(Screen::Viewing),
            Ok(DashboardChoice::ViewAll) => {
                let listing = format_entry_list(self.session.entries(), &self.config.separator);
                writeln!(self.output, "All Diary Entries:")?;
                writeln!(self.output, "{}", listing.trim_end_matches('\n'))?;
            }
            Ok(DashboardChoice::MoodSummary) => {
                let today = (self.clock)();
                let summary = format_mood_summary(&self.session.mood_summary(today));
                writeln!(self.output, "Mood Summary (last {} days):", MOOD_WINDOW_DAYS)?;
                writeln!(self.output, "{}", summary.trim_end_matches('\n'))?;
            }
            Ok(DashboardChoice::Badges) => {
                let badges = format_badge_list(&self.session.badges());
                writeln!(self.output, "My Badges:")?;
                writeln!(self.output, "{}", badges.trim_end_matches('\n'))?;
            }
            Ok(DashboardChoice::Logout) => {
                self.session.logout();
                writeln!(self.output, "Logging out...")?;
                self.go_to(Screen::LoggedOut);
            }
            Err(()) => writeln!(self.output, "{}", INVALID_OPTION)?,
        }
        Ok(true)
    }

    fn writing(&mut self) -> Result<bool> {
        let Some(content) = self.prompt("Enter diary content: ")? else {
            return Ok(false);
        };
        let Some(emotion) = self.prompt("Enter emotion (Happy, Sad, Neutral): ")? else {
            return Ok(false);
        };

        let today = (self.clock)();
        match self.session.write_entry(&content, &emotion, today) {
            Ok(written) => {
                writeln!(self.output, "Diary entry added successfully!")?;
                if let Some(badge) = written.unlocked {
                    writeln!(self.output, "Badge earned: {}!", badge)?;
                }
            }
            Err(e) => writeln!(self.output, "{}", e.display_with_suggestions())?,
        }
        self.go_to(Screen::Dashboard);
        Ok(true)
    }

    fn viewing(&mut self) -> Result<bool> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(false);
        };

        match self.session.find_entry(date.trim()) {
            Some(entry) => writeln!(self.output, "{}", format_entry(entry))?,
            None => writeln!(self.output, "No entry found for this date.")?,
        }
        self.go_to(Screen::Dashboard);
        Ok(true)
    }

    fn go_to(&mut self, next: Screen) {
        debug!(from = ?self.screen, to = ?next, "screen transition");
        self.screen = next;
    }

    fn read_credentials(&mut self) -> Result<Option<(String, String)>> {
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(None);
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }

    /// Print `label` and read one line without its line ending. `None` on end of input.
    /// Bytes that are not valid UTF-8 become U+FFFD instead of ending the session.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            debug!("replaced invalid UTF-8 in input line");
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn run_script(script: &str) -> (String, Screen, usize) {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(script: &[u8]) -> (String, Screen, usize) {
        let mut shell = Shell::new(Session::new(), Config::default(), script, Vec::new())
            .with_clock(may_first);
        shell.run().unwrap();
        let screen = shell.screen();
        let entries = shell.session().entries().len();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (output, screen, entries)
    }

    #[test]
    fn test_exit_immediately() {
        let (output, screen, _) = run_script("3\n");
        assert!(output.contains("Welcome to Personal Diary"));
        assert!(output.contains("Exiting application. Goodbye!"));
        assert_eq!(screen, Screen::LoggedOut);
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let (output, screen, _) = run_script("");
        assert!(output.ends_with(CHOOSE));
        assert_eq!(screen, Screen::LoggedOut);
    }

    #[test]
    fn test_invalid_option() {
        let (output, _, _) = run_script("9\nabc\n3\n");
        assert_eq!(output.matches(INVALID_OPTION).count(), 2);
    }

    #[test]
    fn test_register_twice() {
        let (output, _, _) = run_script("1\nalice\npw1\n1\nalice\npw2\n3\n");
        assert!(output.contains("User registered successfully!"));
        assert!(output.contains("User already exists."));
    }

    #[test]
    fn test_bad_login_stays_logged_out() {
        let (output, screen, _) = run_script("1\nalice\npw1\n2\nalice\nwrong\n");
        assert!(output.contains("Invalid username or password!"));
        assert_eq!(screen, Screen::LoggedOut);
    }

    #[test]
    fn test_round_trip_session() {
        let script = "1\nalice\npw1\n\
                      2\nalice\npw1\n\
                      1\nGreat day\nHappy\n\
                      2\n2024-05-01\n\
                      2\n2024-05-02\n\
                      3\n\
                      6\n3\n";
        let (output, screen, entries) = run_script(script);

        assert!(output.contains("Login successful!"));
        assert!(output.contains("Diary entry added successfully!"));
        assert!(output.contains("Date: 2024-05-01\nEmotion: Happy\nContent:\nGreat day"));
        assert!(output.contains("No entry found for this date."));
        assert!(output.contains("All Diary Entries:"));
        assert!(output.contains("-------------------"));
        assert!(output.contains("Logging out..."));
        assert_eq!(screen, Screen::LoggedOut);
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_write_validation_returns_to_dashboard() {
        let script = "1\nbob\nx\n2\nbob\nx\n\
                      1\n\nHappy\n\
                      1\nsome text\nAngry\n";
        let (output, screen, entries) = run_script(script);

        assert!(output.contains("Please fill in all fields!"));
        assert!(output.contains("Invalid emotion: 'Angry'"));
        assert_eq!(screen, Screen::Dashboard);
        assert_eq!(entries, 0);
    }

    #[test]
    fn test_mood_summary_and_empty_listing() {
        let script = "1\nbob\nx\n2\nbob\nx\n\
                      3\n4\n\
                      1\nok\nneutral\n4\n";
        let (output, _, _) = run_script(script);

        assert!(output.contains("All Diary Entries:\nNo entries found"));
        assert!(output.contains("Mood Summary (last 30 days):\nNo entries found"));
        assert!(output.contains("Happy    0\nSad      0\nNeutral  1"));
    }

    #[test]
    fn test_date_search_ignores_surrounding_whitespace() {
        let script = "1\nbob\nx\n2\nbob\nx\n\
                      1\nentry\nSad\n\
                      2\n  2024-05-01 \r\n";
        let (output, _, _) = run_script(script);
        assert!(output.contains("Emotion: Sad"));
    }

    #[test]
    fn test_invalid_utf8_input_keeps_session_alive() {
        let script: &[u8] = b"1\nbob\nx\n2\nbob\nx\n1\ncaf\xe9 day\nHappy\n3\n6\n3\n";
        let (output, screen, entries) = run_bytes(script);

        assert_eq!(entries, 1);
        assert!(output.contains("Content:\ncaf\u{FFFD} day"));
        assert!(output.contains("Logging out..."));
        assert!(output.contains("Exiting application. Goodbye!"));
        assert_eq!(screen, Screen::LoggedOut);
    }

    #[test]
    fn test_invalid_utf8_menu_choice_is_invalid_option() {
        let (output, _, _) = run_bytes(b"\xff\n3\n");
        assert!(output.contains(INVALID_OPTION));
        assert!(output.contains("Exiting application. Goodbye!"));
    }

    #[test]
    fn test_badges_announced_and_listed() {
        let script = "1\nbob\nx\n2\nbob\nx\n\
                      5\n\
                      1\nfirst\nHappy\n\
                      1\nsecond\nSad\n\
                      5\n";
        let (output, _, _) = run_script(script);

        assert!(output.contains("My Badges:\nNo badges yet"));
        assert_eq!(output.matches("Badge earned: First Entry!").count(), 1);
        assert!(output.contains("My Badges:\n* First Entry"));
    }

    #[test]
    fn test_mood_summary_uses_clock_window() {
        let mut shell = Shell::new(
            Session::new(),
            Config::default(),
            "1\nbob\nx\n2\nbob\nx\n1\nold news\nSad\n".as_bytes(),
            Vec::new(),
        )
        .with_clock(may_first);
        shell.run().unwrap();
        assert_eq!(shell.session().entries().len(), 1);

        // Same session seen from 31 days later: the entry falls outside the window
        let later = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(shell.session().mood_summary(later).total(), 0);
        assert_eq!(shell.session().mood_summary(may_first()).sad, 1);
    }
}
