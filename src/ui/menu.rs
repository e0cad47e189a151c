// Menu rendering and choice parsing.

use std::io::{self, Write};

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FetchUser,
    ListCached,
    SearchUser,
    SearchRepository,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::FetchUser,
        MenuChoice::ListCached,
        MenuChoice::SearchUser,
        MenuChoice::SearchRepository,
        MenuChoice::Exit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::FetchUser => "1",
            MenuChoice::ListCached => "2",
            MenuChoice::SearchUser => "3",
            MenuChoice::SearchRepository => "4",
            MenuChoice::Exit => "5",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuChoice::FetchUser => "Fetch a user by username",
            MenuChoice::ListCached => "List cached users",
            MenuChoice::SearchUser => "Search cached users by username",
            MenuChoice::SearchRepository => "Search cached users by repository name",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Match a trimmed input line against the menu keys.
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- GitHub users ---")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}) {}", choice.key(), choice.title())?;
    }
    write_prompt(out, "Your choice: ")
}

/// Print a prompt without a trailing newline.
pub fn write_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(out, "{}", prompt)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::FetchUser));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::SearchRepository));
        assert_eq!(MenuChoice::parse(" 4 "), None);
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_menu_lists_every_choice() {
        let mut out = Vec::new();
        write_menu(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for choice in MenuChoice::ALL {
            assert!(text.contains(&format!("{}) {}", choice.key(), choice.title())));
        }
        assert!(text.ends_with("Your choice: "));
    }
}
