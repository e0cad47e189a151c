// App state and main input loop.
// Reads menu choices line by line and dispatches them to the user repository.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::repository::{GitHubRepository, UserApi};
use crate::ui::{self, MenuChoice};

/// Main application state.
pub struct App<A> {
    repository: GitHubRepository<A>,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl<A: UserApi> App<A> {
    pub fn new(repository: GitHubRepository<A>) -> Self {
        Self {
            repository,
            should_quit: false,
        }
    }

    /// Main input loop. Returns on the exit choice or end of input.
    pub async fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        while !self.should_quit {
            ui::write_menu(&mut output)?;
            let Some(line) = read_line(&mut input)? else {
                debug!("input closed");
                writeln!(output)?;
                break;
            };

            match MenuChoice::parse(&line) {
                Some(choice) => self.handle_choice(choice, &mut input, &mut output).await?,
                None => writeln!(output, "Invalid choice, please try again.")?,
            }
        }
        output.flush()
    }

    async fn handle_choice(
        &mut self,
        choice: MenuChoice,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<()> {
        match choice {
            MenuChoice::FetchUser => {
                ui::write_prompt(output, "Enter a username: ")?;
                let Some(username) = read_line(input)? else {
                    self.should_quit = true;
                    return Ok(());
                };
                self.fetch_user(&username, output).await
            }
            MenuChoice::ListCached => self.list_cached(output),
            MenuChoice::SearchUser => {
                ui::write_prompt(output, "Username to search for: ")?;
                let Some(username) = read_line(input)? else {
                    self.should_quit = true;
                    return Ok(());
                };
                self.search_user(&username, output)
            }
            MenuChoice::SearchRepository => {
                ui::write_prompt(output, "Repository name to search for: ")?;
                let Some(fragment) = read_line(input)? else {
                    self.should_quit = true;
                    return Ok(());
                };
                self.search_repository(&fragment, output)
            }
            MenuChoice::Exit => {
                writeln!(output, "Goodbye!")?;
                self.should_quit = true;
                Ok(())
            }
        }
    }

    async fn fetch_user(&mut self, username: &str, output: &mut impl Write) -> io::Result<()> {
        match self.repository.get_user(username).await {
            Ok(lookup) => match lookup.profile() {
                Some(profile) => {
                    if lookup.is_cache_hit() {
                        writeln!(output, "User loaded from cache.")?;
                    }
                    ui::write_profile(output, "User details", profile)?;
                }
                None => {
                    writeln!(
                        output,
                        "No user named {} was found, or an error occurred.",
                        username
                    )?;
                }
            },
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                writeln!(
                    output,
                    "No user named {} was found, or an error occurred.",
                    username
                )?;
            }
        }
        Ok(())
    }

    fn list_cached(&self, output: &mut impl Write) -> io::Result<()> {
        let entries = self.repository.cached_users();
        if entries.is_empty() {
            return writeln!(output, "No users cached yet.");
        }

        let heading = format!("Cached users ({})", entries.len());
        let rows = entries.into_iter().map(|entry| {
            let cached_at = entry.cached_at.format("cached %Y-%m-%d %H:%M:%S UTC");
            (&entry.profile, Some(cached_at.to_string()))
        });
        ui::write_user_list(output, &heading, rows)
    }

    fn search_user(&self, username: &str, output: &mut impl Write) -> io::Result<()> {
        match self.repository.search_user(username) {
            Some(profile) => ui::write_profile(output, "Cached user", profile),
            None => writeln!(output, "No user named {} is cached.", username),
        }
    }

    fn search_repository(&self, fragment: &str, output: &mut impl Write) -> io::Result<()> {
        let users = self.repository.search_by_repository(fragment);
        if users.is_empty() {
            return writeln!(
                output,
                "No cached user has a repository containing '{}'.",
                fragment
            );
        }

        let heading = format!("Users with repositories containing '{}'", fragment);
        ui::write_user_list(output, &heading, users.into_iter().map(|u| (u, None)))
    }
}

/// Read one line, trimmed. `None` at end of input. Invalid UTF-8 is replaced, not rejected.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::repository::tests::{FakeApi, Reply};

    async fn run_script(api: FakeApi, script: &str) -> (App<FakeApi>, String) {
        run_bytes(api, script.as_bytes()).await
    }

    async fn run_bytes(api: FakeApi, script: &[u8]) -> (App<FakeApi>, String) {
        let mut app = App::new(GitHubRepository::new(api));
        let mut output = Vec::new();
        app.run(Cursor::new(script), &mut output)
            .await
            .unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_exit_choice() {
        let (app, output) = run_script(FakeApi::default(), "5\n1\noctocat\n").await;

        assert!(app.should_quit);
        assert!(output.contains("Goodbye!"));
        assert!(app.repository.cached_users().is_empty());
    }

    #[tokio::test]
    async fn test_end_of_input_stops_loop() {
        let (app, output) = run_script(FakeApi::default(), "2\n").await;

        assert!(output.contains("No users cached yet."));
        assert!(!output.contains("Goodbye!"));
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_invalid_choice_reprompts() {
        let (_, output) = run_script(FakeApi::default(), "9\n5\n").await;

        assert!(output.contains("Invalid choice, please try again."));
        assert_eq!(output.matches("Your choice: ").count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_keeps_loop_running() {
        let (app, output) = run_bytes(FakeApi::default(), b"\xff\n2\n5\n").await;

        assert!(app.should_quit);
        assert!(output.contains("Invalid choice, please try again."));
        assert!(output.contains("No users cached yet."));
        assert!(output.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_username_is_looked_up() {
        let api = FakeApi::default().with_account("octocat", 5, &[]);
        let (app, output) = run_bytes(api, b"1\nocto\xffcat\n5\n").await;

        assert!(output.contains("No user named octo\u{FFFD}cat was found, or an error occurred."));
        assert!(app.repository.cached_users().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_then_cache_hit() {
        let api = FakeApi::default().with_account("octocat", 5, &["Hello-World"]);
        let (app, output) = run_script(api, "1\noctocat\n1\noctocat\n5\n").await;

        assert_eq!(output.matches("Username: octocat").count(), 2);
        assert_eq!(output.matches("User loaded from cache.").count(), 1);
        assert!(output.contains("- Hello-World"));
        assert_eq!(app.repository.cached_users().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_reports_error() {
        let api = FakeApi::default().with_user("ghost", Reply::Status(404));
        let (app, output) = run_script(api, "1\nghost\n2\n5\n").await;

        assert!(output.contains("Error: /users/ghost returned 404: Scripted failure"));
        assert!(output.contains("No user named ghost was found, or an error occurred."));
        assert!(output.contains("No users cached yet."));
        assert!(app.repository.cached_users().is_empty());
    }

    #[tokio::test]
    async fn test_list_and_search() {
        let api = FakeApi::default()
            .with_account("alice", 3, &["dotfiles"])
            .with_account("bob", 7, &["compiler"]);
        let script = "1\nalice\n1\nbob\n2\n3\nbob\n3\ncarol\n4\nDOT\n4\nkernel\n5\n";
        let (_, output) = run_script(api, script).await;

        assert!(output.contains("--- Cached users (2) ---"));
        assert!(output.contains("- alice (cached "));
        assert!(output.contains("- bob (cached "));
        assert!(output.contains("--- Cached user ---\nUsername: bob"));
        assert!(output.contains("No user named carol is cached."));
        assert!(output.contains("--- Users with repositories containing 'DOT' ---\n- alice\n"));
        assert!(output.contains("No cached user has a repository containing 'kernel'."));
    }
}
