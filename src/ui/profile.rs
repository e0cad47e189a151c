// User detail and user list rendering.

use std::io::{self, Write};

use crate::github::UserProfile;

/// Print the full record for one user.
pub fn write_profile(out: &mut impl Write, heading: &str, profile: &UserProfile) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", heading)?;
    writeln!(out, "Username: {}", profile.username)?;
    writeln!(out, "Followers: {}", profile.followers)?;
    writeln!(out, "Following: {}", profile.following)?;
    writeln!(out, "Created at: {}", profile.created_at)?;
    writeln!(out, "Public repositories:")?;
    if profile.repositories.is_empty() {
        writeln!(out, "No repositories found.")?;
    } else {
        for name in &profile.repositories {
            writeln!(out, "- {}", name)?;
        }
    }
    Ok(())
}

/// Print one line per user, optionally with a suffix per entry.
pub fn write_user_list<'a, I>(out: &mut impl Write, heading: &str, users: I) -> io::Result<()>
where
    I: IntoIterator<Item = (&'a UserProfile, Option<String>)>,
{
    writeln!(out)?;
    writeln!(out, "--- {} ---", heading)?;
    for (profile, suffix) in users {
        match suffix {
            Some(suffix) => writeln!(out, "- {} ({})", profile.username, suffix)?,
            None => writeln!(out, "- {}", profile.username)?,
        }
    }
    Ok(())
}
