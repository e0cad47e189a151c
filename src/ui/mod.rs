// UI module for rendering shell output.
// Contains writers for the menu, user details, and user lists.

mod menu;
mod profile;

pub use menu::{MenuChoice, write_menu, write_prompt};
pub use profile::{write_profile, write_user_list};
