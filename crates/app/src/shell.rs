//! Line-oriented shell driving the site from stdin

use etumlabs_core::{ApplicationAction, ModerationAction, RegistrationForm, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::render;
use crate::routes::Route;
use crate::site::Site;
use crate::viewmodel::ViewMode;

const HELP: &str = "\
Commands:
  open <path>                      go to a page, e.g. open /events
  login <username> <password>      sign in as the organizer
  logout                           end the session
  register <username> <email> <minecraft> <password> <confirm> <yes|no>
  month <year> <1-12>              show a month on the events page
  next | prev                      step the calendar by one month
  view calendar|list               switch the events layout
  select <YYYY-MM-DD>              list the events of one day
  category <token>                 gallery tab (all, event, build, community, server)
  media <id> | close               open or close a gallery item
  approve|reject <id>              decide a team application
  resolve|escalate|dismiss <id>    act on a moderation entry
  edit <email> <minecraft>         edit the profile
  password <current> <new> <confirm>
  save | cancel                    finish editing the profile
  menu                             toggle the navigation menu
  show | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open(String),
    Login { username: String, password: String },
    Logout,
    Register(RegistrationForm),
    Month { year: i32, month: u32 },
    Next,
    Prev,
    View(ViewMode),
    Select(String),
    Category(String),
    Media(u32),
    Close,
    Application(u32, ApplicationAction),
    Moderation(u32, ModerationAction),
    Edit { email: String, minecraft_username: String },
    Password { current: String, new: String, confirm: String },
    Save,
    Cancel,
    Menu,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. The error is a usage hint for the user.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let usage = |text: &str| Err(format!("usage: {}", text));

        let command = match words.as_slice() {
            ["open", path] => Command::Open(path.to_string()),
            ["login", username, password] => Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            },
            ["login", ..] => return usage("login <username> <password>"),
            ["logout"] => Command::Logout,
            ["register", username, email, minecraft, password, confirm, agree] => {
                Command::Register(RegistrationForm {
                    username: username.to_string(),
                    email: email.to_string(),
                    minecraft_username: minecraft.to_string(),
                    password: password.to_string(),
                    confirm_password: confirm.to_string(),
                    agree_to_terms: matches!(*agree, "yes" | "y" | "true"),
                    subscribe_newsletter: false,
                })
            }
            ["register", ..] => {
                return usage("register <username> <email> <minecraft> <password> <confirm> <yes|no>")
            }
            ["month", year, month] => {
                let year = year.parse().map_err(|_| "year must be a number".to_string())?;
                let month: u32 = month.parse().map_err(|_| "month must be 1-12".to_string())?;
                if !(1..=12).contains(&month) {
                    return Err("month must be 1-12".to_string());
                }
                Command::Month {
                    year,
                    month: month - 1,
                }
            }
            ["next"] => Command::Next,
            ["prev"] => Command::Prev,
            ["view", mode] => match ViewMode::parse(mode) {
                Some(mode) => Command::View(mode),
                None => return usage("view calendar|list"),
            },
            ["select", date] => Command::Select(date.to_string()),
            ["category", token] => Command::Category(token.to_string()),
            ["media", id] => Command::Media(parse_id(id)?),
            ["close"] => Command::Close,
            ["approve", id] => Command::Application(parse_id(id)?, ApplicationAction::Approve),
            ["reject", id] => Command::Application(parse_id(id)?, ApplicationAction::Reject),
            ["resolve", id] => Command::Moderation(parse_id(id)?, ModerationAction::Resolve),
            ["escalate", id] => Command::Moderation(parse_id(id)?, ModerationAction::Escalate),
            ["dismiss", id] => Command::Moderation(parse_id(id)?, ModerationAction::Dismiss),
            ["edit", email, minecraft] => Command::Edit {
                email: email.to_string(),
                minecraft_username: minecraft.to_string(),
            },
            ["password", current, new, confirm] => Command::Password {
                current: current.to_string(),
                new: new.to_string(),
                confirm: confirm.to_string(),
            },
            ["save"] => Command::Save,
            ["cancel"] => Command::Cancel,
            ["menu"] => Command::Menu,
            ["show"] => Command::Show,
            ["help"] => Command::Help,
            ["quit"] | ["exit"] => Command::Quit,
            _ => return Err(format!("unknown command: {} (try help)", line.trim())),
        };
        Ok(command)
    }
}

fn parse_id(word: &str) -> std::result::Result<u32, String> {
    word.parse().map_err(|_| format!("not an id: {}", word))
}

/// Enter a protected page first; false when the gate sent us elsewhere
fn enter(site: &mut Site, route: Route) -> Result<bool> {
    let landed = site.go(route.clone())?;
    if landed != route {
        println!("Not signed in.");
        return Ok(false);
    }
    Ok(true)
}

/// Apply one command to the site
pub async fn execute(site: &mut Site, command: Command) -> Result<()> {
    debug!(?command, "Executing");
    match command {
        Command::Open(path) => {
            site.open(&path)?;
        }
        Command::Login { username, password } => {
            site.go(Route::Login)?;
            site.login(&username, &password).await?;
        }
        Command::Logout => {
            site.logout()?;
        }
        Command::Register(form) => {
            site.go(Route::Register)?;
            site.register(&form).await?;
        }
        Command::Month { year, month } => {
            site.go(Route::Events)?;
            site.events_mut().show_month(year, month)?;
        }
        Command::Next => {
            site.go(Route::Events)?;
            site.events_mut().next_month()?;
        }
        Command::Prev => {
            site.go(Route::Events)?;
            site.events_mut().previous_month()?;
        }
        Command::View(mode) => {
            site.go(Route::Events)?;
            site.events_mut().set_mode(mode);
        }
        Command::Select(key) => {
            site.go(Route::Events)?;
            site.events_mut().select(&key)?;
        }
        Command::Category(token) => {
            site.go(Route::Gallery)?;
            site.gallery_mut().select_category(&token);
        }
        Command::Media(id) => {
            site.go(Route::Gallery)?;
            if !site.gallery_mut().select_item(id) {
                println!("No media item #{}", id);
            }
        }
        Command::Close => {
            site.go(Route::Gallery)?;
            site.gallery_mut().close_item();
        }
        Command::Application(id, action) => {
            if enter(site, Route::Admin)? && !site.application_action(id, action) {
                println!("No application #{}", id);
            }
        }
        Command::Moderation(id, action) => {
            if enter(site, Route::Admin)? && !site.moderation_action(id, action) {
                println!("No moderation entry #{}", id);
            }
        }
        Command::Edit {
            email,
            minecraft_username,
        } => {
            if enter(site, Route::Profile)? {
                site.edit_profile(|form| {
                    form.email = email;
                    form.minecraft_username = minecraft_username;
                });
            }
        }
        Command::Password {
            current,
            new,
            confirm,
        } => {
            if enter(site, Route::Profile)? {
                site.edit_profile(|form| {
                    form.current_password = current;
                    form.new_password = new;
                    form.confirm_password = confirm;
                });
            }
        }
        Command::Save => {
            if enter(site, Route::Profile)? {
                site.save_profile().await?;
            }
        }
        Command::Cancel => {
            if enter(site, Route::Profile)? {
                site.cancel_profile_edit();
            }
        }
        Command::Menu => {
            site.nav_mut().toggle_menu();
            let state = if site.nav().is_menu_open() { "open" } else { "closed" };
            println!("Menu {}", state);
        }
        Command::Show | Command::Help | Command::Quit => {}
    }
    Ok(())
}

/// Read commands until EOF or `quit`
pub async fn run(site: &mut Site) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render::page(site));
    println!("Type `help` for commands.");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(hint) => {
                println!("{}", hint);
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            _ => {}
        }

        if let Err(e) = execute(site, command).await {
            warn!(error = %e, "Command failed");
            println!("! {}", e);
        }
        println!("{}", render::page(site));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::memory_state;
    use chrono::NaiveDate;
    use etumlabs_core::ModerationStatus;
    use std::sync::Arc;

    fn site() -> Site {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        Site::new(Arc::new(memory_state()), today)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("open /events").unwrap(),
            Command::Open("/events".to_string())
        );
        assert_eq!(
            Command::parse("month 2024 2").unwrap(),
            Command::Month { year: 2024, month: 1 }
        );
        assert_eq!(
            Command::parse("  dismiss 4 ").unwrap(),
            Command::Moderation(4, ModerationAction::Dismiss)
        );
        assert_eq!(Command::parse("view list").unwrap(), Command::View(ViewMode::List));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Command::parse("month 2024 13").is_err());
        assert!(Command::parse("month 2024 0").is_err());
        assert!(Command::parse("login onlyname").is_err());
        assert!(Command::parse("approve seven").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn test_parse_register() {
        let Command::Register(form) =
            Command::parse("register Steve s@x.io SteveMC abc abc yes").unwrap()
        else {
            panic!("expected register");
        };
        assert!(form.agree_to_terms);
        assert_eq!(form.minecraft_username, "SteveMC");
    }

    #[tokio::test]
    async fn test_admin_commands_need_session() {
        let mut site = site();
        execute(&mut site, Command::Moderation(1, ModerationAction::Resolve))
            .await
            .unwrap();
        assert_eq!(site.current(), &Route::Home);
        assert_eq!(
            site.admin_view().moderation()[0].status,
            ModerationStatus::Pending
        );

        execute(
            &mut site,
            Command::Login {
                username: "etumlabadmin".to_string(),
                password: "california".to_string(),
            },
        )
        .await
        .unwrap();
        execute(&mut site, Command::Moderation(1, ModerationAction::Resolve))
            .await
            .unwrap();
        assert_eq!(
            site.admin_view().moderation()[0].status,
            ModerationStatus::Resolved
        );
    }

    #[tokio::test]
    async fn test_gallery_item_open_and_close() {
        let mut site = site();
        execute(&mut site, Command::parse("media 3").unwrap()).await.unwrap();
        assert_eq!(site.current(), &Route::Gallery);
        assert_eq!(site.gallery().selected_item().map(|m| m.id), Some(3));

        execute(&mut site, Command::parse("close").unwrap()).await.unwrap();
        assert!(site.gallery().selected_item().is_none());
    }

    #[tokio::test]
    async fn test_calendar_commands() {
        let mut site = site();
        execute(&mut site, Command::parse("month 2024 12").unwrap()).await.unwrap();
        execute(&mut site, Command::Next).await.unwrap();
        assert_eq!(site.current(), &Route::Events);
        assert_eq!((site.events().month().year(), site.events().month().month()), (2025, 0));

        let bad = execute(&mut site, Command::Select("2024-02-30".to_string())).await;
        assert!(bad.is_err());
    }
}
