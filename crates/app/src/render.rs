//! Plain-text page rendering

use etumlabs_core::calendar::{DAYS_PER_WEEK, WEEKDAY_LABELS};
use etumlabs_core::{Cell, Event, EventStatus, ModerationSubject, PresentationTags};

use crate::routes::Route;
use crate::site::Site;
use crate::viewmodel::{ViewMode, ViewOutcome};

/// Render the navigation bar and the current page
pub fn page(site: &Site) -> String {
    let mut out = Vec::new();
    nav_bar(site, &mut out);
    out.push(String::new());

    match site.current() {
        Route::Home => home(site, &mut out),
        Route::About => {
            out.push("About EtumLabs".to_string());
            out.push("A Minecraft community hosting competitions and workshops.".to_string());
        }
        Route::Contact => {
            out.push("Contact".to_string());
            out.push("Questions about an event? Reach the organizers through the community Discord.".to_string());
        }
        Route::Events => events(site, &mut out),
        Route::EventDetail(id) => event_detail(site, id, &mut out),
        Route::Gallery => gallery(site, &mut out),
        Route::News => news(site, &mut out),
        Route::Login => login(site, &mut out),
        Route::Register => register(site, &mut out),
        Route::Profile => profile(site, &mut out),
        Route::Admin => admin(site, &mut out),
    }

    out.join("\n")
}

fn nav_bar(site: &Site, out: &mut Vec<String>) {
    let nav = site.nav();
    let links: Vec<String> = nav
        .items()
        .iter()
        .map(|(name, path)| {
            if nav.is_active(path) {
                format!("[{}]", name)
            } else {
                name.to_string()
            }
        })
        .collect();
    let auth: Vec<&str> = nav.auth_links().iter().map(|l| l.label()).collect();
    out.push(format!("EtumLabs | {} | {}", links.join(" "), auth.join(" ")));
}

fn event_line(event: &Event, tags: &PresentationTags) -> String {
    let action = match event.status() {
        EventStatus::Open => format!("Register ({} slots left)", event.open_slots()),
        EventStatus::Full => "Event Full".to_string(),
        EventStatus::Completed => "Completed".to_string(),
    };
    format!(
        "#{} {} [{}] {} {} @ {} {}/{} [{}] {}",
        event.id,
        event.title,
        tags.event_type(event.event_type),
        event.date_key(),
        event.time,
        event.server,
        event.participants,
        event.max_participants,
        tags.event_status(event.status()),
        action
    )
}

fn home(site: &Site, out: &mut Vec<String>) {
    out.push("Welcome to EtumLabs".to_string());
    out.push("Upcoming events:".to_string());
    let tags = &site.state().tags;
    for event in site.events().all_events().iter().filter(|e| e.accepts_registrations()).take(3) {
        out.push(format!("  {}", event_line(event, tags)));
    }
}

fn events(site: &Site, out: &mut Vec<String>) {
    let vm = site.events();
    let tags = &site.state().tags;

    match vm.mode() {
        ViewMode::List => {
            out.push("Events (list)".to_string());
            for event in vm.all_events() {
                out.push(format!("  {}", event_line(event, tags)));
            }
        }
        ViewMode::Calendar => {
            out.push(format!("Events (calendar) {}", vm.month().title()));
            out.push(
                WEEKDAY_LABELS
                    .iter()
                    .map(|l| format!("{:>5}", l))
                    .collect::<String>(),
            );

            let cells = vm.cells();
            for row in cells.chunks(DAYS_PER_WEEK) {
                let line: String = row
                    .iter()
                    .map(|day| match day.cell {
                        Cell::Empty => "     ".to_string(),
                        Cell::Day { day: n, date } => {
                            let mark = if vm.selected() == Some(date) {
                                '>'
                            } else if vm.is_today(date) {
                                '*'
                            } else if day.has_events() {
                                '+'
                            } else {
                                ' '
                            };
                            format!("{:>4}{}", n, mark)
                        }
                    })
                    .collect();
                out.push(line);
            }

            for day in cells.iter().filter(|d| d.has_events()) {
                if let Some(date) = day.cell.date() {
                    let titles: Vec<&str> = day.preview().map(|e| e.title.as_str()).collect();
                    let mut line = format!("  {}: {}", date.format("%b %-d"), titles.join(", "));
                    if day.overflow() > 0 {
                        line.push_str(&format!(" +{} more", day.overflow()));
                    }
                    out.push(line);
                }
            }
        }
    }

    if let Some(date) = vm.selected() {
        out.push(String::new());
        out.push(format!("Events on {}", date.format("%A, %B %-d, %Y")));
        let selected = vm.selected_events();
        if selected.is_empty() {
            out.push("  No events scheduled".to_string());
        }
        for event in selected {
            out.push(format!("  {}", event_line(event, tags)));
        }
    }
}

fn event_detail(site: &Site, id: &str, out: &mut Vec<String>) {
    let Ok(detail) = site.state().catalog.event_detail(id) else {
        out.push("Event not found".to_string());
        return;
    };
    out.push(event_line(&detail.event, &site.state().tags));
    out.push(format!("Organized by {}", detail.organizer));
    for paragraph in detail.paragraphs() {
        out.push(String::new());
        out.push(paragraph.to_string());
    }
    if !detail.rules.is_empty() {
        out.push(String::new());
        out.push("Rules:".to_string());
        out.extend(detail.rules.iter().map(|r| format!("  - {}", r)));
    }
    if !detail.prizes.is_empty() {
        out.push("Prizes:".to_string());
        out.extend(detail.prizes.iter().map(|p| format!("  - {}", p)));
    }
}

fn gallery(site: &Site, out: &mut Vec<String>) {
    let vm = site.gallery();
    let tags = &site.state().tags;

    let tabs: Vec<String> = crate::viewmodel::GalleryViewModel::tabs()
        .into_iter()
        .map(|t| if t == vm.category() { format!("[{}]", t) } else { t.to_string() })
        .collect();
    out.push(format!("Gallery | {}", tabs.join(" ")));

    let featured: Vec<&str> = vm.featured().into_iter().map(|m| m.title.as_str()).collect();
    out.push(format!("Featured: {}", featured.join(", ")));

    let items = vm.items();
    if items.is_empty() {
        out.push("  Nothing in this category".to_string());
    }
    for item in items {
        out.push(format!(
            "  #{} ({}) {} [{}] by {} {} likes {} views",
            item.id,
            tags.media_type(item.media_type),
            item.title,
            tags.media_category(item.category),
            item.author,
            item.likes,
            item.views
        ));
    }

    if let Some(item) = vm.selected_item() {
        out.push(String::new());
        out.push(format!("{}: {}", item.title, item.description));
        if let Some(event) = &item.event_name {
            out.push(format!("Captured at {}", event));
        }
    }
}

fn news(site: &Site, out: &mut Vec<String>) {
    let tags = &site.state().tags;
    let (featured, regular) = site.news().sections();
    out.push("Featured news".to_string());
    for article in featured.into_iter().chain(regular) {
        out.push(format!(
            "  {} [{}] {} by {} ({})",
            article.date,
            tags.news_category(article.category),
            article.title,
            article.author,
            article.read_time
        ));
        out.push(format!("    {}", article.excerpt));
    }
}

fn login(site: &Site, out: &mut Vec<String>) {
    let vm = site.login_view();
    out.push("Admin login".to_string());
    if vm.is_loading() {
        out.push("Signing in...".to_string());
    }
    if let Some(error) = vm.error() {
        out.push(format!("! {}", error));
    }
    out.push("Use: login <username> <password>".to_string());
}

fn register(site: &Site, out: &mut Vec<String>) {
    let vm = site.register_view();
    if vm.is_success() {
        out.push("Registration successful! Welcome to EtumLabs.".to_string());
        return;
    }
    out.push("Create an account".to_string());
    if vm.is_loading() {
        out.push("Creating account...".to_string());
    }
    if let Some(error) = vm.error() {
        out.push(format!("! {}", error));
    }
    out.push("Use: register <username> <email> <minecraft> <password> <confirm> <agree:yes|no>".to_string());
}

fn profile(site: &Site, out: &mut Vec<String>) {
    let vm = site.profile_view();
    if vm.outcome() != ViewOutcome::Render {
        out.push("Loading profile...".to_string());
        return;
    }
    let tags = &site.state().tags;
    let profile = vm.profile();

    out.push(format!("{} ({})", profile.username, profile.minecraft_username));
    out.push(format!("Email: {}", profile.email));
    out.push(format!("Joined {}", profile.join_date));
    out.push(format!(
        "Events: {} played, {} won ({}% win rate)",
        profile.events_participated,
        profile.events_won,
        profile.win_rate()
    ));
    out.push(format!(
        "Playtime {} | favorite server {} | last seen {}",
        profile.stats.total_playtime, profile.stats.favorite_server, profile.stats.last_seen
    ));
    for badge in profile.highlighted_badges() {
        out.push(format!("  {} {} [{}]", badge.icon, badge.name, tags.badge_rarity(badge.rarity)));
    }

    if vm.is_editing() {
        let form = vm.form();
        out.push(format!(
            "Editing: email={} minecraft={}",
            form.email, form.minecraft_username
        ));
    }
    if vm.is_saving() {
        out.push("Saving...".to_string());
    }
    if let Some(message) = vm.message() {
        out.push(message);
    }
}

fn admin(site: &Site, out: &mut Vec<String>) {
    let vm = site.admin_view();
    if vm.outcome() != ViewOutcome::Render {
        out.push("Loading dashboard...".to_string());
        return;
    }
    let stats = vm.stats();

    out.push("Admin dashboard".to_string());
    out.push(format!(
        "Players {} | active events {} | servers {}/{} online | playtime {}",
        stats.total_players,
        stats.active_events,
        stats.online_servers,
        stats.total_servers,
        stats.total_playtime
    ));
    out.push(format!(
        "Applications ({} pending):",
        vm.pending_applications()
    ));
    for app in vm.applications() {
        out.push(format!(
            "  #{} {} ({}) for {} [{:?}]",
            app.id, app.username, app.minecraft_username, app.role, app.status
        ));
    }
    out.push(format!("Moderation ({} open):", vm.open_reports()));
    for item in vm.moderation() {
        out.push(format!(
            "  #{} {} - {} [{:?}, {:?}]",
            item.id,
            moderation_subject(&item.subject),
            item.reason,
            item.priority,
            item.status
        ));
    }
}

fn moderation_subject(subject: &ModerationSubject) -> String {
    match subject {
        ModerationSubject::Report {
            reporter, reported, ..
        } => format!("{} reported {}", reporter, reported),
        ModerationSubject::Appeal { username, .. } => format!("appeal from {}", username),
    }
}
