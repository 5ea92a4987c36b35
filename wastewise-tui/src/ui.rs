use chrono::Datelike;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};
use wastewise_core::{
    facility::facilities_of_kind,
    model::{ResolvedOccurrence, WasteStream},
};

use crate::app::{App, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new("wastewise – Abfuhrkalender & Ratgeber")
        .block(Block::default().borders(Borders::ALL).title("WasteWise"));
    frame.render_widget(header, *header_area);

    match app.screen {
        Screen::LocationSelect => draw_location_select(frame, app, *content_area),
        Screen::Upcoming => draw_upcoming(frame, app, *content_area),
        Screen::Calendar => draw_calendar(frame, app, *content_area),
        Screen::Guide => draw_guide(frame, app, *content_area),
        Screen::Facilities => draw_facilities(frame, app, *content_area),
    }

    let nav_hint = match app.screen {
        Screen::LocationSelect => "↑/↓ move · Enter select location · q/Ctrl-C quit",
        Screen::Upcoming => {
            "1-6 toggle streams · c calendar · g guide · f facilities · Esc back · q quit"
        }
        Screen::Calendar => "←/→ change month · Esc/b back · q quit",
        Screen::Guide => "Type to search · ↑/↓ browse · Esc back · Ctrl-C quit",
        Screen::Facilities => "↑/↓ move · Tab filter kind · Esc/b back · q quit",
    };

    let status = Paragraph::new(nav_hint)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_location_select(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = app
        .locations
        .iter()
        .enumerate()
        .map(|(idx, (postcode, city))| {
            let prefix = if idx == app.location_list_index {
                "> "
            } else {
                "  "
            };
            ListItem::new(format!("{prefix}{postcode} – {city}"))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select location (↑/↓, Enter)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.locations.is_empty() {
        state.select(Some(app.location_list_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_upcoming(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let postcode = app.postcode();
    let schedule = app.service.schedule_for(&postcode);
    let title = format!(
        "Upcoming collections – {} {} (today: {})",
        schedule.postcode,
        schedule.city,
        app.today.format("%d.%m.%Y")
    );

    let upcoming: Vec<ResolvedOccurrence> = app
        .service
        .upcoming(&postcode, app.today)
        .into_iter()
        .filter(|entry| app.prefs.is_enabled(entry.stream))
        .collect();

    let glass_line = if app.prefs.glass && app.service.glass_available(&postcode) {
        Some("Altglas: Container immer verfügbar")
    } else {
        None
    };

    if upcoming.is_empty() && glass_line.is_none() {
        let paragraph = Paragraph::new("No streams enabled, or nothing scheduled.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let mut rows: Vec<Row<'_>> = upcoming
        .into_iter()
        .map(|entry| {
            let date = entry.date.format("%d.%m.%Y").to_string();
            let weekday = german_weekday(entry.date.weekday().number_from_monday());
            let relative = relative_day_label(entry.date, app.today);
            let mut style = Style::default().fg(stream_color(entry.stream));
            if entry.date == app.today {
                style = style.add_modifier(Modifier::BOLD);
            }
            Row::new(vec![
                Cell::from(date),
                Cell::from(weekday),
                Cell::from(relative),
                Cell::from(stream_label(entry.stream)),
            ])
            .style(style)
        })
        .collect();

    if let Some(line) = glass_line {
        rows.push(
            Row::new(vec![
                Cell::from("–"),
                Cell::from("–"),
                Cell::from("–"),
                Cell::from(line),
            ])
            .style(Style::default().fg(Color::Cyan)),
        );
    }

    let column_widths = [
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Datum", "Tag", "In", "Abfallart"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn draw_calendar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let postcode = app.postcode();
    let schedule = app.service.schedule_for(&postcode);
    let title = format!(
        "{} {} – {} (←/→)",
        german_month(app.calendar_month),
        app.calendar_year,
        schedule.city
    );

    let entries: Vec<ResolvedOccurrence> = app
        .service
        .month_calendar(&postcode, app.calendar_year, app.calendar_month)
        .into_iter()
        .filter(|entry| app.prefs.is_enabled(entry.stream))
        .collect();

    if entries.is_empty() {
        let paragraph = Paragraph::new("No collections in this month for the enabled streams.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem<'_>> = entries
        .into_iter()
        .map(|entry| {
            let weekday = german_weekday(entry.date.weekday().number_from_monday());
            let line = format!(
                "{:>2}. {weekday:<10} {}",
                entry.day_of_month,
                stream_label(entry.stream)
            );
            ListItem::new(line).style(Style::default().fg(stream_color(entry.stream)))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_guide(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search input
            Constraint::Min(0),    // list + detail
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [input_area, body_area] = chunks else {
        return;
    };

    let input = Paragraph::new(app.guide_query.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Abfallart suchen…"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(input, *input_area);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(*body_area);

    let body = body_chunks.as_ref();
    let [list_area, detail_area] = body else {
        return;
    };

    let entries = app.guide_entries();

    let items: Vec<ListItem<'_>> = if entries.is_empty() {
        vec![ListItem::new("No category matches the search.")]
    } else {
        entries
            .iter()
            .map(|entry| ListItem::new(format!("{} – {}", entry.name, entry.description)))
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Abfallkategorien"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !entries.is_empty() {
        state.select(Some(app.guide_list_index.min(entries.len() - 1)));
    }
    frame.render_stateful_widget(list, *list_area, &mut state);

    let detail_text = entries
        .get(app.guide_list_index)
        .map_or_else(String::new, |entry| {
            format!(
                "{}\n\nDas gehört hinein:\n  {}\n\nDas gehört nicht hinein:\n  {}\n\nTipp: {}",
                entry.description,
                entry.belongs.join(", "),
                entry.forbidden.join(", "),
                entry.tip
            )
        });

    let detail = Paragraph::new(detail_text)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: true });
    frame.render_widget(detail, *detail_area);
}

fn draw_facilities(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let listings = facilities_of_kind(app.facility_filter);
    let filter_label = app
        .facility_filter
        .map_or_else(|| String::from("Alle"), |kind| kind.to_string());
    let title = format!("Recycling-Einrichtungen – {filter_label} (Tab)");

    let items: Vec<ListItem<'_>> = if listings.is_empty() {
        vec![ListItem::new("No facilities of this kind nearby.")]
    } else {
        listings
            .iter()
            .map(|entry| {
                let phone = entry
                    .phone
                    .as_deref()
                    .map_or_else(String::new, |number| format!(" · {number}"));
                ListItem::new(format!(
                    "{} [{}]\n  {} · {}{}\n  Nimmt an: {}",
                    entry.name,
                    entry.kind,
                    entry.address,
                    entry.hours,
                    phone,
                    entry.accepted.join(", ")
                ))
            })
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !listings.is_empty() {
        state.select(Some(app.facility_list_index.min(listings.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn stream_label(stream: WasteStream) -> &'static str {
    match stream {
        WasteStream::Residual => "Restmüll",
        WasteStream::Organic => "Biomüll",
        WasteStream::PaperBin => "Papiertonne",
        WasteStream::LegacyPaper => "Altpapier",
        WasteStream::Packaging => "Gelber Sack",
    }
}

fn stream_color(stream: WasteStream) -> Color {
    match stream {
        WasteStream::Residual => Color::Gray,
        WasteStream::Organic => Color::Green,
        WasteStream::PaperBin => Color::Blue,
        WasteStream::LegacyPaper => Color::LightBlue,
        WasteStream::Packaging => Color::Yellow,
    }
}

fn german_weekday(number_from_monday: u32) -> &'static str {
    match number_from_monday {
        1 => "Montag",
        2 => "Dienstag",
        3 => "Mittwoch",
        4 => "Donnerstag",
        5 => "Freitag",
        6 => "Samstag",
        _ => "Sonntag",
    }
}

fn german_month(month: u32) -> &'static str {
    match month {
        1 => "Januar",
        2 => "Februar",
        3 => "März",
        4 => "April",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "August",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        _ => "Dezember",
    }
}

fn relative_day_label(date: chrono::NaiveDate, today: chrono::NaiveDate) -> String {
    let delta = (date - today).num_days();
    match delta {
        0 => "heute".to_owned(),
        1 => "morgen".to_owned(),
        days => format!("{days} Tagen"),
    }
}
