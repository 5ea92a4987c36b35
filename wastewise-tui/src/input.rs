use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wastewise_core::facility::facilities_of_kind;
use wastewise_core::model::WasteStream;

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{Backspace, Char, Down, Enter, Esc, Left, Right, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() && app.screen != Screen::Guide {
        return Action::Quit;
    }

    match app.screen {
        Screen::LocationSelect => match key.code {
            Up | Char('k') => {
                if app.location_list_index > 0 {
                    app.location_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.location_list_index + 1 < app.locations.len() {
                    app.location_list_index += 1;
                }
            }
            Enter | Char(' ') => {
                app.select_current_location();
            }
            _ => {}
        },

        Screen::Upcoming => match key.code {
            Char('1') => app.prefs.toggle(WasteStream::Residual),
            Char('2') => app.prefs.toggle(WasteStream::Organic),
            Char('3') => app.prefs.toggle(WasteStream::PaperBin),
            Char('4') => app.prefs.toggle(WasteStream::LegacyPaper),
            Char('5') => app.prefs.toggle(WasteStream::Packaging),
            Char('6') => app.prefs.glass = !app.prefs.glass,
            Char('c') => app.screen = Screen::Calendar,
            Char('g') => {
                app.guide_query.clear();
                app.guide_list_index = 0;
                app.screen = Screen::Guide;
            }
            Char('f') => app.screen = Screen::Facilities,
            Left | Esc => {
                app.screen = Screen::LocationSelect;
            }
            _ => {}
        },

        Screen::Calendar => match key.code {
            Left => app.prev_month(),
            Right => app.next_month(),
            Esc | Char('b') => app.screen = Screen::Upcoming,
            _ => {}
        },

        Screen::Guide => match key.code {
            Up => {
                if app.guide_list_index > 0 {
                    app.guide_list_index -= 1;
                }
            }
            Down => {
                let count = app.guide_entries().len();
                if app.guide_list_index + 1 < count {
                    app.guide_list_index += 1;
                }
            }
            Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    app.guide_query.push(character);
                    app.guide_list_index = 0;
                }
            }
            Backspace => {
                app.guide_query.pop();
                app.guide_list_index = 0;
            }
            Esc => app.screen = Screen::Upcoming,
            _ => {}
        },

        Screen::Facilities => match key.code {
            Up | Char('k') => {
                if app.facility_list_index > 0 {
                    app.facility_list_index -= 1;
                }
            }
            Down | Char('j') => {
                let count = facilities_of_kind(app.facility_filter).len();
                if app.facility_list_index + 1 < count {
                    app.facility_list_index += 1;
                }
            }
            Tab => app.cycle_facility_filter(),
            Esc | Char('b') => app.screen = Screen::Upcoming,
            _ => {}
        },
    }

    Action::None
}
