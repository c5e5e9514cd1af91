//! Events page: list and calendar views, type and time-window filters,
//! month navigation, and event modals.

use super::{cards_or_empty, label_chips, set_filter, Action, PageController, PageKind};
use crate::env::Environment;
use crate::filter::{FilterState, TYPE};
use crate::model::labels::{event_type_label, EVENT_TYPE_LABELS};
use crate::model::{Catalog, Event, Member, Profession};
use crate::repo::lookup::{find_by_id, resolve};
use crate::view::format::{
    days_in_month, format_date, format_short_date, leading_blanks, month_name, weekday_names,
};
use crate::view::{
    Badge, Block, CalendarCell, CalendarEntry, CalendarView, Card, ChipRow, Field, Link, Modal,
    PageView, Region,
};
use chrono::{Datelike, NaiveDate};
use std::cmp::Reverse;

const FILTER_KEYS: &[&str] = &[TYPE];
pub const TIME_KEY: &str = "time";

/// Calendar month position; `month0` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year,
            month0: month0 % 12,
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    /// One month forward; December rolls over to January of the next year.
    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self::new(self.year + 1, 0)
        } else {
            Self::new(self.year, self.month0 + 1)
        }
    }

    /// One month back; January rolls over to December of the previous year.
    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            Self::new(self.year - 1, 11)
        } else {
            Self::new(self.year, self.month0 - 1)
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// `Март 2025`.
    pub fn label(self) -> String {
        format!("{} {}", month_name(self.month0), self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    #[default]
    Upcoming,
    Past,
}

impl TimeWindow {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upcoming" => Some(Self::Upcoming),
            "past" => Some(Self::Past),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Past => "past",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventsView {
    #[default]
    List,
    Calendar,
}

impl EventsView {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "list" => Some(Self::List),
            "calendar" => Some(Self::Calendar),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Calendar => "calendar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EventsModal {
    Event(String),
    /// Several events share one calendar day.
    Day(u32),
}

pub struct EventsController {
    events: Vec<Event>,
    members: Vec<Member>,
    professions: Vec<Profession>,
    filters: FilterState,
    window: TimeWindow,
    mode: EventsView,
    cursor: MonthCursor,
    today: NaiveDate,
    selected_day: Option<u32>,
    modal: Option<EventsModal>,
}

impl EventsController {
    pub fn new(catalog: Catalog, env: &dyn Environment) -> Self {
        let today = env.today();
        Self {
            events: catalog.events,
            members: catalog.members,
            professions: catalog.professions,
            filters: FilterState::new(),
            window: TimeWindow::default(),
            mode: EventsView::default(),
            cursor: MonthCursor::containing(today),
            today,
            selected_day: None,
            modal: None,
        }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Filtered list: upcoming soonest first, past most recent first.
    pub fn visible(&self) -> Vec<&Event> {
        let upcoming = self.window == TimeWindow::Upcoming;
        let mut visible = self
            .filters
            .apply(&self.events)
            .into_iter()
            .filter(|event| event.is_upcoming(self.today) == upcoming)
            .collect::<Vec<_>>();
        if upcoming {
            visible.sort_by_key(|event| event.day());
        } else {
            visible.sort_by_key(|event| Reverse(event.day()));
        }
        visible
    }

    /// Every event in the cursor month on `day`, regardless of filters.
    pub fn events_on(&self, day: u32) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| {
                event
                    .day()
                    .is_some_and(|date| self.cursor.contains(date) && date.day() == day)
            })
            .collect()
    }

    fn event_card(&self, event: &Event) -> Card {
        let mut card = Card::new(&event.title)
            .id(&event.id)
            .icon(format_short_date(&event.date))
            .badge(Badge::event_type(&event.kind));
        if let Some(profession) = &event.profession {
            card = card.badge(Badge::profession(profession, &self.professions));
        }
        if let Some(speaker) = resolve(&self.members, event.speaker.as_deref()) {
            card = card.meta(&speaker.name);
        }
        card.meta(format!("{} · {}", event.time, event.duration))
            .description(&event.description)
    }

    fn calendar(&self) -> CalendarView {
        let mut cells = (0..leading_blanks(self.cursor.year, self.cursor.month0))
            .map(|_| CalendarCell::default())
            .collect::<Vec<_>>();
        for day in 1..=days_in_month(self.cursor.year, self.cursor.month0) {
            let date = NaiveDate::from_ymd_opt(self.cursor.year, self.cursor.month0 + 1, day);
            cells.push(CalendarCell {
                day: Some(day),
                today: date == Some(self.today),
                selected: self.selected_day == Some(day),
                events: self
                    .events_on(day)
                    .into_iter()
                    .map(|event| CalendarEntry {
                        id: event.id.clone(),
                        title: event.title.clone(),
                        kind: event.kind.clone(),
                    })
                    .collect(),
            });
        }
        CalendarView {
            title: self.cursor.label(),
            weekdays: weekday_names().iter().map(|name| name.to_string()).collect(),
            cells,
        }
    }

    fn event_modal(&self, event: &Event) -> Modal {
        let mut badges = vec![Badge::event_type(&event.kind)];
        if let Some(profession) = &event.profession {
            badges.push(Badge::profession(profession, &self.professions));
        }

        let mut fields = vec![
            Field::new("Дата", format!("{} · {}", format_date(&event.date), event.time)),
            Field::new(
                "Длительность",
                if event.duration.is_empty() { "—" } else { event.duration.as_str() },
            ),
        ];
        if let Some(speaker) = resolve(&self.members, event.speaker.as_deref()) {
            fields.push(Field::new("Спикер", &speaker.name));
        }
        if let Some(location) = &event.location {
            fields.push(Field::new("Место", location));
        }

        let mut modal = Modal::new(&event.title)
            .with(Block::Badges(badges))
            .with(Block::Fields(fields));
        if !event.description.is_empty() {
            modal.push(Block::Text(event.description.clone()));
        }
        if let Some(link) = &event.link {
            modal.push(Block::Links(vec![Link::new("Ссылка на событие →", link)]));
        }
        modal
    }

    fn day_modal(&self, day: u32) -> Modal {
        let cards = self
            .events_on(day)
            .into_iter()
            .map(|event| {
                Card::new(&event.title)
                    .id(&event.id)
                    .badge(Badge::new(&event.kind, event_type_label(&event.kind)))
                    .meta(&event.time)
            })
            .collect();
        Modal::new(format!("{day} {}", month_name(self.cursor.month0))).with(Block::Cards(cards))
    }

    fn set_modal(&mut self, modal: Option<EventsModal>) -> bool {
        let changed = modal != self.modal;
        self.modal = modal;
        changed
    }
}

impl PageController for EventsController {
    fn kind(&self) -> PageKind {
        PageKind::Events
    }

    fn view(&self) -> PageView {
        let toolbar = Region::new("events-toolbar")
            .with(Block::Chips(ChipRow::build(
                "view",
                self.mode.as_str(),
                [("list", "Список"), ("calendar", "Календарь")],
            )))
            .with(Block::Chips(label_chips(
                TYPE,
                self.filters.get(TYPE),
                EVENT_TYPE_LABELS,
            )))
            .with(Block::Chips(ChipRow::build(
                TIME_KEY,
                self.window.as_str(),
                [("upcoming", "Предстоящие"), ("past", "Прошедшие")],
            )));

        let content = Region::new("events-content").with(match self.mode {
            EventsView::List => {
                let cards = self
                    .visible()
                    .into_iter()
                    .map(|event| self.event_card(event))
                    .collect();
                cards_or_empty(cards, "📅", "Событий не найдено")
            }
            EventsView::Calendar => Block::Calendar(self.calendar()),
        });

        let mut view = PageView::new(PageKind::Events.title())
            .with_region(toolbar)
            .with_region(content);
        view.modal = match &self.modal {
            Some(EventsModal::Event(id)) => {
                find_by_id(self.events.as_slice(), id).map(|event| self.event_modal(event))
            }
            Some(EventsModal::Day(day)) => Some(self.day_modal(*day)),
            None => None,
        };
        view
    }

    fn apply(&mut self, action: &Action, env: &mut dyn Environment) -> bool {
        match action {
            Action::SetFilter { key, value } if key == TIME_KEY => {
                match TimeWindow::parse(value) {
                    Some(window) if window != self.window => {
                        self.window = window;
                        true
                    }
                    _ => false,
                }
            }
            Action::SetFilter { key, value } => set_filter(&mut self.filters, FILTER_KEYS, key, value),
            Action::SetView(mode) => match EventsView::parse(mode) {
                Some(mode) if mode != self.mode => {
                    self.mode = mode;
                    true
                }
                _ => false,
            },
            Action::PrevMonth => {
                self.cursor = self.cursor.prev();
                self.selected_day = None;
                true
            }
            Action::NextMonth => {
                self.cursor = self.cursor.next();
                self.selected_day = None;
                true
            }
            Action::SelectDay(day) => {
                if *day == 0 || *day > days_in_month(self.cursor.year, self.cursor.month0) {
                    return false;
                }
                self.selected_day = Some(*day);
                let on_day = self.events_on(*day);
                let modal = match on_day.as_slice() {
                    [] => None,
                    [only] => Some(EventsModal::Event(only.id.clone())),
                    _ => Some(EventsModal::Day(*day)),
                };
                match &modal {
                    Some(EventsModal::Event(id)) => env.set_fragment(Some(id.as_str())),
                    _ => env.set_fragment(None),
                }
                self.set_modal(modal);
                true
            }
            Action::Select(id) => {
                if find_by_id(self.events.as_slice(), id).is_none() {
                    return false;
                }
                env.set_fragment(Some(id.as_str()));
                self.on_hash_change(env)
            }
            Action::CloseDetail => {
                env.set_fragment(None);
                self.set_modal(None)
            }
            _ => false,
        }
    }

    /// A fragment naming a known event opens its modal and an empty one
    /// closes it. Day modals are not bound to the fragment.
    fn on_hash_change(&mut self, env: &dyn Environment) -> bool {
        match env.fragment() {
            Some(id) if find_by_id(self.events.as_slice(), &id).is_some() => {
                self.set_modal(Some(EventsModal::Event(id)))
            }
            None if matches!(self.modal, Some(EventsModal::Event(_))) => self.set_modal(None),
            _ => false,
        }
    }

    fn has_detail(&self) -> bool {
        self.modal.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{MonthCursor, TimeWindow};

    #[test]
    fn cursor_label_uses_nominative_month() {
        assert_eq!(MonthCursor::new(2025, 2).label(), "Март 2025");
    }

    #[test]
    fn time_window_parses_known_values_only() {
        assert_eq!(TimeWindow::parse("past"), Some(TimeWindow::Past));
        assert_eq!(TimeWindow::parse("all"), None);
    }
}
