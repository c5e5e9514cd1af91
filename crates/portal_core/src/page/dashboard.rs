//! Dashboard: headline metrics and short previews of every collection.

use super::members::leaderboard;
use super::{cards_or_empty, Action, PageController, PageKind};
use crate::env::Environment;
use crate::model::labels::changelog_type_label;
use crate::model::{Catalog, Event};
use crate::repo::lookup::{find_member, resolve};
use crate::view::format::{
    format_day_month, format_short_date, initials, member_name, pluralize,
};
use crate::view::{Badge, Block, Card, MetricCard, PageView, Region};
use chrono::NaiveDate;

const RECENT_RFCS: usize = 5;
const UPCOMING_EVENTS: usize = 4;
const RECENT_CHANGES: usize = 5;
const TOP_CONTRIBUTORS: usize = 5;

pub struct DashboardController {
    catalog: Catalog,
    today: NaiveDate,
}

impl DashboardController {
    pub fn new(catalog: Catalog, env: &dyn Environment) -> Self {
        Self {
            catalog,
            today: env.today(),
        }
    }

    /// Future events, soonest first, capped at four.
    pub fn upcoming_events(&self) -> Vec<&Event> {
        let mut upcoming = self
            .catalog
            .events
            .iter()
            .filter(|event| event.is_upcoming(self.today))
            .collect::<Vec<_>>();
        upcoming.sort_by_key(|event| event.day());
        upcoming.truncate(UPCOMING_EVENTS);
        upcoming
    }

    fn metrics(&self) -> Region {
        let practices = &self.catalog.practices;
        let rfcs = &self.catalog.rfcs;
        let members = &self.catalog.members;

        let accepted = practices.iter().filter(|p| p.status == "accepted").count();
        let active_rfcs = rfcs
            .iter()
            .filter(|r| r.status == "draft" || r.status == "review")
            .count();
        let in_review = rfcs.iter().filter(|r| r.status == "review").count();
        let upcoming = self
            .catalog
            .events
            .iter()
            .filter(|event| event.is_upcoming(self.today))
            .count();
        let leads = members.iter().filter(|m| m.role == "lead").count();

        Region::new("dashboard-metrics").with(Block::Metrics(vec![
            MetricCard {
                label: "Принятых практик".to_string(),
                value: accepted.to_string(),
                icon: "✅".to_string(),
                trend: Some(format!("из {} всего", practices.len())),
            },
            MetricCard {
                label: "Активных RFC".to_string(),
                value: active_rfcs.to_string(),
                icon: "📝".to_string(),
                trend: Some(format!("{in_review} на ревью")),
            },
            MetricCard {
                label: "Ближайших событий".to_string(),
                value: upcoming.to_string(),
                icon: "📅".to_string(),
                trend: None,
            },
            MetricCard {
                label: "Участников".to_string(),
                value: members.len().to_string(),
                icon: "👥".to_string(),
                trend: Some(format!("{leads} лидов")),
            },
        ]))
    }

    fn recent_rfcs(&self) -> Region {
        let cards = self
            .catalog
            .rfcs
            .iter()
            .take(RECENT_RFCS)
            .map(|rfc| {
                let author = find_member(&self.catalog.members, &rfc.author);
                Card::new(format!("{} {}", rfc.label(), rfc.title))
                    .id(&rfc.id)
                    .badge(Badge::status(&rfc.status))
                    .meta(member_name(author, "Неизвестен"))
                    .meta(format_day_month(&rfc.created_at))
                    .link(format!("rfc.html#{}", rfc.hash_id()))
            })
            .collect();
        Region::new("dashboard-rfcs")
            .titled("Последние RFC")
            .linked("Все RFC", "rfc.html")
            .with(cards_or_empty(cards, "📝", "RFC пока нет"))
    }

    fn upcoming(&self) -> Region {
        let cards = self
            .upcoming_events()
            .into_iter()
            .map(|event| {
                let mut card = Card::new(&event.title)
                    .id(&event.id)
                    .icon(format_short_date(&event.date))
                    .badge(Badge::event_type(&event.kind));
                if let Some(profession) = &event.profession {
                    card = card.badge(Badge::profession(profession, &self.catalog.professions));
                }
                card.meta(format!("{} · {}", event.time, event.duration))
                    .description(&event.description)
            })
            .collect();
        Region::new("dashboard-events")
            .titled("Ближайшие события")
            .linked("Все события", "events.html")
            .with(cards_or_empty(cards, "📅", "Нет ближайших событий"))
    }

    fn recent_changes(&self) -> Region {
        let cards = self
            .catalog
            .changelog
            .iter()
            .take(RECENT_CHANGES)
            .map(|entry| {
                let author = resolve(&self.catalog.members, Some(entry.author.as_str()));
                let profession = entry
                    .profession
                    .as_deref()
                    .map(|id| Badge::profession(id, &self.catalog.professions).label)
                    .unwrap_or_default();
                Card::new(&entry.description)
                    .id(&entry.id)
                    .badge(Badge::new(&entry.kind, changelog_type_label(&entry.kind)))
                    .meta(profession)
                    .meta(member_name(author, ""))
                    .meta(format_short_date(&entry.date))
            })
            .collect();
        Region::new("dashboard-changes")
            .titled("Последние изменения")
            .linked("Вся история", "changelog.html")
            .with(cards_or_empty(cards, "📜", "Изменений пока нет"))
    }

    fn announcements(&self) -> Option<Region> {
        if self.catalog.announcements.is_empty() {
            return None;
        }
        let cards = self
            .catalog
            .announcements
            .iter()
            .map(|announcement| {
                Card::new(&announcement.title)
                    .id(&announcement.id)
                    .meta(format_day_month(&announcement.date))
                    .description(&announcement.text)
                    .link(&announcement.link)
            })
            .collect();
        Some(
            Region::new("dashboard-announcements")
                .titled("Объявления")
                .with(Block::Cards(cards)),
        )
    }

    fn quick_links(&self) -> Region {
        let cards = self
            .catalog
            .professions
            .iter()
            .map(|profession| {
                Card::new(&profession.short_name)
                    .id(&profession.id)
                    .icon(&profession.icon)
                    .meta(&profession.name)
                    .link(format!("professions.html#{}", profession.id))
            })
            .collect();
        Region::new("dashboard-quicklinks")
            .titled("Сообщества")
            .with(Block::Cards(cards))
    }

    fn top_contributors(&self) -> Region {
        let cards = leaderboard(&self.catalog.members, TOP_CONTRIBUTORS)
            .into_iter()
            .map(|member| {
                Card::new(&member.name)
                    .id(&member.id)
                    .icon(initials(&member.name))
                    .meta(pluralize(
                        member.contributions,
                        "контрибуция",
                        "контрибуции",
                        "контрибуций",
                    ))
            })
            .collect();
        Region::new("dashboard-contributors")
            .titled("Активные контрибьюторы")
            .with(cards_or_empty(cards, "👥", "Участники не найдены"))
    }
}

impl PageController for DashboardController {
    fn kind(&self) -> PageKind {
        PageKind::Dashboard
    }

    fn view(&self) -> PageView {
        let mut view = PageView::new(PageKind::Dashboard.title())
            .with_region(self.metrics())
            .with_region(self.recent_rfcs())
            .with_region(self.upcoming())
            .with_region(self.recent_changes());
        if let Some(announcements) = self.announcements() {
            view = view.with_region(announcements);
        }
        view.with_region(self.quick_links())
            .with_region(self.top_contributors())
    }

    fn apply(&mut self, _action: &Action, _env: &mut dyn Environment) -> bool {
        false
    }
}
