//! Rendering adapters turning view descriptions into host output.

use super::{
    AccordionItem, Badge, Block, CalendarView, Card, ChipRow, Matrix, Modal, PageView, Region,
    SearchPanel,
};

/// Swappable output adapter; controllers never depend on it.
pub trait Renderer {
    type Output;

    fn render_page(&self, view: &PageView) -> Self::Output;
    fn render_search(&self, panel: &SearchPanel) -> Self::Output;
}

/// Plain-text adapter used by the command-line host.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// Adds styling variants next to badges, e.g. `[Ревью|review]`.
    pub show_kinds: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn region(&self, out: &mut String, region: &Region) {
        if let Some(title) = &region.title {
            match &region.link {
                Some(link) => out.push_str(&format!("## {title}  ({} → {})\n", link.label, link.href)),
                None => out.push_str(&format!("## {title}\n")),
            }
        }
        for block in &region.blocks {
            self.block(out, block);
        }
        out.push('\n');
    }

    fn block(&self, out: &mut String, block: &Block) {
        match block {
            Block::Heading(text) => out.push_str(&format!("### {text}\n")),
            Block::Text(text) => out.push_str(&format!("{text}\n")),
            Block::Chips(row) => out.push_str(&format!("{}\n", self.chips(row))),
            Block::Metrics(metrics) => {
                for metric in metrics {
                    let trend = metric
                        .trend
                        .as_deref()
                        .map(|trend| format!(" ({trend})"))
                        .unwrap_or_default();
                    out.push_str(&format!(
                        "{} {}: {}{trend}\n",
                        metric.icon, metric.label, metric.value
                    ));
                }
            }
            Block::Cards(cards) => {
                for card in cards {
                    self.card(out, card);
                }
            }
            Block::Badges(badges) => out.push_str(&format!("{}\n", self.badges(badges))),
            Block::Fields(fields) => {
                for field in fields {
                    out.push_str(&format!("{}: {}\n", field.label, field.value));
                }
            }
            Block::Progress(percent) => out.push_str(&format!("{}\n", progress_bar(*percent))),
            Block::Matrix(matrix) => self.matrix(out, matrix),
            Block::Calendar(calendar) => calendar_grid(out, calendar),
            Block::Steps(steps) => {
                for step in steps {
                    out.push_str(&format!("{}. {}\n   {}\n", step.number, step.title, step.text));
                }
            }
            Block::Accordion(items) => accordion(out, items),
            Block::Links(links) => {
                for link in links {
                    out.push_str(&format!("→ {} ({})\n", link.label, link.href));
                }
            }
            Block::Code(code) => out.push_str(&format!("```\n{code}\n```\n")),
            Block::SearchInput { placeholder, value } => {
                let shown = if value.is_empty() { placeholder } else { value };
                out.push_str(&format!("[🔍 {shown}]\n"));
            }
            Block::Empty(empty) => out.push_str(&format!("{} {}\n", empty.icon, empty.text)),
        }
    }

    fn chips(&self, row: &ChipRow) -> String {
        row.chips
            .iter()
            .map(|chip| {
                if chip.active {
                    format!("[{}]", chip.label)
                } else {
                    chip.label.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn badge(&self, badge: &Badge) -> String {
        if self.show_kinds && !badge.kind.is_empty() {
            format!("[{}|{}]", badge.label, badge.kind)
        } else {
            format!("[{}]", badge.label)
        }
    }

    fn badges(&self, badges: &[Badge]) -> String {
        badges
            .iter()
            .map(|badge| self.badge(badge))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn card(&self, out: &mut String, card: &Card) {
        let mut head = String::from("- ");
        if let Some(rank) = card.rank {
            head.push_str(&format!("{rank}. "));
        }
        if let Some(icon) = &card.icon {
            head.push_str(&format!("{icon} "));
        }
        head.push_str(&card.title);
        if !card.badges.is_empty() {
            head.push(' ');
            head.push_str(&self.badges(&card.badges));
        }
        if card.active {
            head.push_str(" ◀");
        }
        out.push_str(&head);
        out.push('\n');

        if !card.meta.is_empty() {
            out.push_str(&format!("  {}\n", card.meta.join(" · ")));
        }
        if let Some(description) = &card.description {
            out.push_str(&format!("  {description}\n"));
        }
        if let Some(percent) = card.progress {
            out.push_str(&format!("  {}\n", progress_bar(percent)));
        }
        if !card.tags.is_empty() {
            out.push_str(&format!("  #{}\n", card.tags.join(" #")));
        }
        if let Some(link) = &card.link {
            out.push_str(&format!("  → {link}\n"));
        }
    }

    fn matrix(&self, out: &mut String, matrix: &Matrix) {
        out.push_str(&format!("{}\n", self.badges(&matrix.legend)));
        out.push_str(&format!("Практика | {}\n", matrix.columns.join(" | ")));
        for row in &matrix.rows {
            let cells = row
                .cells
                .iter()
                .map(|cell| cell.label.as_str())
                .collect::<Vec<_>>()
                .join(" | ");
            out.push_str(&format!("{} | {cells}\n", row.label));
        }
    }

    fn modal(&self, out: &mut String, modal: &Modal) {
        out.push_str(&format!("┌ {}\n", modal.title));
        let mut body = String::new();
        for block in &modal.blocks {
            self.block(&mut body, block);
        }
        for line in body.lines() {
            out.push_str(&format!("│ {line}\n"));
        }
        out.push_str("└\n");
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render_page(&self, view: &PageView) -> String {
        let mut out = format!("# {}\n\n", view.title);
        for region in &view.regions {
            self.region(&mut out, region);
        }
        if let Some(modal) = &view.modal {
            self.modal(&mut out, modal);
        }
        out
    }

    fn render_search(&self, panel: &SearchPanel) -> String {
        let mut out = format!("🔍 {}\n", panel.query);
        if let Some(notice) = &panel.notice {
            out.push_str(notice);
            out.push('\n');
            return out;
        }
        for group in &panel.groups {
            out.push_str(&format!("{}\n", group.title));
            for entry in &group.entries {
                let marker = if entry.highlighted { '>' } else { ' ' };
                out.push_str(&format!(
                    "{marker} {} {}\n    {}\n    → {}\n",
                    entry.icon, entry.title, entry.subtitle, entry.link
                ));
            }
        }
        out
    }
}

fn progress_bar(percent: u64) -> String {
    let percent = percent.min(100);
    let filled = (percent / 10) as usize;
    format!("{}{} {percent}%", "█".repeat(filled), "░".repeat(10 - filled))
}

fn calendar_grid(out: &mut String, calendar: &CalendarView) {
    out.push_str(&format!("{}\n", calendar.title));
    out.push_str(&calendar.weekdays.join("  "));
    out.push('\n');
    for week in calendar.cells.chunks(7) {
        let row = week
            .iter()
            .map(|cell| match cell.day {
                None => "  ".to_string(),
                Some(day) => {
                    let mark = if cell.selected {
                        '*'
                    } else if !cell.events.is_empty() {
                        '•'
                    } else if cell.today {
                        '!'
                    } else {
                        ' '
                    };
                    format!("{day:>2}{mark}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(row.trim_end());
        out.push('\n');
    }
}

fn accordion(out: &mut String, items: &[AccordionItem]) {
    for item in items {
        let marker = if item.open { '▾' } else { '▸' };
        out.push_str(&format!("{marker} {}\n", item.title));
        if item.open {
            out.push_str(&format!("  {}\n", item.body));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{progress_bar, Renderer, TextRenderer};
    use crate::view::{Block, ChipRow, EmptyState, PageView, Region};

    #[test]
    fn renders_active_chip_and_empty_state() {
        let view = PageView::new("Участники").with_region(
            Region::new("members-grid")
                .with(Block::Chips(ChipRow::build(
                    "role",
                    "lead",
                    [("all", "Все"), ("lead", "Лид")],
                )))
                .with(EmptyState::new("👥", "Участники не найдены").into()),
        );

        let text = TextRenderer::new().render_page(&view);
        assert!(text.starts_with("# Участники"));
        assert!(text.contains("Все [Лид]"));
        assert!(text.contains("👥 Участники не найдены"));
    }

    #[test]
    fn progress_bar_is_capped() {
        assert_eq!(progress_bar(40), "████░░░░░░ 40%");
        assert!(progress_bar(140).ends_with("100%"));
    }
}
