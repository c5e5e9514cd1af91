//! Russian UI labels for the enumerated values found in fixtures.
//!
//! Lookups fall back to the raw value, so an unknown status still shows
//! something readable.

pub const STATUS_LABELS: &[(&str, &str)] = &[
    ("draft", "Черновик"),
    ("review", "Ревью"),
    ("accepted", "Принято"),
    ("rejected", "Отклонено"),
    ("deprecated", "Устарело"),
];

pub const ROLE_LABELS: &[(&str, &str)] = &[
    ("lead", "Лид"),
    ("expert", "Эксперт"),
    ("contributor", "Контрибьютор"),
    ("newcomer", "Новичок"),
];

pub const EVENT_TYPE_LABELS: &[(&str, &str)] = &[
    ("meetup", "Митап"),
    ("workshop", "Воркшоп"),
    ("review-event", "Ревью"),
    ("demo", "Демо"),
    ("retro", "Ретро"),
];

pub const CHANGELOG_TYPE_LABELS: &[(&str, &str)] = &[
    ("added", "Добавлено"),
    ("changed", "Изменено"),
    ("deprecated", "Устарело"),
    ("removed", "Удалено"),
];

pub const ADOPTION_LABELS: &[(&str, &str)] = &[
    ("adopted", "Внедрено"),
    ("in-progress", "Внедряется"),
    ("planned", "Запланировано"),
    ("na", "—"),
];

pub const LEVEL_LABELS: &[(&str, &str)] = &[
    ("basic", "Базовый"),
    ("intermediate", "Средний"),
    ("advanced", "Продвинутый"),
];

pub const RESOURCE_TYPE_LABELS: &[(&str, &str)] = &[
    ("guide", "Гайд"),
    ("template", "Шаблон"),
    ("checklist", "Чеклист"),
    ("dashboard", "Дашборд"),
];

fn lookup<'a>(table: &[(&'static str, &'static str)], key: &'a str) -> Option<&'a str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, label)| *label)
}

pub fn status_label(status: &str) -> &str {
    lookup(STATUS_LABELS, status).unwrap_or(status)
}

pub fn role_label(role: &str) -> &str {
    lookup(ROLE_LABELS, role).unwrap_or(role)
}

pub fn event_type_label(kind: &str) -> &str {
    lookup(EVENT_TYPE_LABELS, kind).unwrap_or(kind)
}

pub fn changelog_type_label(kind: &str) -> &str {
    lookup(CHANGELOG_TYPE_LABELS, kind).unwrap_or(kind)
}

pub fn level_label(level: &str) -> &str {
    lookup(LEVEL_LABELS, level).unwrap_or(level)
}

pub fn resource_type_label(kind: &str) -> &str {
    lookup(RESOURCE_TYPE_LABELS, kind).unwrap_or(kind)
}

/// Unknown adoption values render as a dash rather than the raw value.
pub fn adoption_label(status: &str) -> &str {
    lookup(ADOPTION_LABELS, status).unwrap_or("—")
}

/// Sort rank for competency levels: advanced first, unknown last.
pub fn level_rank(level: &str) -> u8 {
    match level {
        "advanced" => 0,
        "intermediate" => 1,
        "basic" => 2,
        _ => 99,
    }
}

#[cfg(test)]
mod tests {
    use super::{adoption_label, level_rank, status_label};

    #[test]
    fn unknown_status_falls_back_to_raw_value() {
        assert_eq!(status_label("accepted"), "Принято");
        assert_eq!(status_label("frozen"), "frozen");
    }

    #[test]
    fn unknown_adoption_renders_dash() {
        assert_eq!(adoption_label("in-progress"), "Внедряется");
        assert_eq!(adoption_label("weird"), "—");
    }

    #[test]
    fn level_rank_orders_advanced_first() {
        assert!(level_rank("advanced") < level_rank("basic"));
        assert_eq!(level_rank("expert"), 99);
    }
}
