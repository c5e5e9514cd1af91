//! Russian-locale formatting helpers shared by every page.

use crate::model::Member;
use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь",
    "Октябрь", "Ноябрь", "Декабрь",
];

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

const MONTHS_SHORT: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

const WEEKDAYS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

/// Parses `YYYY-MM-DD`, also accepting a trailing time part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// `15 марта 2025`; unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_GENITIVE[date.month0() as usize],
            date.year()
        ),
        None => value.to_string(),
    }
}

/// `15 марта`.
pub fn format_day_month(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!("{} {}", date.day(), MONTHS_GENITIVE[date.month0() as usize]),
        None => value.to_string(),
    }
}

/// `15 мар.`.
pub fn format_short_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!("{} {}", date.day(), month_short(date.month0())),
        None => value.to_string(),
    }
}

/// Nominative month name for a zero-based index.
pub fn month_name(month0: u32) -> &'static str {
    MONTHS[(month0 % 12) as usize]
}

pub fn month_short(month0: u32) -> &'static str {
    MONTHS_SHORT[(month0 % 12) as usize]
}

/// Monday-first weekday abbreviations.
pub fn weekday_names() -> &'static [&'static str] {
    &WEEKDAYS
}

/// Russian plural form: `1 день`, `3 дня`, `11 дней`.
pub fn pluralize(n: u64, one: &str, few: &str, many: &str) -> String {
    let mod10 = n % 10;
    let mod100 = n % 100;
    let word = if (11..=19).contains(&mod100) {
        many
    } else if mod10 == 1 {
        one
    } else if (2..=4).contains(&mod10) {
        few
    } else {
        many
    };
    format!("{n} {word}")
}

/// Up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// Member name or the given fallback label.
pub fn member_name<'a>(member: Option<&'a Member>, fallback: &'a str) -> &'a str {
    member.map_or(fallback, |member| member.name.as_str())
}

/// Cuts `text` to `max_chars` characters, appending `...` only when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut = text.chars().take(max_chars).collect::<String>();
    cut.push_str("...");
    cut
}

/// Sort key approximating Russian collation: case-insensitive, digits
/// before Cyrillic before Latin, `ё` right after `е`.
pub fn collation_key(text: &str) -> Vec<(u8, u32)> {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            '0'..='9' => (1, c as u32),
            'ё' => (2, ('е' as u32) * 2 + 1),
            'а'..='я' => (2, (c as u32) * 2),
            'a'..='z' => (3, c as u32),
            c if c.is_alphabetic() => (4, c as u32),
            c => (0, c as u32),
        })
        .collect()
}

/// `RFC-007`.
pub fn rfc_label(number: u64) -> String {
    format!("RFC-{number:03}")
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = if month0 >= 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|first| first.pred_opt())
        .map_or(30, |last| last.day())
}

/// Blank cells before day 1 in a Monday-first grid.
pub fn leading_blanks(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map_or(0, |first| first.weekday().num_days_from_monday())
}
