#![allow(dead_code)]

use chrono::NaiveDate;
use portal_core::fixture::{
    ADOPTION_MATRIX, ANNOUNCEMENTS, CHANGELOG, EVENTS, GLOSSARY, MEMBERS, PRACTICES,
    PRACTICE_DEPENDENCIES, PROFESSIONS, RFCS,
};
use portal_core::{Catalog, FixtureStore, MemorySource};
use serde_json::{json, Value};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn professions() -> Value {
    json!([
        {
            "id": "frontend",
            "name": "Frontend-разработка",
            "shortName": "Frontend",
            "icon": "🎨",
            "lead": "m1",
            "experts": ["m2"],
            "contributors": ["m3", "m4"],
            "practices": ["p1", "p2"],
            "competencies": [
                {"name": "HTML", "level": "basic"},
                {"name": "Архитектура", "level": "advanced"}
            ],
            "version": "1.2",
            "lastUpdated": "2025-02-01"
        },
        {
            "id": "qa",
            "name": "Тестирование",
            "shortName": "QA",
            "icon": "🧪",
            "practices": ["p2"]
        }
    ])
}

pub fn members() -> Value {
    json!([
        {"id": "m1", "name": "Анна Смирнова", "role": "lead", "professions": ["frontend"], "contributions": 40, "bio": "Ведёт фронтенд-гильдию"},
        {"id": "m2", "name": "Борис Орлов", "role": "expert", "professions": ["frontend", "qa"], "contributions": 25, "bio": "Любит property-based тесты"},
        {"id": "m3", "name": "Вера Ким", "role": "contributor", "professions": ["qa"], "contributions": 25, "bio": ""},
        {"id": "m4", "name": "Глеб Титов", "role": "contributor", "professions": ["frontend"], "contributions": 12, "bio": "Дизайн-системы"},
        {"id": "m5", "name": "Дина Лис", "role": "newcomer", "professions": ["qa"], "contributions": 3, "bio": ""},
        {"id": "m6", "name": "Егор Пак", "role": "newcomer", "professions": [], "contributions": 1, "bio": ""}
    ])
}

pub fn practices() -> Value {
    json!({
        "practices": [
            {"id": "p1", "name": "Код-ревью", "description": "Каждое изменение проходит ревью", "category": "Процессы", "status": "accepted", "professions": ["frontend"], "adoptionLevel": 80, "relatedRfc": "rfc-1"},
            {"id": "p2", "name": "Контрактные тесты", "description": "Проверка API", "category": "Качество", "status": "review", "professions": ["frontend", "qa"], "adoptionLevel": 30},
            {"id": "p3", "name": "Feature flags", "description": "Выкатка за флагами", "category": "Процессы", "status": "draft", "professions": []}
        ]
    })
}

pub fn rfcs() -> Value {
    json!([
        {
            "id": "rfc-1",
            "number": 1,
            "title": "Единый линтер",
            "description": "Общий набор правил",
            "status": "accepted",
            "author": "m1",
            "professions": ["frontend"],
            "createdAt": "2025-01-15",
            "statusHistory": [
                {"status": "draft", "date": "2025-01-15"},
                {"status": "accepted", "date": "2025-02-01", "comment": "Единогласно"}
            ],
            "voting": {"for": 5, "against": 1, "abstain": 0},
            "relatedPractice": "p1"
        },
        {"id": "rfc-7", "number": 7, "title": "Монорепозиторий", "description": "Перенос сервисов", "status": "review", "author": "ghost", "createdAt": "2025-03-01"}
    ])
}

pub fn events() -> Value {
    json!([
        {"id": "e1", "title": "Митап по тестированию", "description": "Доклады", "type": "meetup", "date": "2025-03-20", "time": "18:00", "duration": "2 часа", "speaker": "m2", "profession": "qa"},
        {"id": "e2", "title": "Воркшоп по CSS", "description": "", "type": "workshop", "date": "2025-03-12", "time": "11:00", "duration": "3 часа"},
        {"id": "e3", "title": "Ретро квартала", "description": "", "type": "meetup", "date": "2025-03-20", "time": "15:00", "duration": "1 час"},
        {"id": "e4", "title": "Итоги года", "description": "", "type": "retro", "date": "2024-12-25", "time": "17:00", "duration": "1 час"},
        {"id": "e5", "title": "Февральский разбор", "description": "", "type": "demo", "date": "2025-02-14", "time": "17:00", "duration": "1 час"}
    ])
}

pub fn changelog() -> Value {
    json!([
        {"id": "c1", "date": "2025-02-01", "type": "added", "profession": "frontend", "description": "Добавлен линтер", "author": "m1", "version": "1.2"},
        {"id": "c2", "date": "2025-03-05", "type": "changed", "profession": "qa", "description": "Обновлён гайд", "author": "m3"},
        {"id": "c3", "date": "2025-02-01", "type": "removed", "profession": "frontend", "description": "Удалён старый чеклист", "author": "m4"}
    ])
}

pub fn glossary() -> Value {
    json!([
        {"id": "g1", "term": "Рефакторинг", "definition": "Изменение структуры кода без изменения поведения", "category": "code"},
        {"id": "g2", "term": "API", "definition": "Программный интерфейс", "category": "code"},
        {"id": "g3", "term": "Ёлочная раскладка", "definition": "Шутливый термин", "category": "misc"},
        {"id": "g4", "term": "Деплой", "definition": "Выкатка изменений", "category": "ops", "related": ["g1"]}
    ])
}

pub fn adoption_matrix() -> Value {
    json!({
        "matrix": {
            "p1": {"frontend": "adopted", "qa": "planned"},
            "p2": {"frontend": "in-progress"}
        }
    })
}

pub fn practice_dependencies() -> Value {
    json!([{"practice": "p2", "requires": ["p1"], "recommends": ["p3"]}])
}

pub fn announcements() -> Value {
    json!([{"id": "a1", "title": "Новый сезон RFC", "date": "2025-03-01", "text": "Присылайте предложения", "link": "rfc.html"}])
}

/// Every portal fixture served from memory.
pub fn portal_source() -> MemorySource {
    MemorySource::new()
        .with_json(PROFESSIONS, &professions())
        .with_json(MEMBERS, &members())
        .with_json(PRACTICES, &practices())
        .with_json(RFCS, &rfcs())
        .with_json(EVENTS, &events())
        .with_json(CHANGELOG, &changelog())
        .with_json(GLOSSARY, &glossary())
        .with_json(ADOPTION_MATRIX, &adoption_matrix())
        .with_json(PRACTICE_DEPENDENCIES, &practice_dependencies())
        .with_json(ANNOUNCEMENTS, &announcements())
}

/// Typed snapshot of every fixture above.
pub fn catalog() -> Catalog {
    let store = FixtureStore::new(portal_source());
    Catalog::from_set(&store.preload_all())
}
