//! Onboarding page: static steps, FAQ accordion, and the RFC template.

use super::{Action, PageController, PageKind};
use crate::env::Environment;
use crate::view::{AccordionItem, Block, PageView, Region, Step};

const STEPS: &[(&str, &str)] = &[
    (
        "Присоединяйтесь к сообществу",
        "Зарегистрируйтесь на платформе и представьтесь в общем канале.",
    ),
    (
        "Выберите профессию",
        "Просмотрите доступные профессии и выберите ту, что соответствует вашей экспертизе.",
    ),
    (
        "Изучите правила",
        "Ознакомьтесь с кодексом поведения, правилами контрибуций и процессом RFC.",
    ),
    (
        "Сделайте первый вклад",
        "Начните с малого: исправьте опечатку, добавьте термин в глоссарий или прокомментируйте открытый RFC.",
    ),
    (
        "Растите и помогайте",
        "Получите роль эксперта через регулярные контрибуции и помогайте новичкам.",
    ),
];

const FAQ: &[(&str, &str)] = &[
    (
        "Как сменить профессию?",
        "Вы можете обновить профессию в любое время через настройки профиля. Изменения вступают в силу сразу.",
    ),
    (
        "Что считается контрибуцией?",
        "RFC, записи в changelog, дополнения глоссария, код-ревью и менторские сессии: всё считается.",
    ),
    (
        "Как назначаются роли?",
        "Роли основаны на контрибуциях: новичок (0-5), контрибьютор (6-20), эксперт (21-50), лид (50+).",
    ),
    (
        "Можно ли участвовать в нескольких профессиях?",
        "Да. У вас есть основная профессия, но можно добавить дополнительные.",
    ),
    (
        "Как работает процесс RFC?",
        "Подайте предложение по шаблону ниже. Оно проходит этапы: черновик → ревью → принятие/отклонение.",
    ),
    (
        "К кому обратиться за помощью?",
        "Напишите любому лиду сообщества или в канал #help.",
    ),
];

pub const ONBOARDING_RFC_TEMPLATE: &str = "# RFC: [Название]

## Краткое описание
Краткое описание предложения.

## Мотивация
Почему это изменение необходимо?

## Детальный дизайн
Технические детали и план реализации.

## Рассмотренные альтернативы
Какие другие подходы были оценены?

## Стратегия внедрения
Как это будет развёрнуто?";

#[derive(Debug, Clone)]
pub struct OnboardingController {
    /// Open flag per FAQ item; items toggle independently.
    open: Vec<bool>,
}

impl Default for OnboardingController {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingController {
    pub fn new() -> Self {
        Self {
            open: vec![false; FAQ.len()],
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }
}

impl PageController for OnboardingController {
    fn kind(&self) -> PageKind {
        PageKind::Onboarding
    }

    fn view(&self) -> PageView {
        let steps = STEPS
            .iter()
            .enumerate()
            .map(|(index, (title, text))| Step {
                number: index + 1,
                title: title.to_string(),
                text: text.to_string(),
            })
            .collect();
        let faq = FAQ
            .iter()
            .enumerate()
            .map(|(index, (question, answer))| AccordionItem {
                title: question.to_string(),
                body: answer.to_string(),
                open: self.is_open(index),
            })
            .collect();

        PageView::new(PageKind::Onboarding.title())
            .with_region(Region::new("onboarding-steps").with(Block::Steps(steps)))
            .with_region(
                Region::new("onboarding-faq")
                    .titled("Часто задаваемые вопросы")
                    .with(Block::Accordion(faq)),
            )
            .with_region(
                Region::new("onboarding-template")
                    .titled("Шаблон RFC")
                    .with(Block::Code(ONBOARDING_RFC_TEMPLATE.to_string())),
            )
    }

    fn apply(&mut self, action: &Action, _env: &mut dyn Environment) -> bool {
        match action {
            Action::ToggleFaq(index) => match self.open.get_mut(*index) {
                Some(open) => {
                    *open = !*open;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn export(&self) -> Option<String> {
        Some(ONBOARDING_RFC_TEMPLATE.to_string())
    }
}
