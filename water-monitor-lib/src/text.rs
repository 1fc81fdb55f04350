//! User-facing strings. The UI is Russian-first; English is selectable
//! through `WATER_METER_LANG=en`.

use std::env;

use crate::format;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lang {
    Ru,
    En,
}

impl Lang {
    pub fn from_env() -> Self {
        match env::var("WATER_METER_LANG") {
            Ok(value) if value.eq_ignore_ascii_case("en") => Lang::En,
            _ => Lang::Ru,
        }
    }

    pub fn pick<'a>(self, ru: &'a str, en: &'a str) -> &'a str {
        match self {
            Lang::Ru => ru,
            Lang::En => en,
        }
    }
}

pub fn stats_load_failed(lang: Lang) -> &'static str {
    lang.pick(
        "Ошибка при загрузке данных. Пожалуйста, попробуйте снова.",
        "Failed to load data. Please try again.",
    )
}

pub fn reset_confirm(lang: Lang) -> &'static str {
    lang.pick(
        "Вы уверены, что хотите очистить все данные? Это действие нельзя отменить.",
        "Are you sure you want to clear all data? This cannot be undone.",
    )
}

pub fn reset_done(lang: Lang) -> &'static str {
    lang.pick("База данных успешно очищена!", "All data has been cleared.")
}

pub fn reset_failed(lang: Lang) -> &'static str {
    lang.pick(
        "Ошибка при очистке базы данных. Пожалуйста, попробуйте снова.",
        "Failed to clear the data. Please try again.",
    )
}

pub fn bill_load_failed(lang: Lang) -> &'static str {
    lang.pick(
        "Не удалось загрузить данные о потреблении",
        "Failed to load consumption data",
    )
}

pub fn no_bill_loaded(lang: Lang) -> &'static str {
    lang.pick(
        "Данные о потреблении не загружены",
        "Consumption data is not loaded",
    )
}

pub fn payment_failed(lang: Lang) -> &'static str {
    lang.pick(
        "Произошла ошибка при обработке платежа",
        "Something went wrong while processing the payment",
    )
}

pub fn payment_success(lang: Lang, amount: f64, method: &str) -> String {
    let amount = format::bill_total(amount);
    match lang {
        Lang::Ru => format!("Оплата {amount} ₸ через {method} прошла успешно!"),
        Lang::En => format!("Payment of {amount} ₸ via {method} went through!"),
    }
}

pub fn chart_series_label(lang: Lang) -> &'static str {
    lang.pick("Потребление воды (литры)", "Water consumption (liters)")
}

pub fn liters_unit(lang: Lang) -> &'static str {
    lang.pick("л", "L")
}

pub fn chart_cost_line(lang: Lang, cost: &str) -> String {
    match lang {
        Lang::Ru => format!("Стоимость: {cost} тг"),
        Lang::En => format!("Cost: {cost} ₸"),
    }
}

pub fn dashboard_title(lang: Lang) -> &'static str {
    lang.pick("Расход воды", "Water Consumption")
}

pub fn billing_title(lang: Lang) -> &'static str {
    lang.pick("Оплата воды", "Water Billing")
}

pub fn loading(lang: Lang) -> &'static str {
    lang.pick("Загрузка...", "Loading...")
}

pub fn no_data(lang: Lang) -> &'static str {
    lang.pick("Нет данных", "No data")
}

pub fn period_label(lang: Lang, days: u16) -> String {
    match lang {
        Lang::Ru => format!("{days} дней"),
        Lang::En => format!("{days} days"),
    }
}

/// Captions of the six dashboard readouts, in render order.
pub fn stat_labels(lang: Lang) -> [&'static str; 6] {
    match lang {
        Lang::Ru => [
            "Сегодня, л",
            "Сегодня, ₸",
            "Всего, л",
            "Всего, ₸",
            "Среднее за 7 дней, л",
            "Тариф, ₸/л",
        ],
        Lang::En => [
            "Today, L",
            "Today, ₸",
            "Total, L",
            "Total, ₸",
            "7-day average, L",
            "Price, ₸/L",
        ],
    }
}

pub fn dashboard_help(lang: Lang) -> &'static str {
    lang.pick(
        "r: обновить | R: сброс | 1/2/3: период | ←/→: день | Esc: скрыть | q: выход",
        "r: refresh | R: reset | 1/2/3: period | ←/→: day | Esc: dismiss | q: quit",
    )
}

pub fn reset_title(lang: Lang) -> &'static str {
    lang.pick("Сброс данных", "Reset data")
}

pub fn confirm_keys(lang: Lang) -> &'static str {
    lang.pick("y: да | n: нет", "y: yes | n: no")
}

pub fn month_label(lang: Lang) -> &'static str {
    lang.pick("Месяц", "Month")
}

pub fn bill_liters_label(lang: Lang) -> &'static str {
    lang.pick("Потребление, л", "Consumption, L")
}

pub fn bill_price_label(lang: Lang) -> &'static str {
    lang.pick("Тариф, ₸/л", "Price, ₸/L")
}

pub fn bill_total_label(lang: Lang) -> &'static str {
    lang.pick("К оплате, ₸", "Amount due, ₸")
}

/// Column headers of the daily breakdown table.
pub fn breakdown_headers(lang: Lang) -> [&'static str; 3] {
    match lang {
        Lang::Ru => ["Дата", "Потребление (л)", "Стоимость (₸)"],
        Lang::En => ["Date", "Consumption (L)", "Cost (₸)"],
    }
}

pub fn methods_title(lang: Lang) -> &'static str {
    lang.pick("Способ оплаты", "Payment method")
}

pub fn pay_action(lang: Lang) -> &'static str {
    lang.pick("Оплатить", "Pay")
}

pub fn pay_busy(lang: Lang) -> &'static str {
    lang.pick("Обработка...", "Processing...")
}

pub fn success_title(lang: Lang) -> &'static str {
    lang.pick("Успешно", "Success")
}

pub fn error_title(lang: Lang) -> &'static str {
    lang.pick("Ошибка", "Error")
}

pub fn modal_dismiss_hint(lang: Lang) -> &'static str {
    lang.pick("Esc: закрыть", "Esc: close")
}

pub fn billing_help(lang: Lang) -> &'static str {
    lang.pick(
        "←/→: месяц | 1-4: способ | Enter: оплатить | Esc: закрыть | q: выход",
        "←/→: month | 1-4: method | Enter: pay | Esc: close | q: quit",
    )
}

// Genitive case for Russian, as dates read «15 октября 2025 г.».
const MONTHS_RU: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month name for a 1-based month number.
pub fn month_name(lang: Lang, month: u32) -> &'static str {
    let idx = (month - 1) as usize;
    match lang {
        Lang::Ru => MONTHS_RU[idx],
        Lang::En => MONTHS_EN[idx],
    }
}
