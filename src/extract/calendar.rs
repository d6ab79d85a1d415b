//! Calendar date extraction from free-form PDF text.
//!
//! Three independent pattern scans feed a shared fallible-parse loop:
//! pattern → raw match → day-first parse → accumulate into a `BTreeSet`.
//! Candidates that fail to parse (impossible dates, unknown month words)
//! contribute nothing; the scan itself never fails.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Slash-separated `D/M/Y`: 1–2 digit day and month, 2- or 4-digit year.
static RE_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-3]?\d/[01]?\d/(?:\d{4}|\d{2}))\b").unwrap());

/// Dash-separated `D-M-Y` with day 1–31 and month 1–12 enforced up front.
static RE_DASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b((?:0?[1-9]|[12]\d|3[01])-(?:0?[1-9]|1[0-2])-(?:\d{4}|\d{2}))\b").unwrap()
});

/// Long form `D de <mês> de AAAA`, accent- and case-insensitive.
static RE_LONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([0-3]?\d)\s+de\s+(\p{L}+)\s+de\s+(\d{4})\b").unwrap());

/// Scans `text` for calendar dates in the three supported shapes and returns
/// them deduplicated in ascending order. Empty or date-free input yields an
/// empty vec; malformed candidates are silently discarded.
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();

    for caps in RE_SLASH.captures_iter(text) {
        if let Some(date) = parse_numeric(&caps[1], '/', "%d/%m/%Y", "%d/%m/%y") {
            dates.insert(date);
        }
    }

    for caps in RE_DASH.captures_iter(text) {
        if let Some(date) = parse_numeric(&caps[1], '-', "%d-%m-%Y", "%d-%m-%y") {
            dates.insert(date);
        }
    }

    for caps in RE_LONG.captures_iter(text) {
        if let Some(date) = parse_long_form(&caps[1], &caps[2], &caps[3]) {
            dates.insert(date);
        }
    }

    dates.into_iter().collect()
}

/// Day-first numeric parse. The format is chosen by the width of the year
/// token (chrono's `%Y` would happily read "23" as year 23 AD); short years
/// go through `%y`, whose century inference (00–68 → 2000s, 69–99 → 1900s)
/// is the pivot rule this crate adopts. The candidate is trimmed of any
/// stray non-digit edges so a sloppy match still parses.
fn parse_numeric(
    candidate: &str,
    sep: char,
    full_year_fmt: &str,
    short_year_fmt: &str,
) -> Option<NaiveDate> {
    let tight = candidate.trim_matches(|c: char| !c.is_ascii_digit());
    let year = tight.rsplit(sep).next()?;
    let fmt = if year.len() == 2 { short_year_fmt } else { full_year_fmt };
    NaiveDate::parse_from_str(tight, fmt).ok()
}

fn parse_long_form(day: &str, month_name: &str, year: &str) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    let month = month_number(month_name)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Portuguese month names, with the common unaccented spelling of março
/// accepted as well. Unknown words map to `None` and the candidate is
/// dropped.
fn month_number(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "janeiro" => Some(1),
        "fevereiro" => Some(2),
        "março" | "marco" => Some(3),
        "abril" => Some(4),
        "maio" => Some(5),
        "junho" => Some(6),
        "julho" => Some(7),
        "agosto" => Some(8),
        "setembro" => Some(9),
        "outubro" => Some(10),
        "novembro" => Some(11),
        "dezembro" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn slash_shape_resolves() {
        assert_eq!(extract_dates("Reunião em 05/03/2024."), vec![date(2024, 3, 5)]);
    }

    #[test]
    fn dash_shape_resolves() {
        assert_eq!(extract_dates("Prazo: 05-03-2024"), vec![date(2024, 3, 5)]);
    }

    #[test]
    fn long_form_resolves() {
        assert_eq!(
            extract_dates("Conselho em 5 de março de 2024"),
            vec![date(2024, 3, 5)]
        );
    }

    #[test]
    fn day_first_disambiguation() {
        // "05/03/2024" is March 5th, not May 3rd.
        assert_eq!(extract_dates("05/03/2024"), vec![date(2024, 3, 5)]);
    }

    #[test]
    fn single_digit_components() {
        assert_eq!(extract_dates("aula dia 7/8/2024"), vec![date(2024, 8, 7)]);
    }

    #[test]
    fn cross_pattern_duplicates_collapse() {
        let text = "Reunião em 05/03/2024 e também 5 de março de 2024";
        assert_eq!(extract_dates(text), vec![date(2024, 3, 5)]);
    }

    #[test]
    fn repeated_occurrences_collapse() {
        let text = "10/05/2024 de manhã e 10/05/2024 à tarde";
        assert_eq!(extract_dates(text), vec![date(2024, 5, 10)]);
    }

    #[test]
    fn output_is_strictly_ascending() {
        let text = "15/03/2024, 01/02/2023 e depois 10/05/2024";
        assert_eq!(
            extract_dates(text),
            vec![date(2023, 2, 1), date(2024, 3, 15), date(2024, 5, 10)]
        );
    }

    #[test]
    fn impossible_calendar_dates_discarded() {
        assert!(extract_dates("31-02-2024").is_empty());
        assert!(extract_dates("31/02/2024").is_empty());
        assert!(extract_dates("30 de fevereiro de 2024").is_empty());
    }

    #[test]
    fn out_of_range_components_never_match() {
        assert!(extract_dates("32-01-2024").is_empty());
        assert!(extract_dates("15-13-2024").is_empty());
        // Slash pattern is looser up front; the parse rejects instead.
        assert!(extract_dates("10/00/2024").is_empty());
    }

    #[test]
    fn empty_and_garbage_input_yield_empty() {
        assert!(extract_dates("").is_empty());
        assert!(extract_dates("nenhuma data por aqui").is_empty());
        assert!(extract_dates("\u{0}\u{1}\u{fffd} 12//34 -5-6- de de de").is_empty());
    }

    #[test]
    fn two_digit_year_century_pivot() {
        // Century inference is chrono's %y rule, pinned here as an accepted
        // dependency behavior: 00–68 → 2000s, 69–99 → 1900s.
        assert_eq!(extract_dates("10/05/69"), vec![date(1969, 5, 10)]);
        assert_eq!(extract_dates("10/05/68"), vec![date(2068, 5, 10)]);
        assert_eq!(extract_dates("01-01-99"), vec![date(1999, 1, 1)]);
        assert_eq!(extract_dates("01-01-30"), vec![date(2030, 1, 1)]);
    }

    #[test]
    fn long_form_case_insensitive() {
        assert_eq!(
            extract_dates("12 DE MARÇO DE 2024"),
            vec![date(2024, 3, 12)]
        );
        assert_eq!(
            extract_dates("1 De Janeiro De 2025"),
            vec![date(2025, 1, 1)]
        );
    }

    #[test]
    fn long_form_unaccented_marco() {
        assert_eq!(extract_dates("5 de marco de 2024"), vec![date(2024, 3, 5)]);
    }

    #[test]
    fn long_form_unknown_month_discarded() {
        assert!(extract_dates("5 de framboesa de 2024").is_empty());
    }

    #[test]
    fn all_month_names_resolve() {
        let months = [
            "janeiro",
            "fevereiro",
            "março",
            "abril",
            "maio",
            "junho",
            "julho",
            "agosto",
            "setembro",
            "outubro",
            "novembro",
            "dezembro",
        ];
        for (i, name) in months.iter().enumerate() {
            let text = format!("1 de {name} de 2024");
            assert_eq!(
                extract_dates(&text),
                vec![date(2024, i as u32 + 1, 1)],
                "month {name}"
            );
        }
    }

    #[test]
    fn dates_embedded_in_dense_text() {
        let text = "Calendário letivo 2024:\n\
                    - Início das aulas: 05/02/2024\n\
                    - Conselho de classe em 26 de abril de 2024;\n\
                    - Recesso 15-07-2024 a 19-07-2024.\n\
                    Assinado em 20/12/23.";
        assert_eq!(
            extract_dates(text),
            vec![
                date(2023, 12, 20),
                date(2024, 2, 5),
                date(2024, 4, 26),
                date(2024, 7, 15),
                date(2024, 7, 19),
            ]
        );
    }
}
