//! Allow-list filtering and per-request holiday analysis.

use chrono::{Datelike, Duration, NaiveDate};

use crate::constants::{MAX_UPCOMING_HOLIDAYS, UPCOMING_HOLIDAY_WINDOW_DAYS};
use crate::holidays::model::{
    HolidayAnalysis, HolidayImpact, ImpactKind, ImpactSeverity, MarketStatus,
};
use marketpulse_market_data::Holiday;

/// True if `name` contains any allow-list entry, ignoring case.
pub fn is_market_holiday<S: AsRef<str>>(name: &str, allow_list: &[S]) -> bool {
    let name = name.to_lowercase();
    allow_list
        .iter()
        .any(|entry| name.contains(&entry.as_ref().to_lowercase()))
}

/// Keep only the holidays on which the exchange closes, in provider order.
pub fn filter_market_holidays<S: AsRef<str>>(holidays: Vec<Holiday>, allow_list: &[S]) -> Vec<Holiday> {
    holidays
        .into_iter()
        .filter(|h| is_market_holiday(&h.name, allow_list))
        .collect()
}

/// December and January.
pub fn is_holiday_season(today: NaiveDate) -> bool {
    matches!(today.month(), 12 | 1)
}

/// Derive the holiday facts for `today` from an already filtered list.
pub fn analyze_holidays(today: NaiveDate, market_holidays: &[Holiday]) -> HolidayAnalysis {
    let today_holiday = market_holidays.iter().find(|h| h.date == today).cloned();

    let window_end = today + Duration::days(UPCOMING_HOLIDAY_WINDOW_DAYS);
    let mut upcoming: Vec<Holiday> = market_holidays
        .iter()
        .filter(|h| h.date > today && h.date <= window_end)
        .cloned()
        .collect();
    upcoming.sort_by_key(|h| h.date);
    let upcoming_in_window = upcoming.len();
    upcoming.truncate(MAX_UPCOMING_HOLIDAYS);

    let is_holiday_season = is_holiday_season(today);
    let market_status = if today_holiday.is_some() {
        MarketStatus::Closed
    } else {
        MarketStatus::Open
    };

    let holiday_impact = build_impact(
        today,
        today_holiday.as_ref(),
        &upcoming,
        upcoming_in_window,
        is_holiday_season,
    );

    HolidayAnalysis {
        is_today_holiday: today_holiday.is_some(),
        today_holiday,
        upcoming_holidays: upcoming,
        is_holiday_season,
        market_status,
        holiday_impact,
    }
}

fn build_impact(
    today: NaiveDate,
    today_holiday: Option<&Holiday>,
    upcoming: &[Holiday],
    upcoming_in_window: usize,
    is_holiday_season: bool,
) -> Vec<HolidayImpact> {
    let mut impact = Vec::new();

    if let Some(holiday) = today_holiday {
        impact.push(HolidayImpact::new(
            ImpactKind::MarketClosed,
            ImpactSeverity::High,
            format!(
                "US stock markets are closed today for {}. Prices shown are from the last trading session.",
                holiday.name
            ),
        ));
    }

    if let Some(next) = upcoming.first() {
        let days = (next.date - today).num_days();
        let mut message = format!(
            "Markets will be closed for {} on {} ({}), {} day{} from now.",
            next.name,
            next.date.format("%Y-%m-%d"),
            next.day_of_week,
            days,
            if days == 1 { "" } else { "s" }
        );
        let more = upcoming_in_window - 1;
        if more > 0 {
            message.push_str(&format!(
                " {} more market holiday{} in the next {} days.",
                more,
                if more == 1 { "" } else { "s" },
                UPCOMING_HOLIDAY_WINDOW_DAYS
            ));
        }
        impact.push(HolidayImpact::new(
            ImpactKind::UpcomingClosure,
            ImpactSeverity::Medium,
            message,
        ));
    }

    if is_holiday_season {
        impact.push(HolidayImpact::new(
            ImpactKind::HolidaySeason,
            ImpactSeverity::Low,
            "Holiday season trading often brings lower volume and wider price swings.",
        ));
    }

    impact.push(HolidayImpact::new(
        ImpactKind::General,
        ImpactSeverity::Info,
        "US exchanges close on about ten federal holidays a year and may close early the day before some of them.",
    ));

    impact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MARKET_HOLIDAY_NAMES;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holiday(name: &str, on: NaiveDate) -> Holiday {
        Holiday::new(name, on)
    }

    #[test]
    fn test_allow_list_matching_is_case_insensitive_substring() {
        assert!(is_market_holiday("Christmas Day", &MARKET_HOLIDAY_NAMES));
        assert!(is_market_holiday("CHRISTMAS DAY", &MARKET_HOLIDAY_NAMES));
        assert!(is_market_holiday("Martin Luther King Jr. Day", &MARKET_HOLIDAY_NAMES));
        assert!(is_market_holiday("Presidents' Day", &MARKET_HOLIDAY_NAMES));
        assert!(is_market_holiday("President's Day", &MARKET_HOLIDAY_NAMES));
        assert!(is_market_holiday("Juneteenth National Independence Day", &MARKET_HOLIDAY_NAMES));
        assert!(is_market_holiday("Thanksgiving Day", &MARKET_HOLIDAY_NAMES));
        // Literal substring semantics: Christmas Eve matches too
        assert!(is_market_holiday("Christmas Eve", &MARKET_HOLIDAY_NAMES));

        assert!(!is_market_holiday("Valentine's Day", &MARKET_HOLIDAY_NAMES));
        assert!(!is_market_holiday("Columbus Day", &MARKET_HOLIDAY_NAMES));
        assert!(!is_market_holiday("Veterans Day", &MARKET_HOLIDAY_NAMES));
    }

    #[test]
    fn test_filter_keeps_provider_order() {
        let holidays = vec![
            holiday("Labor Day", date(2024, 9, 2)),
            holiday("Halloween", date(2024, 10, 31)),
            holiday("New Year's Day", date(2024, 1, 1)),
        ];
        let filtered = filter_market_holidays(holidays, &MARKET_HOLIDAY_NAMES);
        let names: Vec<&str> = filtered.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Labor Day", "New Year's Day"]);
    }

    #[test]
    fn test_today_holiday_closes_market() {
        let today = date(2024, 12, 25);
        let holidays = vec![holiday("Christmas Day", today)];
        let analysis = analyze_holidays(today, &holidays);

        assert!(analysis.is_today_holiday);
        assert_eq!(analysis.market_status, MarketStatus::Closed);
        assert_eq!(analysis.today_holiday.as_ref().map(|h| h.name.as_str()), Some("Christmas Day"));
        assert_eq!(analysis.holiday_impact[0].severity, ImpactSeverity::High);
        assert_eq!(analysis.holiday_impact[0].kind, ImpactKind::MarketClosed);
    }

    #[test]
    fn test_upcoming_window_excludes_far_holidays() {
        let today = date(2024, 5, 1);
        let holidays = vec![
            holiday("Independence Day", today + Duration::days(40)),
            holiday("Memorial Day", today + Duration::days(10)),
            holiday("Good Friday", today + Duration::days(5)),
        ];
        let analysis = analyze_holidays(today, &holidays);

        let names: Vec<&str> = analysis.upcoming_holidays.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Good Friday", "Memorial Day"]);
        assert!(!analysis.is_today_holiday);
        assert_eq!(analysis.market_status, MarketStatus::Open);
    }

    #[test]
    fn test_upcoming_window_bounds() {
        let today = date(2024, 5, 1);
        let holidays = vec![
            holiday("Labor Day", today),
            holiday("Memorial Day", today + Duration::days(30)),
            holiday("Juneteenth", today + Duration::days(31)),
        ];
        let analysis = analyze_holidays(today, &holidays);
        let names: Vec<&str> = analysis.upcoming_holidays.iter().map(|h| h.name.as_str()).collect();
        // Today is not upcoming, day 30 is, day 31 is not
        assert_eq!(names, vec!["Memorial Day"]);
    }

    #[test]
    fn test_upcoming_truncated_to_three() {
        let today = date(2024, 11, 1);
        let holidays: Vec<Holiday> = (1..=5)
            .rev()
            .map(|d| holiday("Thanksgiving", today + Duration::days(d * 3)))
            .collect();
        let analysis = analyze_holidays(today, &holidays);

        assert_eq!(analysis.upcoming_holidays.len(), 3);
        let dates: Vec<NaiveDate> = analysis.upcoming_holidays.iter().map(|h| h.date).collect();
        assert_eq!(
            dates,
            vec![today + Duration::days(3), today + Duration::days(6), today + Duration::days(9)]
        );
        let upcoming = analysis
            .holiday_impact
            .iter()
            .find(|i| i.kind == ImpactKind::UpcomingClosure)
            .unwrap();
        assert!(upcoming.message.contains("4 more market holidays"));
    }

    #[test]
    fn test_holiday_season_is_independent_of_list() {
        assert!(analyze_holidays(date(2024, 12, 2), &[]).is_holiday_season);
        assert!(analyze_holidays(date(2025, 1, 31), &[]).is_holiday_season);
        assert!(!analyze_holidays(date(2024, 11, 30), &[]).is_holiday_season);
        assert!(!analyze_holidays(date(2024, 2, 1), &[]).is_holiday_season);
    }

    #[test]
    fn test_empty_list_defaults_to_open() {
        let analysis = analyze_holidays(date(2024, 6, 12), &[]);
        assert!(!analysis.is_today_holiday);
        assert!(analysis.today_holiday.is_none());
        assert!(analysis.upcoming_holidays.is_empty());
        assert_eq!(analysis.market_status, MarketStatus::Open);
        assert_eq!(analysis.holiday_impact.len(), 1);
        assert_eq!(analysis.holiday_impact[0].severity, ImpactSeverity::Info);
    }

    #[test]
    fn test_impact_order() {
        let today = date(2024, 12, 25);
        let holidays = vec![
            holiday("Christmas Day", today),
            holiday("New Year's Day", date(2025, 1, 1)),
        ];
        let analysis = analyze_holidays(today, &holidays);
        let severities: Vec<ImpactSeverity> =
            analysis.holiday_impact.iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![
                ImpactSeverity::High,
                ImpactSeverity::Medium,
                ImpactSeverity::Low,
                ImpactSeverity::Info
            ]
        );
        assert!(analysis.holiday_impact[1].message.contains("7 days from now"));
    }
}
