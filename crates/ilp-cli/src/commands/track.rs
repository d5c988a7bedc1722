use std::fmt::Write;

use chrono::format::StrftimeItems;
use chrono::NaiveDate;
use ilp_core::tracker::format_date;
use ilp_core::{Config, StreakSummary, ValidationError};

use super::{print_json, CmdResult, Context};

/// Format a date with the configured chrono format, falling back to
/// `YYYY-MM-DD` when the format is invalid for a plain date.
pub fn display_date(date: NaiveDate, config: &Config) -> String {
    let mut out = String::new();
    let items = StrftimeItems::new(&config.display.date_format);
    if write!(out, "{}", date.format_with_items(items)).is_err() {
        return format_date(date);
    }
    out
}

fn streak_label(streak: u32, config: &Config) -> String {
    if config.display.show_streak_emoji && streak > 0 {
        format!("🔥 {streak}")
    } else {
        streak.to_string()
    }
}

pub fn done(id: &str, ctx: &Context) -> CmdResult {
    let (store, mut session) = ctx.load()?;
    let done = session.toggle(id)?;
    store.save(&session)?;

    let streak = session.streak(id);
    if ctx.json {
        return print_json(&serde_json::json!({
            "id": id,
            "done_today": done,
            "streak": streak,
        }));
    }
    let config = Config::load_or_default();
    let state = if done { "done" } else { "not done" };
    println!("{id}: {state} (streak {})", streak_label(streak, &config));
    Ok(())
}

pub fn today(ctx: &Context) -> CmdResult {
    let (_, session) = ctx.load()?;
    let rows = session.tracker_rows();

    if ctx.json {
        return print_json(&rows);
    }
    let config = Config::load_or_default();
    println!("{}", display_date(ctx.today, &config));
    if rows.is_empty() {
        println!("stack is empty; add practices with `ilp stack add <id>`");
        return Ok(());
    }
    for row in &rows {
        let check = if row.done_today { "x" } else { " " };
        println!(
            "[{check}] {:<24} {:<28} {}",
            row.id,
            row.name,
            streak_label(row.streak, &config)
        );
        if let Some(note) = &row.daily_note {
            println!("      {note}");
        }
    }
    let done = rows.iter().filter(|r| r.done_today).count();
    println!("{done}/{} done", rows.len());
    Ok(())
}

pub fn streak(id: Option<&str>, ctx: &Context) -> CmdResult {
    let (_, session) = ctx.load()?;
    let summaries: Vec<StreakSummary> = match id {
        Some(id) => {
            if !session.knows(id) {
                return Err(ValidationError::UnknownPractice(id.to_string()).into());
            }
            vec![session.tracker.summary(id, ctx.today)]
        }
        None => session.streak_summaries(),
    };

    if ctx.json {
        return print_json(&summaries);
    }
    let config = Config::load_or_default();
    for s in &summaries {
        let last = s
            .last_completed
            .map(|d| display_date(d, &config))
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{:<24} current {:<6} longest {:<4} total {:<4} last {last}",
            s.item_id,
            streak_label(s.current_streak, &config),
            s.longest_streak,
            s.total_days
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_uses_configured_format() {
        let mut config = Config::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(display_date(date, &config), "2024-03-05");
        config.display.date_format = "%d/%m/%Y".to_string();
        assert_eq!(display_date(date, &config), "05/03/2024");
    }

    #[test]
    fn display_date_falls_back_on_time_fields() {
        let mut config = Config::default();
        config.display.date_format = "%H:%M".to_string();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(display_date(date, &config), "2024-03-05");
    }

    #[test]
    fn streak_label_respects_emoji_setting() {
        let mut config = Config::default();
        assert_eq!(streak_label(3, &config), "🔥 3");
        assert_eq!(streak_label(0, &config), "0");
        config.display.show_streak_emoji = false;
        assert_eq!(streak_label(3, &config), "3");
    }
}
