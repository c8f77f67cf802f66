//! Terminal output formatting.

use anyhow::Result;
use colored::{Color, ColoredString, Colorize};
use serde::Serialize;
use speech_kanban::{
    notify::Level, Board, Card, CardId, CardStore, Category, Column, Filter, Hue, Notification,
    Storage, Tag,
};

const SHORT_ID_LEN: usize = 8;

fn hue_color(hue: Hue) -> Color {
    let (r, g, b) = match hue {
        Hue::Blue => (59, 130, 246),
        Hue::Purple => (168, 85, 247),
        Hue::Green => (34, 197, 94),
        Hue::Pink => (236, 72, 153),
        Hue::Red => (239, 68, 68),
        Hue::Teal => (20, 184, 166),
        Hue::Amber => (245, 158, 11),
        Hue::Indigo => (99, 102, 241),
        Hue::Orange => (249, 115, 22),
        Hue::Cyan => (6, 182, 212),
        Hue::Violet => (139, 92, 246),
        Hue::Gray => (156, 163, 175),
    };
    Color::TrueColor { r, g, b }
}

pub fn paint(text: &str, hue: Hue) -> ColoredString {
    text.color(hue_color(hue))
}

pub fn short_id(id: &CardId) -> &str {
    let s = id.as_str();
    match s.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fn tag_chips(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| paint(&format!("[{}]", tag.label()), tag.hue()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Print the board, columns stacked in category order.
pub fn print_board(board: &Board<'_>, filter: &Filter) {
    if board.total_cards == 0 {
        println!(
            "{}",
            "No technologies yet. Add one with 'speech-kanban add <name> -d <description>'."
                .dimmed()
        );
        return;
    }

    if filter.is_active() {
        println!(
            "{} {} of {} cards",
            "Filtered:".bold(),
            board.visible_cards(),
            board.total_cards
        );
        println!();
    }

    for column in &board.columns {
        print_column(column);
        println!();
    }
}

fn print_column(column: &Column<'_>) {
    println!(
        "{} {}",
        paint(column.label(), column.hue()).bold(),
        format!("({})", column.cards.len()).dimmed()
    );
    println!("{}", "─".repeat(40).dimmed());

    if column.is_empty() {
        println!("  {}", "Drop technologies here".dimmed());
        return;
    }

    for card in &column.cards {
        println!(
            "  {} {}",
            card.name.cyan().bold(),
            short_id(&card.id).dimmed()
        );
        println!("    {}", truncate(&card.description, 72));
        if !card.tags.is_empty() {
            println!("    {}", tag_chips(&card.tags));
        }
    }
}

/// Print cards as a table.
pub fn print_cards_table(cards: &[&Card]) {
    if cards.is_empty() {
        println!("{}", "No technologies match the current filter.".dimmed());
        return;
    }

    println!("{:<10} {:<24} {:<18} Tags", "ID", "Name", "Category");
    println!("{}", "-".repeat(80));

    for card in cards {
        println!(
            "{:<10} {:<24} {} {}",
            short_id(&card.id),
            truncate(&card.name, 22),
            paint(&format!("{:<18}", card.category.label()), card.category.hue()),
            tag_chips(&card.tags)
        );
    }
}

/// Print a single card.
pub fn print_card(card: &Card) {
    println!("{} {}", card.name.cyan().bold(), format!("({})", card.id).dimmed());
    println!();
    println!("{}", card.description);
    println!();
    println!(
        "{}: {}",
        "Category".bold(),
        paint(card.category.label(), card.category.hue())
    );
    if !card.tags.is_empty() {
        println!("{}: {}", "Tags".bold(), tag_chips(&card.tags));
    }
    if let Some(notes) = &card.notes {
        println!("{}: {}", "Notes".bold(), notes);
    }
    println!(
        "{}: {}",
        "Created".bold(),
        card.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "{}: {}",
        "Updated".bold(),
        card.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
}

/// Print the tag vocabulary with usage counts.
pub fn print_tags<S: Storage>(store: &CardStore<S>) {
    for tag in Tag::KNOWN {
        let used = store.query("", std::slice::from_ref(&tag)).len();
        println!("{:<14} {}", paint(tag.label(), tag.hue()), used.to_string().dimmed());
    }

    let mut unrecognized: Vec<&Tag> = store
        .cards()
        .iter()
        .flat_map(|card| card.tags.iter())
        .filter(|tag| !tag.is_known())
        .collect();
    unrecognized.sort_by(|a, b| a.label().cmp(b.label()));
    unrecognized.dedup();

    if !unrecognized.is_empty() {
        println!();
        println!("{}", "Unrecognized tags in use".bold());
        for tag in unrecognized {
            println!("  {}", paint(tag.label(), tag.hue()));
        }
    }
}

/// Print the categories with card counts.
pub fn print_categories<S: Storage>(store: &CardStore<S>) {
    let all = Filter::default();
    for category in Category::ALL {
        let count = store.by_category(category, &all).len();
        println!(
            "{:<18} {}",
            paint(category.label(), category.hue()),
            count.to_string().dimmed()
        );
    }
}

pub fn print_notifications(notifications: &[Notification]) {
    for notification in notifications {
        match notification.level {
            Level::Success => {
                eprintln!("{} {}", "✓".green(), notification.message.dimmed())
            }
            Level::Error => eprintln!("{} {}", "✗".red().bold(), notification.message.red()),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// JSON shape of one board column
#[derive(Serialize)]
pub struct ColumnJson<'a> {
    pub category: Category,
    pub hue: Hue,
    pub cards: &'a [&'a Card],
}

impl<'a> From<&'a Column<'a>> for ColumnJson<'a> {
    fn from(column: &'a Column<'a>) -> Self {
        Self {
            category: column.category,
            hue: column.hue(),
            cards: &column.cards,
        }
    }
}
