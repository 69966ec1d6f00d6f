use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use tome::commands::{CmdResult, MessageLevel};
use tome::model::Book;

const COLUMNS: [(&str, usize); 6] = [
    ("id", 8),
    ("Title", 28),
    ("Author", 22),
    ("Year", 6),
    ("Genre", 12),
    ("Tags", 24),
];

pub fn print_messages(result: &CmdResult) {
    for message in &result.messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Info => println!("{}", message.content),
        }
    }
}

pub fn print_table(books: &[Book], limit: Option<usize>) {
    let header: Vec<String> = COLUMNS.iter().map(|(name, w)| fit(name, *w)).collect();
    println!("{}", header.join("  ").bold());
    let total_width: usize = COLUMNS.iter().map(|(_, w)| w + 2).sum();
    println!("{}", "-".repeat(total_width));

    let shown = match limit {
        Some(n) => &books[..n.min(books.len())],
        None => books,
    };
    for book in shown {
        let year = book.year.map(|y| y.to_string()).unwrap_or_default();
        let cells = [
            fit(&book.id[..8.min(book.id.len())], COLUMNS[0].1),
            fit(&book.title, COLUMNS[1].1),
            fit(&book.author, COLUMNS[2].1),
            fit(&year, COLUMNS[3].1),
            fit(book.genre.as_deref().unwrap_or(""), COLUMNS[4].1),
            fit(&book.tags.join(", "), COLUMNS[5].1),
        ];
        println!("{}", cells.join("  "));
    }
}

/// One-book-per-paragraph listing for `list --long`.
pub fn print_book_long(book: &Book) {
    let year = book
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    println!(
        "[{}] {} — {} ({}) [{}]",
        book.id,
        book.title.bold(),
        book.author,
        year,
        book.genre.as_deref().unwrap_or("—"),
    );
    if !book.tags.is_empty() {
        println!("  Tags: {}", book.tags.join(", "));
    }
    if let Some(isbn) = &book.isbn {
        println!("  ISBN: {}", isbn);
    }
    if let Some(pages) = book.pages {
        println!("  Pages: {}", pages);
    }
    if !book.quotes.is_empty() {
        println!("  Quotes: {}", book.quotes.len());
    }
    println!("  Added: {}", book.added_at);
    println!();
}

/// Full record view for `show`, quotes numbered from 1.
pub fn print_book_detail(book: &Book) {
    println!("[{}] {} — {}", book.id, book.title.bold(), book.author);
    let year = book
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n/a".to_string());
    println!(
        "Year: {}; Genre: {}",
        year,
        book.genre.as_deref().unwrap_or("—")
    );
    let tags = if book.tags.is_empty() {
        "—".to_string()
    } else {
        book.tags.join(", ")
    };
    println!("Tags: {}", tags);
    let pages = book
        .pages
        .map(|p| p.to_string())
        .unwrap_or_else(|| "—".to_string());
    println!(
        "ISBN: {}; Pages: {}",
        book.isbn.as_deref().unwrap_or("—"),
        pages
    );
    println!("Added: {}", book.added_at);
    println!("Quotes:");
    if book.quotes.is_empty() {
        println!("  —");
    } else {
        for (i, quote) in book.quotes.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, quote);
        }
    }
}

// Pads or truncates to a display width, unicode-aware, marking cuts with an
// ellipsis.
fn fit(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    used += 1;
    format!("{}{}", out, " ".repeat(width.saturating_sub(used)))
}
