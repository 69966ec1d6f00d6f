use clap::Parser;
use colored::Colorize;

use tome::commands;
use tome::config::StoreConfig;
use tome::error::Result;
use tome::model::{split_list, BookDraft};
use tome::store::{open_store, BookStore};

mod cli;

use cli::print;
use cli::{Cli, Commands};

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .ok();

    let cli = Cli::parse();
    let config = StoreConfig::resolve(cli.db.clone());
    let mut store = match open_store(&config) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli.command, store.as_mut(), &config) {
        eprintln!("{} {}", "Error:".red(), err);
        std::process::exit(1);
    }
}

fn run(command: Commands, store: &mut dyn BookStore, config: &StoreConfig) -> Result<()> {
    match command {
        Commands::Add {
            title,
            author,
            year,
            genre,
            tags,
            isbn,
            pages,
        } => {
            let draft = BookDraft {
                title,
                author,
                year,
                genre,
                isbn,
                pages,
                tags: tags.iter().flat_map(|t| split_list(t)).collect(),
                ..BookDraft::default()
            };
            let result = commands::add::run(store, draft)?;
            print::print_messages(&result);
        }

        Commands::List { search, sort, long } => {
            let result = commands::list::run(
                store,
                &search.criteria(),
                sort.field(),
                sort.secondary_field(),
                sort.desc,
            )?;
            if long {
                let shown = match sort.limit {
                    Some(n) => &result.books[..n.min(result.books.len())],
                    None => &result.books[..],
                };
                for book in shown {
                    print::print_book_long(book);
                }
            } else {
                print::print_table(&result.books, sort.limit);
                println!("\nTotal: {}", result.books.len());
            }
        }

        Commands::Find { search, sort } => {
            let result = commands::find::run(
                store,
                &search.criteria(),
                sort.field(),
                sort.secondary_field(),
                sort.desc,
            )?;
            print::print_messages(&result);
            if !result.books.is_empty() {
                print::print_table(&result.books, sort.limit);
                println!("\nFound: {}", result.books.len());
            }
        }

        Commands::Sort { sort } => {
            let result =
                commands::sort::run(store, sort.field(), sort.secondary_field(), sort.desc)?;
            print::print_table(&result.books, sort.limit);
        }

        Commands::Show { id } => {
            let result = commands::show::run(store, &id)?;
            print::print_messages(&result);
            if let Some(book) = result.books.first() {
                print::print_book_detail(book);
            }
        }

        Commands::Update {
            id,
            title,
            author,
            year,
            genre,
            tags,
            isbn,
            pages,
        } => {
            let fields = commands::update::UpdateFields {
                title,
                author,
                year,
                genre,
                isbn,
                pages,
                tags: tags.map(|ts| ts.iter().flat_map(|t| split_list(t)).collect()),
            };
            let result = commands::update::run(store, &id, fields)?;
            print::print_messages(&result);
        }

        Commands::Remove { id } => {
            let result = commands::remove::run(store, &id)?;
            print::print_messages(&result);
        }

        Commands::AddQuote { id, text } => {
            let result = commands::quotes::add(store, &id, &text)?;
            print::print_messages(&result);
        }

        Commands::DelQuote { id, index } => {
            let result = commands::quotes::remove(store, &id, index)?;
            print::print_messages(&result);
        }

        Commands::ExportCsv { path } => {
            let result = commands::export::run(store, &path)?;
            print::print_messages(&result);
        }

        Commands::ImportCsv { path } => {
            let result = commands::import::run(store, &path)?;
            print::print_messages(&result);
        }

        Commands::MigrateSqlite { src, dst } => {
            let src = src.unwrap_or_else(|| config.path.clone());
            let result = commands::migrate::run(&src, &dst)?;
            print::print_messages(&result);
        }
    }
    Ok(())
}
