use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tome::filters::{SearchCriteria, SortField};

pub mod print;

#[derive(Parser, Debug)]
#[command(name = "tome")]
#[command(about = "Manage a personal book collection from the command line", long_about = None)]
pub struct Cli {
    /// Path to the catalog file; `.db`/`.sqlite`/`.sqlite3` selects the
    /// SQLite backend, anything else the JSON store
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text search over title and author
    #[arg(short, long)]
    pub query: Option<String>,

    /// Filter by author
    #[arg(long)]
    pub author: Option<String>,

    /// Filter by title
    #[arg(long)]
    pub title: Option<String>,

    /// Filter by publication year (exact)
    #[arg(long)]
    pub year: Option<i32>,

    /// Filter by genre
    #[arg(long)]
    pub genre: Option<String>,

    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Filter by ISBN
    #[arg(long)]
    pub isbn: Option<String>,

    /// Match fields exactly instead of by substring
    #[arg(long)]
    pub exact: bool,
}

impl SearchArgs {
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: self.query.clone(),
            author: self.author.clone(),
            title: self.title.clone(),
            year: self.year,
            genre: self.genre.clone(),
            tag: self.tag.clone(),
            isbn: self.isbn.clone(),
            exact: self.exact,
        }
    }
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Sort field: title, author, year, genre, added_at
    #[arg(long, default_value = "title")]
    pub by: String,

    /// Secondary sort field (same choices as --by)
    #[arg(long)]
    pub secondary: Option<String>,

    /// Reverse the ordering
    #[arg(long)]
    pub desc: bool,

    /// Show at most this many records
    #[arg(long)]
    pub limit: Option<usize>,
}

impl SortArgs {
    pub fn field(&self) -> SortField {
        SortField::parse(&self.by)
    }

    pub fn secondary_field(&self) -> Option<SortField> {
        self.secondary.as_deref().map(SortField::parse)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new book
    Add {
        /// Book title
        #[arg(short, long)]
        title: String,

        /// Book author
        #[arg(short, long)]
        author: String,

        /// Publication year
        #[arg(long)]
        year: Option<i32>,

        /// Genre
        #[arg(long)]
        genre: Option<String>,

        /// Tags (space separated; `;` and `,` also split)
        #[arg(long, num_args = 0..)]
        tags: Vec<String>,

        /// ISBN
        #[arg(long)]
        isbn: Option<String>,

        /// Page count
        #[arg(long)]
        pages: Option<u32>,
    },

    /// List books with optional search and sorting
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        search: SearchArgs,

        #[command(flatten)]
        sort: SortArgs,

        /// Show full details for each book
        #[arg(long)]
        long: bool,
    },

    /// Find books matching the given filters
    Find {
        #[command(flatten)]
        search: SearchArgs,

        #[command(flatten)]
        sort: SortArgs,
    },

    /// Print all books sorted by a field
    Sort {
        #[command(flatten)]
        sort: SortArgs,
    },

    /// Show full details for one book
    Show {
        /// Book id (a unique prefix is enough)
        id: String,
    },

    /// Update fields of a book; unspecified fields stay unchanged
    Update {
        /// Book id (a unique prefix is enough)
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New publication year
        #[arg(long)]
        year: Option<i32>,

        /// New genre
        #[arg(long)]
        genre: Option<String>,

        /// Full replacement tag list
        #[arg(long, num_args = 0..)]
        tags: Option<Vec<String>>,

        /// New ISBN
        #[arg(long)]
        isbn: Option<String>,

        /// New page count
        #[arg(long)]
        pages: Option<u32>,
    },

    /// Remove a book from the catalog
    #[command(alias = "rm")]
    Remove {
        /// Book id (a unique prefix is enough)
        id: String,
    },

    /// Attach a quote to a book
    AddQuote {
        /// Book id (a unique prefix is enough)
        id: String,

        /// Quote text
        text: String,
    },

    /// Delete a quote by its 1-based index
    DelQuote {
        /// Book id (a unique prefix is enough)
        id: String,

        /// Quote number, starting at 1
        index: usize,
    },

    /// Export the catalog to a CSV file
    ExportCsv {
        /// Destination CSV path
        path: PathBuf,
    },

    /// Import records from a CSV file
    ImportCsv {
        /// Source CSV path
        path: PathBuf,
    },

    /// Copy a JSON catalog into a SQLite database
    MigrateSqlite {
        /// Source JSON file (defaults to the active catalog path)
        #[arg(long)]
        src: Option<PathBuf>,

        /// Destination SQLite file
        #[arg(long, default_value = "library.db")]
        dst: PathBuf,
    },
}
