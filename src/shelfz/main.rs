use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelfz::api::{CatalogApi, CmdMessage, ConfigAction, MessageLevel};
use shelfz::config::ShelfzConfig;
use shelfz::error::Result;
use shelfz::filter::FilterState;
use shelfz::model::{CatalogProduct, Category, Sex, User};
use shelfz::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CatalogApi<FileStore>,
    show_icons: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            owner,
            search,
            categories,
        }) => handle_list(&ctx, owner, search, categories),
        Some(Commands::Owners) => handle_owners(&ctx),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None, Vec::new()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".shelfz");

    let proj_dirs =
        ProjectDirs::from("com", "shelfz", "shelfz").expect("Could not determine data dir");
    let global_dir = proj_dirs.data_dir().to_path_buf();

    let config_dir = if project_dir.exists() {
        project_dir.clone()
    } else {
        global_dir.clone()
    };
    let config = ShelfzConfig::load(&config_dir).unwrap_or_default();

    // Catalog discovery: explicit flag, else the project catalog, else the
    // user-wide one. Init always targets the project catalog so a fresh
    // `shelfz init` scaffolds into the current directory.
    let catalog_path = match &cli.catalog {
        Some(path) => path.clone(),
        None if matches!(cli.command, Some(Commands::Init)) => {
            project_dir.join(config.catalog_file())
        }
        None => {
            let project_catalog = project_dir.join(config.catalog_file());
            if project_catalog.exists() {
                project_catalog
            } else {
                global_dir.join(config.catalog_file())
            }
        }
    };

    let api = CatalogApi::new(FileStore::new(catalog_path), config_dir);
    Ok(AppContext {
        api,
        show_icons: config.show_icons(),
    })
}

fn handle_list(
    ctx: &AppContext,
    owner: Option<String>,
    search: Option<String>,
    categories: Vec<String>,
) -> Result<()> {
    let mut filter = FilterState::new();
    if let Some(owner) = owner {
        filter.set_owner(owner);
    }
    if let Some(search) = search {
        filter.set_search(search);
    }
    for title in categories {
        filter.toggle_category(title);
    }

    let result = ctx.api.list_products(&filter)?;
    print_products(&result.products, ctx.show_icons);
    print_messages(&result.messages);
    Ok(())
}

fn handle_owners(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.owners()?;
    print_owners(&result.owners);
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print_categories(&result.categories, ctx.show_icons);
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init_catalog()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            println!("catalog-file = {}", config.catalog_file());
            println!("show-icons = {}", config.show_icons());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];
const COLUMN_GAP: &str = "  ";

fn print_products(rows: &[CatalogProduct], show_icons: bool) {
    if rows.is_empty() {
        println!("No products matching selected criteria.");
        return;
    }

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.product.id.to_string(),
                row.product.name.clone(),
                category_cell(&row.category, show_icons),
                row.user.name.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header = HEADERS
        .iter()
        .zip(&widths)
        .map(|(title, width)| pad_cell(title, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    println!("{}", header.bold());

    for (row, line) in rows.iter().zip(&cells) {
        let user_cell = pad_cell(&line[3], widths[3]);
        let user_colored = match row.user.sex {
            Sex::M => user_cell.blue(),
            Sex::F => user_cell.red(),
        };
        println!(
            "{}{}{}{}{}{}{}",
            pad_cell(&line[0], widths[0]).bold(),
            COLUMN_GAP,
            pad_cell(&line[1], widths[1]),
            COLUMN_GAP,
            pad_cell(&line[2], widths[2]),
            COLUMN_GAP,
            user_colored
        );
    }
}

fn print_owners(users: &[User]) {
    // "All" is part of the owner surface: selecting it disables the filter.
    println!("{}", "All".bold());
    for user in users {
        let name = match user.sex {
            Sex::M => user.name.blue(),
            Sex::F => user.name.red(),
        };
        println!("{}", name);
    }
}

fn print_categories(categories: &[Category], show_icons: bool) {
    for category in categories {
        println!("{}", category_cell(category, show_icons));
    }
}

fn category_cell(category: &Category, show_icons: bool) -> String {
    if show_icons {
        format!("{} - {}", category.icon, category.title)
    } else {
        category.title.clone()
    }
}

fn pad_cell(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}
