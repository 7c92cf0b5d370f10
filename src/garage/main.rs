use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use garage::api::{CmdMessage, ConfigAction, GarageApi, GaragePaths, MessageLevel};
use garage::config::GarageConfig;
use garage::error::{GarageError, Result};
use garage::model::{Car, CarFields, CarId};
use garage::store::fs::FileStore;
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
    api: GarageApi<FileStore>,
    currency: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            brand,
            model,
            year,
            price,
        }) => handle_add(&mut ctx, brand, model, year, price),
        Some(Commands::List { brand }) => handle_list(&ctx, brand),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Edit {
            id,
            brand,
            model,
            year,
            price,
        }) => handle_edit(&mut ctx, id, brand, model, year, price),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    // GARAGE_DATA overrides the OS data directory (primarily for testing).
    let data_dir = std::env::var("GARAGE_DATA")
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let proj_dirs =
                ProjectDirs::from("com", "garage", "garage").expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        });

    let config = GarageConfig::load(&data_dir)?;
    let currency = config.currency.clone();

    let store = FileStore::new(data_dir.clone());
    let paths = GaragePaths { data: data_dir };
    let api = GarageApi::open(store, paths)?;

    Ok(AppContext { api, currency })
}

/// Re-render the listing whenever the collection changes. Mutating handlers
/// register this before calling into the API.
fn subscribe_renderer(ctx: &mut AppContext) {
    let currency = ctx.currency.clone();
    ctx.api
        .subscribe(Box::new(move |cars| print_cars(cars, &currency)));
}

fn car_fields(brand: String, model: String, year: i32, price: f64) -> Result<CarFields> {
    if brand.trim().is_empty() {
        return Err(GarageError::Api("Brand cannot be empty".into()));
    }
    Ok(CarFields::new(brand, model, year, price))
}

fn handle_add(
    ctx: &mut AppContext,
    brand: String,
    model: String,
    year: i32,
    price: f64,
) -> Result<()> {
    let fields = car_fields(brand, model, year, price)?;
    subscribe_renderer(ctx);
    let result = ctx.api.add_car(fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, brand: Option<String>) -> Result<()> {
    let result = ctx.api.list_cars(brand.as_deref().unwrap_or(""))?;
    print_cars(&result.listed_cars, &ctx.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: CarId) -> Result<()> {
    let result = ctx.api.show_car(id)?;
    for car in &result.listed_cars {
        print_car_detail(car, &ctx.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: CarId,
    brand: String,
    model: String,
    year: i32,
    price: f64,
) -> Result<()> {
    let fields = car_fields(brand, model, year, price)?;
    subscribe_renderer(ctx);
    let result = ctx.api.update_car(id, fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: CarId, yes: bool) -> Result<()> {
    subscribe_renderer(ctx);
    let result = ctx.api.delete_car(id, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("currency = {}", config.currency);
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

const NAME_WIDTH: usize = 40;
const PRICE_WIDTH: usize = 12;

fn print_cars(cars: &[Car], currency: &str) {
    if cars.is_empty() {
        println!("No cars found");
        return;
    }

    for car in cars {
        let idx_str = format!("{:>4}. ", car.id);
        let name = format!("{} {}", car.brand, car.model);
        let name_display = truncate_to_width(&name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name_display.width());
        let price = format!("{}{}", currency, car.price);

        println!(
            "{}{}{}  {}  {:>width$}",
            idx_str,
            name_display.bold(),
            " ".repeat(padding),
            car.year.to_string().dimmed(),
            price,
            width = PRICE_WIDTH
        );
    }
}

fn print_car_detail(car: &Car, currency: &str) {
    println!("{}", format!("Car Details (ID: {})", car.id).bold());
    println!("--------------------------------");
    println!("Brand: {}", car.brand);
    println!("Model: {}", car.model);
    println!("Year:  {}", car.year);
    println!("Price: {}{}", currency, car.price);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
