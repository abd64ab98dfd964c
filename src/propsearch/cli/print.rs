use colored::Colorize;
use propsearch::api::{CmdMessage, HomeSummary, MessageLevel};
use propsearch::config::AppConfig;
use propsearch::model::Property;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const LOCATION_WIDTH: usize = 14;
const FAVORITE_MARKER: &str = "★";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per listing: marker, id, type, bedrooms, price, location, summary.
pub(super) fn print_properties<F>(properties: &[Property], is_favorite: F, config: &AppConfig)
where
    F: Fn(&str) -> bool,
{
    if properties.is_empty() {
        println!("No properties found.");
        return;
    }

    let id_width = properties.iter().map(|p| p.id.width()).max().unwrap_or(0);
    let price_width = properties
        .iter()
        .map(|p| config.format_price(p.price).width())
        .max()
        .unwrap_or(0);

    for p in properties {
        let marker = if is_favorite(&p.id) {
            format!("{} ", FAVORITE_MARKER).yellow()
        } else {
            "  ".normal()
        };
        let id = format!("{:<width$}", p.id, width = id_width);
        let kind = format!("{:<5}", p.property_type.to_string());
        let beds = format!("{} bed", p.bedrooms);
        let price = pad_left(&config.format_price(p.price), price_width);
        let location = pad_right(&truncate_to_width(&p.location, LOCATION_WIDTH), LOCATION_WIDTH);

        let fixed = 2 + id_width + 1 + 5 + 1 + beds.width() + 2 + price_width + 2 + LOCATION_WIDTH + 2;
        let summary = truncate_to_width(&p.summary(), LINE_WIDTH.saturating_sub(fixed));

        println!(
            "{}{} {} {}  {}  {}  {}",
            marker,
            id.yellow(),
            kind,
            beds,
            price.bold(),
            location,
            summary.dimmed()
        );
    }
}

pub(super) fn print_detail(property: &Property, is_favorite: bool, config: &AppConfig) {
    let marker = if is_favorite {
        format!(" {}", FAVORITE_MARKER)
    } else {
        String::new()
    };
    println!(
        "{}{}",
        format!(
            "{} bedroom {} in {}",
            property.bedrooms,
            property.property_type.to_string().to_lowercase(),
            property.location
        )
        .bold(),
        marker.yellow()
    );
    println!("--------------------------------");
    println!("{:<10}{}", "Price", config.format_price(property.price).bold());
    println!("{:<10}{}", "Tenure", property.tenure);
    println!("{:<10}{}", "Location", property.location);
    let added = property
        .added_date()
        .map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| {
            format!(
                "{} {} {}",
                property.added.day, property.added.month, property.added.year
            )
        });
    println!("{:<10}{}", "Added", added);
    println!("{:<10}{}", "Id", property.id.dimmed());
    println!();

    for line in property.description_lines() {
        println!("{}", line);
    }

    let gallery = property.gallery();
    println!();
    println!("{} ({})", "Pictures".bold(), gallery.len());
    for picture in gallery {
        println!("  {}", picture.dimmed());
    }
    if let Some(url) = &property.url {
        println!("{:<10}{}", "Listing", url.dimmed());
    }
}

pub(super) fn print_home(summary: &HomeSummary) {
    println!("{}", "Find your next home".bold());
    println!();
    println!(
        "{} listings across {} locations",
        summary.listings, summary.locations
    );
    println!("{} {}", summary.favorites, "favourite(s)".dimmed());
    if summary.active_filters > 0 {
        println!(
            "{} matching your last search ({} filter(s) active)",
            summary.results, summary.active_filters
        );
    }
    println!();
    println!("{}", "Try `propsearch search --help` to start browsing.".dimmed());
}

pub(super) fn print_locations(locations: &[String]) {
    for location in locations {
        println!("{}", location);
    }
}

pub(super) fn print_config(config: &AppConfig, dir: Option<&Path>) {
    if let Some(dir) = dir {
        println!("{}", format!("# {}", dir.join("config.json").display()).dimmed());
    }
    let catalog = config
        .catalog
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(bundled)".to_string());
    println!("catalog  = {}", catalog);
    println!("currency = {}", config.currency);
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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
