use anyhow::{bail, Result};
use photogallery_core::domain::Layout;
use photogallery_core::Gallery;

use crate::render::events_table;

pub fn run(gallery: &Gallery, json: bool) -> Result<()> {
    if gallery.layout() != Layout::Events {
        bail!("not an event gallery (pass --events to read an event manifest)");
    }

    let view = gallery.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view.events)?);
        return Ok(());
    }

    match &view.message {
        Some(message) => println!("{message}"),
        None => {
            println!();
            println!("  Events");
            println!("  ------");
            println!("{}", events_table(&view));
            println!();
        }
    }
    Ok(())
}
