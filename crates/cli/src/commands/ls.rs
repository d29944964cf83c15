use anyhow::Result;
use photogallery_core::Gallery;

use crate::render::format_view;

pub fn run(gallery: &mut Gallery, tags: &[String], event: Option<usize>, json: bool) -> Result<()> {
    super::prepare(gallery, event, tags)?;
    let view = gallery.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view.grid)?);
        return Ok(());
    }

    print!("{}", format_view(&view));
    if view.message.is_none() {
        println!(
            "  {} of {} images shown",
            view.grid.iter().filter(|c| !c.hidden).count(),
            gallery.active_images().len()
        );
    }
    println!();
    Ok(())
}
