use anyhow::Result;
use photogallery_core::Gallery;

use crate::render::filter_bar;

pub fn run(gallery: &mut Gallery, event: Option<usize>) -> Result<()> {
    super::prepare(gallery, event, &[])?;

    match filter_bar(&gallery.view()) {
        Some(bar) => println!("{bar}"),
        None => println!("No tags in this gallery."),
    }
    Ok(())
}
