use anyhow::Result;
use photogallery_core::Gallery;

use crate::render::format_view;

pub fn run(gallery: &mut Gallery, index: usize, tags: &[String], event: Option<usize>) -> Result<()> {
    super::prepare(gallery, event, tags)?;
    gallery.open_image(index)?;
    print!("{}", format_view(&gallery.view()));
    Ok(())
}
