use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use photogallery_core::view::{GalleryView, LightboxView, RenderAdapter};

/// Prints each view to stdout.
pub struct TerminalRenderer;

impl RenderAdapter for TerminalRenderer {
    fn render(&mut self, view: &GalleryView) {
        println!("{}", format_view(view));
    }
}

/// Full-screen rendering: the lightbox when open, otherwise the grid or event cards.
pub(crate) fn format_view(view: &GalleryView) -> String {
    if let Some(lightbox) = &view.lightbox {
        return format_lightbox(lightbox);
    }

    let mut out = String::new();
    if let Some(title) = &view.title {
        out.push_str(&format!("\n  {title}\n  {}\n", "-".repeat(title.chars().count())));
    }
    if let Some(bar) = filter_bar(view) {
        out.push_str(&format!("\n  {bar}\n"));
    }
    if let Some(message) = &view.message {
        out.push_str(&format!("\n  {message}\n"));
    } else if !view.events.is_empty() {
        out.push_str(&format!("{}\n", events_table(view)));
    } else {
        out.push_str(&format!("{}\n", grid_table(view)));
        let hidden = hidden_count(view);
        if hidden > 0 {
            out.push_str(&format!("  {hidden} hidden (failed to load)\n"));
        }
    }
    out
}

/// `[All] cat dog` with the active buttons bracketed; `None` when the bar is hidden.
pub(crate) fn filter_bar(view: &GalleryView) -> Option<String> {
    if view.filters.is_empty() {
        return None;
    }
    let buttons: Vec<String> = view
        .filters
        .iter()
        .map(|b| {
            if b.active {
                format!("[{}]", b.label)
            } else {
                b.label.clone()
            }
        })
        .collect();
    Some(format!("Tags: {}", buttons.join("  ")))
}

pub(crate) fn grid_table(view: &GalleryView) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("#"), Cell::new("Name"), Cell::new("URL")]);

    for cell in view.grid.iter().filter(|c| !c.hidden) {
        table.add_row(vec![Cell::new(cell.index), Cell::new(&cell.name), Cell::new(&cell.url)]);
    }
    table
}

pub(crate) fn events_table(view: &GalleryView) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Event"),
        Cell::new("Photos"),
        Cell::new("Preview"),
    ]);

    for card in &view.events {
        let preview = if card.hidden_preview {
            "-".to_string()
        } else {
            card.preview_url.clone()
        };
        table.add_row(vec![
            Cell::new(card.index),
            Cell::new(&card.name),
            Cell::new(format!("{} photos", card.photo_count)),
            Cell::new(preview),
        ]);
    }
    table
}

pub(crate) fn format_lightbox(lightbox: &LightboxView) -> String {
    format!(
        "\n  {}  {}\n  {}\n\n  ← prev   → next   esc close\n",
        lightbox.counter, lightbox.name, lightbox.url
    )
}

fn hidden_count(view: &GalleryView) -> usize {
    view.grid.iter().filter(|c| c.hidden).count()
}
