// Example: headers are injected even when their default frame misses the
// query rect, as long as one of their section's cells is visible.
use sticky_layout::{FlowLayout, FlowOptions, FlowSection, LayoutSource, Rect, StickyHeaderPositioner};

fn main() {
    // One tall section: the header rests at the very top, far above the
    // middle of the section.
    let layout = FlowLayout::new(
        FlowOptions::new(320),
        [FlowSection::new(Some(40), vec![60; 50])],
    );
    let positioner = StickyHeaderPositioner::new(layout);

    // Scrolled deep into the section; the header's default frame [0, 40) is
    // nowhere near the query rect.
    let offset = 1_500;
    let rect = Rect::new(0, offset, 320, 240);

    let mut base = Vec::new();
    positioner.source().collect_in_rect(rect, &mut base);
    println!(
        "base query: {} attributes, {} headers",
        base.len(),
        base.iter().filter(|a| a.is_header()).count()
    );

    let attrs = positioner.layout_attributes_in_rect(rect, offset);
    for a in attrs.iter().filter(|a| a.is_header()) {
        println!(
            "sticky pass: header of section {} pinned at y={} (z={})",
            a.index_path.section, a.frame.y, a.z_index
        );
    }
}
