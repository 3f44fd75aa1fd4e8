// Example: watch one section's header pin to the viewport top, then release.
use sticky_layout::{FlowLayout, FlowOptions, FlowSection, Rect, StickyHeaderPositioner};

fn main() {
    // Three sections of contacts-style rows: 30-high headers, 44-high cells.
    let layout = FlowLayout::new(
        FlowOptions::new(320),
        (0..3).map(|_| FlowSection::new(Some(30), vec![44; 8])),
    );
    let positioner = StickyHeaderPositioner::new(layout);

    let viewport_height = 200u32;
    for offset in (0..=500).step_by(100) {
        let rect = Rect::new(0, offset, 320, viewport_height);
        let attrs = positioner.layout_attributes_in_rect(rect, offset);

        let headers: Vec<_> = attrs
            .iter()
            .filter(|a| a.is_header())
            .map(|a| (a.index_path.section, a.frame.y))
            .collect();
        let cells = attrs.iter().filter(|a| a.is_cell()).count();
        println!("offset={offset:>4}  cells={cells:>2}  headers(section, y)={headers:?}");
    }

    // The pin range of section 1: resting position down to one header height
    // above its last cell's bottom edge.
    println!("section 1 pin range = {:?}", positioner.header_pin_range(1));
}
