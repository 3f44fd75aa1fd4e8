// Example: driving layout passes from viewport/scroll snapshots.
use sticky_layout::{
    FlowLayout, FlowOptions, FlowSection, FrameState, Rect, StickyHeaderPositioner,
};

fn main() {
    let layout = FlowLayout::new(
        FlowOptions::new(320).with_section_gap(8),
        [
            FlowSection::new(Some(24), vec![40, 40, 40]),
            FlowSection::new(Some(24), vec![40, 40]),
            FlowSection::new(None, vec![40]),
        ],
    );
    let positioner = StickyHeaderPositioner::new(layout);

    let mut frame = FrameState::new(320, 120, 0);
    for _ in 0..6 {
        let attrs = positioner.layout_pass(frame);
        let headers: Vec<_> = attrs
            .iter()
            .filter(|a| a.is_header())
            .map(|a| (a.index_path.section, a.frame.y))
            .collect();
        println!(
            "offset={:>3}  visible={:>2}  headers={headers:?}",
            frame.scroll.offset,
            attrs.len()
        );
        frame.scroll.offset += 60;
    }

    // Any bounds change forces a fresh pass; nothing is cached between them.
    let rotated = Rect::new(0, 0, 480, 320);
    println!(
        "invalidate on bounds change: {}",
        positioner.should_invalidate_for_bounds_change(rotated)
    );
}
