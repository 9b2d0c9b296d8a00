// Example: a month list scrolled by hand, printing what the host would apply.
use infinite_list::{Placement, Virtualizer, VirtualizerOptions, ViewportMetrics};

fn main() {
    // Ten years of months, 200px each, viewed through a 400px tall container.
    let mut v = Virtualizer::new(VirtualizerOptions::new(120));
    let mut viewport = ViewportMetrics::new(400);

    let mut items = 0usize;
    let initial = v.populate(&viewport, |p| match p {
        Placement::SpaceHolder { kind, height } => println!("placeholder {kind:?}: {height}px"),
        Placement::Item { .. } => items += 1,
    });
    println!("rendered {items} items, live window={:?}", initial.window);

    v.attach();
    for scroll_top in [40, 120, 4400, 4450, 9000, -30] {
        viewport.scroll_top = scroll_top;
        match v.on_scroll(&viewport).update() {
            Some(update) => println!(
                "scroll_top={scroll_top}: central={} window={:?} holders={:?} +{} -{}",
                update.central_index,
                update.window,
                update.space_holders,
                update.expanded_len(),
                update.collapsed_len(),
            ),
            None => println!("scroll_top={scroll_top}: throttled"),
        }
    }

    v.detach();
    println!("after detach: {:?}", v.state());
}
