use infinite_list::{VirtualizerOptions, is_scrolled_to_bottom};
use infinite_list_adapter::sim::{SimEventHub, SimSurface, SimViewport};
use infinite_list_adapter::{
    ContainerId, Controller, ListSettings, ScrollContainer, ScrollEventKind, SubscriptionRegistry,
};

fn month_label(month: &u32) -> String {
    format!("{}-{:02}", 2020 + month / 12, month % 12 + 1)
}

fn main() {
    // Run with `--features tracing` to see the engine's decisions.
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .init();

    // A date picker showing ten years of months, opened on the current one.
    let months: Vec<u32> = (0..120).collect();
    let options = VirtualizerOptions::new(months.len())
        .with_item_height(200)
        .with_preload_items(3)
        .with_initial_offset_provider(|| 69 * 200);

    let container = ContainerId(1);
    let mut viewport = SimViewport::new(400, months.len() as u64 * 200);
    let mut surface = SimSurface::new();
    let mut registry = SubscriptionRegistry::new();
    let mut hub = SimEventHub::new();

    let mut picker = Controller::new(ListSettings::new(options, month_label), container);
    let initial = picker.populate(&months, &viewport, &mut surface);
    println!(
        "opened at {} (window {:?}), layout height {}px",
        surface.content(initial.central_index).map_or("?", String::as_str),
        initial.window,
        surface.layout_height(200),
    );

    println!("attach: {:?}", picker.attach(&mut registry, &mut hub));
    viewport.set_scroll_top(picker.virtualizer().offset() as i64);

    // A fling towards the end of the list, delivered as a burst of small scroll events.
    let mut top = viewport.metrics.scroll_top;
    while !is_scrolled_to_bottom(&viewport) {
        top += 60;
        viewport.set_scroll_top(top);
        let outcome = picker.on_scroll_event(ScrollEventKind::Scroll, &viewport, &mut surface);
        if let Some(update) = outcome.update() {
            println!(
                "scroll_top={} central={} holders={:?} collapsed={}",
                viewport.metrics.scroll_top,
                update.central_index,
                update.space_holders,
                surface.collapsed_count(),
            );
        }
    }

    // Jump back to the first month of 2024.
    picker.scroll_to_item(48, 0, &mut viewport);
    picker.on_scroll_event(ScrollEventKind::Scroll, &viewport, &mut surface);
    println!("jumped: {:?}", picker.virtualizer().state());

    picker.detach(&mut registry, &mut hub, &mut surface);
    println!(
        "detached: subscriptions={} collapsed={} instructions={}",
        hub.len(),
        surface.collapsed_count(),
        surface.instructions(),
    );
}
