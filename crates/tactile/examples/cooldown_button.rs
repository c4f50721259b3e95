//! A button with a two-second cooldown, driven by scripted touches.
//!
//! Run with: cargo run -p tactile --example cooldown_button
//!
//! Set `RUST_LOG=trace` to see every button event.

use std::cell::Cell;
use std::rc::Rc;
use tactile::prelude::*;

const FRAME: f32 = 0.25;

fn main() {
    let config = Config {
        max_frame_delta: Some(0.5),
        ..Config::default()
    };
    config.install();

    let mut stage = Stage::new(config);
    let menu = stage.scene.graph.add_node(Node::new("menu"));

    let presses = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&presses);
    let button = Button::builder("res/ui/start.png")
        .size(Size::new(120.0, 48.0))
        .position(Vec2::new(160.0, 240.0))
        .callback(menu, move |scene, _owner, _button| {
            counter.set(counter.get() + 1);
            tracing::info!(
                t = scene.time().elapsed_seconds(),
                count = counter.get(),
                "start pressed"
            );
        })
        .build(&mut stage.scene)
        .expect("button texture is valid");

    {
        let mut button = button.borrow_mut();
        button.set_cool_down(2.0);
        button.set_event_hook(Some(Rc::new(|event: &ButtonEvent| {
            tracing::trace!(?event)
        })));
    }
    stage.enter(&button);

    let at = Vec2::new(160.0, 240.0);
    let mut finger = 0;
    // Tap every half second for four seconds; taps inside the cooldown bounce.
    for frame in 0..16 {
        if frame % 2 == 0 {
            let id = TouchId(finger);
            finger += 1;
            stage.touches.push_began(id, at);
            stage.touches.push_ended(id, at);
        }
        stage.update(FRAME);
    }

    tracing::info!(
        accepted = presses.get(),
        frames = stage.scene.time().frame_count(),
        "done"
    );
}
