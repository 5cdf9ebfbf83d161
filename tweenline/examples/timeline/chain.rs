use tweenline::animate;
use tweenline::mocks::document::{MockDocument, MockElement};
use tweenline::pause;
use tweenline::props;
use tweenline::tweens::TweenOptions;

#[tweenline::runtime]
async fn main() {
    let document = MockDocument::new()
        .with_element(
            ".title",
            MockElement::new().with_computed_style("opacity", "1"),
        )
        .with_element(
            ".card",
            MockElement::new().with_computed_style("opacity", "1"),
        );

    let timeline = animate::timeline(&document);

    // The title plays first. The card is released once the title's 500ms
    // are over, shifted by an extra 250ms offset.
    timeline
        .from(
            ".title",
            props! { y: -20, opacity: 0 },
            TweenOptions::with_duration(0.5),
        )
        .unwrap();
    timeline
        .from(
            ".card",
            props! { scale: 0.8, opacity: 0 },
            TweenOptions::with_duration(0.5).set_offset(0.25),
        )
        .unwrap();

    println!("{}", timeline);

    // Wait for the whole sequence to be released.
    pause!(1000);
    println!("timeline playing: {}", timeline.is_playing());
}
