use tweenline::animate;
use tweenline::mocks::document::{MockDocument, MockElement};
use tweenline::props;
use tweenline::tweens::TweenOptions;

#[tweenline::runtime]
async fn main() {
    // Swap the mock for your own engine's `Document` implementation.
    let document = MockDocument::new().with_element(
        ".card",
        MockElement::new().with_computed_style("opacity", "1"),
    );

    // Slide the card in from 40px left while it fades in.
    let tween = animate::from(
        &document,
        ".card",
        props! { x: -40, opacity: 0 },
        TweenOptions::with_duration(0.5),
    )
    .unwrap();

    println!("{}", tween);

    let element = document.get_element(".card").unwrap();
    println!(
        "inline transform: {}",
        element.get_inline_style("transform").unwrap()
    );
    println!("job playing: {}", element.get_jobs()[0].is_playing());
}
