use tweenline::animate;
use tweenline::mocks::document::{MockDocument, MockElement};
use tweenline::props;
use tweenline::tweens::{Timeline, TimelineEvent, Tween, TweenOptions};

#[tweenline::runtime]
async fn main() {
    let document = MockDocument::new().with_element(
        ".step",
        MockElement::new().with_computed_style("opacity", "1"),
    );

    let timeline = animate::timeline(&document);

    // Attach the callbacks before registering any tween: the timeline
    // starts polling as soon as the first tween is registered.
    timeline.on(TimelineEvent::OnStart, |_: Timeline| async move {
        println!("timeline started");
        Ok(())
    });
    timeline.on(TimelineEvent::OnRelease, |tween: Tween| async move {
        println!("released: {}", tween);
        Ok(())
    });
    timeline.on(TimelineEvent::OnComplete, |_: Timeline| async move {
        println!("timeline complete");
        Ok(())
    });

    timeline
        .from(
            ".step",
            props! { opacity: 0 },
            TweenOptions::with_duration(0.3),
        )
        .unwrap();
    timeline
        .to(
            ".step",
            props! { opacity: 0.5 },
            TweenOptions::with_duration(0.3),
        )
        .unwrap();

    // No explicit pause: the runtime waits for the polling task and the
    // callbacks before exiting.
}
