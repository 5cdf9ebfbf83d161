extern crate tweenline_macros;

#[tweenline_macros::runtime]
fn example_function() {}

fn main() {}
