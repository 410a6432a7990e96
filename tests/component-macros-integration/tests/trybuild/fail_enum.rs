#![allow(dead_code)]
use component_macros::Injectable;

#[derive(Injectable)]
enum Deps {
    First,
}

fn main() {}
