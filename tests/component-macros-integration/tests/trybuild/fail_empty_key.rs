#![allow(dead_code)]
use component_macros::Injectable;
use std::sync::Arc;

#[derive(Injectable)]
struct Deps {
    #[inject("")]
    service: Arc<String>,
}

fn main() {}
