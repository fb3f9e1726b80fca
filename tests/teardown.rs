//! Checks that building, evaluating, and dropping value trees releases every
//! allocation exactly once.
//!
//! The counting allocator is global to this test binary, so the file holds a
//! single test to keep other threads from allocating concurrently.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    sync::atomic::{AtomicUsize, Ordering},
};

use rlisp::{
    config::Config,
    eval_source,
    interpreter::{
        builder::build, evaluator::core::Evaluator, parser::core::parse_program,
        value::core::Value,
    },
};

struct Counting;

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static RELEASED: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOCATED.fetch_add(1, Ordering::SeqCst);
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        RELEASED.fetch_add(1, Ordering::SeqCst);
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

/// Allocations not yet released.
fn live_allocations() -> isize {
    let allocated = ALLOCATED.load(Ordering::SeqCst);
    let released = RELEASED.load(Ordering::SeqCst);
    allocated as isize - released as isize
}

fn nested(depth: usize, innermost: &str) -> String {
    format!("{}{innermost}{}", "(+ 1 ".repeat(depth), ")".repeat(depth))
}

#[test]
fn every_allocation_is_released() {
    let config = Config::default();
    let inputs = [nested(50, "2"),
                  nested(50, "(/ 1 0)"),
                  nested(50, "(foo 1 2)"),
                  nested(50, "99999999999999999999"),
                  nested(50, "()"),
                  "(+ (/ 1 0) (/ 2 0))".to_string(),
                  "(+ 1".to_string()];

    // Warm up lazily initialized state (tracing callsites, thread locals) so
    // it is not mistaken for a leak.
    for input in &inputs {
        let _ = eval_source(input, &config);
    }

    for input in &inputs {
        let before = live_allocations();
        let result = eval_source(input, &config);
        drop(result);
        assert_eq!(live_allocations(), before, "leak or double release for `{input}`");
    }

    // Build and evaluate by hand, dropping the value tree explicitly.
    let syntax = parse_program(&nested(50, "3"), config.max_depth).unwrap();
    let before = live_allocations();
    let root = build(&syntax);
    assert_eq!(root.node_count(), 1 + 50 * 3 + 1);
    let result = Evaluator::new(&config).eval(&root.children()[0]);
    assert_eq!(result, Value::Number(53));
    drop(result);
    drop(root);
    assert_eq!(live_allocations(), before);
}
