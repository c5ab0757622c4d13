use std::alloc::{GlobalAlloc, Layout, System};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tui_bounce::core::RuntimeState;
use tui_bounce::term::{encode_frame_into, BoxView, FrameBuffer};
use tui_bounce::types::Config;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn frame_loop_is_allocation_free_after_warmup() {
    let config = Config::new(80, 24, NonZeroU32::new(60));
    let view = BoxView::new();
    let mut fb = FrameBuffer::new(config.width, config.height);
    let mut out = Vec::with_capacity(64 * 1024);

    let t0 = Instant::now();
    let mut state = RuntimeState::new(&config, t0);
    let mut now = t0;

    // Warm-up.
    now += Duration::from_millis(16);
    state.step(now, &config);
    view.render_into(state.ball(), state.pacer().current_fps(), &config, &mut fb);
    encode_frame_into(&fb, &mut out).unwrap();

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            now += Duration::from_millis(16);
            state.step(now, &config);
            view.render_into(state.ball(), state.pacer().current_fps(), &config, &mut fb);
            state.finish_tick();
            out.clear();
            encode_frame_into(&fb, &mut out).unwrap();
        }
    });

    assert!(allocs == 0);
}
