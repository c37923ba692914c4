/// Window lifecycle hooks: load completion and connectivity

use gloo::events::EventListener;

use crate::ui::context::AppContext;

pub struct PageLifecycle {
    _on_load: Option<EventListener>,
    _connectivity: [EventListener; 2],
}

impl PageLifecycle {
    pub fn install(ctx: &AppContext) -> Self {
        let document = ctx.document.clone();
        let window = ctx.window.clone();
        let mark_loaded = move || {
            if let Some(body) = document.body() {
                let _ = body.class_list().add_1("loaded");
            }
            if let Some(performance) = window.performance() {
                log::info!("Page loaded in {:.0}ms", performance.now());
            }
        };

        // The load event may already have fired if the module arrived late
        let on_load = if ctx.document.ready_state() == "complete" {
            mark_loaded();
            None
        } else {
            Some(EventListener::once(&ctx.window, "load", move |_| mark_loaded()))
        };

        let online = EventListener::new(&ctx.window, "online", |_| {
            log::info!("Connection restored");
        });
        let offline = EventListener::new(&ctx.window, "offline", |_| {
            log::warn!("Connection lost");
        });

        PageLifecycle {
            _on_load: on_load,
            _connectivity: [online, offline],
        }
    }
}
